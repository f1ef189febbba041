use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "custom_categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    pub position: i32,

    #[sea_orm(column_type = "Text", string_len = 100)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::technical_skills::Entity")]
    TechnicalSkills,
}

impl Related<super::technical_skills::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TechnicalSkills.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
