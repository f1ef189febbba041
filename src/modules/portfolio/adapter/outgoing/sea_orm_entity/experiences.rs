use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "experiences")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    pub position: i32,

    #[sea_orm(column_type = "Text", string_len = 200)]
    pub company: String,

    #[sea_orm(column_type = "Text", string_len = 200)]
    pub role: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub location: Option<String>,

    #[sea_orm(column_type = "Text", string_len = 10)]
    pub start_date: String,

    /// NULL for the current position
    #[sea_orm(column_type = "Text", string_len = 10, nullable)]
    pub end_date: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::experience_descriptions::Entity")]
    ExperienceDescriptions,
}

impl Related<super::experience_descriptions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExperienceDescriptions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
