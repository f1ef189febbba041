use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "experience_descriptions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub experience_id: Uuid,

    pub position: i32,

    #[sea_orm(column_type = "Text")]
    pub content: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::experiences::Entity",
        from = "Column::ExperienceId",
        to = "super::experiences::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Experiences,
}

impl Related<super::experiences::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Experiences.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
