use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "educations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    pub position: i32,

    #[sea_orm(column_type = "Text", string_len = 200)]
    pub institution: String,

    #[sea_orm(column_type = "Text", string_len = 200)]
    pub degree: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub field_of_study: Option<String>,

    #[sea_orm(column_type = "Text", string_len = 10)]
    pub start_date: String,

    #[sea_orm(column_type = "Text", string_len = 10, nullable)]
    pub end_date: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
