use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "about")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 150)]
    pub name: String,

    #[sea_orm(column_type = "Text", string_len = 150)]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub bio: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub location: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub avatar_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub resume_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
