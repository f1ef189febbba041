use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "certifications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    pub position: i32,

    #[sea_orm(column_type = "Text", string_len = 200)]
    pub name: String,

    #[sea_orm(column_type = "Text", string_len = 200)]
    pub issuer: String,

    #[sea_orm(column_type = "Text", string_len = 10)]
    pub issue_date: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub credential_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
