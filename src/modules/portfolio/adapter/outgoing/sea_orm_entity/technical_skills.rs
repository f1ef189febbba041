use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "technical_skills")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    pub position: i32,

    #[sea_orm(column_type = "Text", string_len = 100)]
    pub name: String,

    pub level: i32,

    /// Predefined label or `custom`
    #[sea_orm(column_type = "Text", string_len = 20)]
    pub category: String,

    #[sea_orm(column_type = "Uuid", nullable)]
    pub custom_category_id: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::custom_categories::Entity",
        from = "Column::CustomCategoryId",
        to = "super::custom_categories::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    CustomCategories,
}

impl Related<super::custom_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CustomCategories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
