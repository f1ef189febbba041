use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    pub position: i32,

    #[sea_orm(column_type = "Text", string_len = 150)]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub image_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub github_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub live_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::project_technologies::Entity")]
    ProjectTechnologies,

    #[sea_orm(has_many = "super::project_features::Entity")]
    ProjectFeatures,
}

impl Related<super::project_technologies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectTechnologies.def()
    }
}

impl Related<super::project_features::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectFeatures.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
