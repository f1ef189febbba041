use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // projects
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Projects::Position)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Projects::Title).string_len(150).not_null())
                    .col(ColumnDef::new(Projects::Description).text().not_null())
                    .col(ColumnDef::new(Projects::ImageUrl).text())
                    .col(ColumnDef::new(Projects::GithubUrl).text())
                    .col(ColumnDef::new(Projects::LiveUrl).text())
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // project_technologies
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(ProjectTechnologies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectTechnologies::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProjectTechnologies::ProjectId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectTechnologies::Position)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ProjectTechnologies::Name)
                            .string_len(100)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_technologies_project_id")
                            .from(ProjectTechnologies::Table, ProjectTechnologies::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // project_features
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(ProjectFeatures::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectFeatures::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProjectFeatures::ProjectId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectFeatures::Position)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(ProjectFeatures::Content).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_features_project_id")
                            .from(ProjectFeatures::Table, ProjectFeatures::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_project_technologies_project_id
                ON project_technologies (project_id);
                CREATE INDEX IF NOT EXISTS idx_project_features_project_id
                ON project_features (project_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectFeatures::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProjectTechnologies::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    Position,
    Title,
    Description,
    ImageUrl,
    GithubUrl,
    LiveUrl,
}

#[derive(DeriveIden)]
enum ProjectTechnologies {
    Table,
    Id,
    ProjectId,
    Position,
    Name,
}

#[derive(DeriveIden)]
enum ProjectFeatures {
    Table,
    Id,
    ProjectId,
    Position,
    Content,
}
