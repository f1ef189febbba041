use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // educations
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Educations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Educations::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Educations::Position)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Educations::Institution)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Educations::Degree).string_len(200).not_null())
                    .col(ColumnDef::new(Educations::FieldOfStudy).string_len(200))
                    .col(ColumnDef::new(Educations::StartDate).string_len(10).not_null())
                    .col(ColumnDef::new(Educations::EndDate).string_len(10))
                    .col(ColumnDef::new(Educations::Description).text())
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // experiences + experience_descriptions
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Experiences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Experiences::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Experiences::Position)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Experiences::Company)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Experiences::Role).string_len(200).not_null())
                    .col(ColumnDef::new(Experiences::Location).string_len(150))
                    .col(
                        ColumnDef::new(Experiences::StartDate)
                            .string_len(10)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Experiences::EndDate).string_len(10))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ExperienceDescriptions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExperienceDescriptions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ExperienceDescriptions::ExperienceId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ExperienceDescriptions::Position)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ExperienceDescriptions::Content)
                            .text()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_experience_descriptions_experience_id")
                            .from(
                                ExperienceDescriptions::Table,
                                ExperienceDescriptions::ExperienceId,
                            )
                            .to(Experiences::Table, Experiences::Id)
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
                CREATE INDEX IF NOT EXISTS idx_experience_descriptions_experience_id
                ON experience_descriptions (experience_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(ExperienceDescriptions::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Experiences::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Educations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Educations {
    Table,
    Id,
    Position,
    Institution,
    Degree,
    FieldOfStudy,
    StartDate,
    EndDate,
    Description,
}

#[derive(DeriveIden)]
enum Experiences {
    Table,
    Id,
    Position,
    Company,
    Role,
    Location,
    StartDate,
    EndDate,
}

#[derive(DeriveIden)]
enum ExperienceDescriptions {
    Table,
    Id,
    ExperienceId,
    Position,
    Content,
}
