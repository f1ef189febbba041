use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // custom_categories
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(CustomCategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CustomCategories::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CustomCategories::Position)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(CustomCategories::Name)
                            .string_len(100)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // technical_skills
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(TechnicalSkills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TechnicalSkills::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TechnicalSkills::Position)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(TechnicalSkills::Name)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TechnicalSkills::Level)
                            .integer()
                            .not_null()
                            .default(50),
                    )
                    .col(
                        ColumnDef::new(TechnicalSkills::Category)
                            .string_len(20)
                            .not_null()
                            .default("other"),
                    )
                    .col(ColumnDef::new(TechnicalSkills::CustomCategoryId).uuid())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_technical_skills_custom_category_id")
                            .from(TechnicalSkills::Table, TechnicalSkills::CustomCategoryId)
                            .to(CustomCategories::Table, CustomCategories::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // soft_skills
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(SoftSkills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SoftSkills::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SoftSkills::Position)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(SoftSkills::Name).string_len(100).not_null())
                    .col(
                        ColumnDef::new(SoftSkills::Level)
                            .integer()
                            .not_null()
                            .default(50),
                    )
                    .to_owned(),
            )
            .await?;

        // Levels are a percentage
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE technical_skills
                ADD CONSTRAINT chk_technical_skills_level CHECK (level BETWEEN 0 AND 100);
                ALTER TABLE soft_skills
                ADD CONSTRAINT chk_soft_skills_level CHECK (level BETWEEN 0 AND 100);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SoftSkills::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TechnicalSkills::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CustomCategories::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CustomCategories {
    Table,
    Id,
    Position,
    Name,
}

#[derive(DeriveIden)]
enum TechnicalSkills {
    Table,
    Id,
    Position,
    Name,
    Level,
    Category,
    CustomCategoryId,
}

#[derive(DeriveIden)]
enum SoftSkills {
    Table,
    Id,
    Position,
    Name,
    Level,
}
