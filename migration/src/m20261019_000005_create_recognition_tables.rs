use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Certifications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Certifications::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Certifications::Position)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Certifications::Name)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Certifications::Issuer)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Certifications::IssueDate)
                            .string_len(10)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Certifications::CredentialUrl).text())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Achievements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Achievements::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Achievements::Position)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Achievements::Title)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Achievements::Description).text().not_null())
                    .col(ColumnDef::new(Achievements::Date).string_len(10))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Achievements::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Certifications::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Certifications {
    Table,
    Id,
    Position,
    Name,
    Issuer,
    IssueDate,
    CredentialUrl,
}

#[derive(DeriveIden)]
enum Achievements {
    Table,
    Id,
    Position,
    Title,
    Description,
    Date,
}
