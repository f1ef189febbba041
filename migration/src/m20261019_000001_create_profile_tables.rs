use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // about (singleton row)
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(About::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(About::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(About::Name).string_len(150).not_null())
                    .col(ColumnDef::new(About::Title).string_len(150).not_null())
                    .col(ColumnDef::new(About::Bio).text().not_null())
                    .col(ColumnDef::new(About::Location).string_len(150))
                    .col(ColumnDef::new(About::AvatarUrl).text())
                    .col(ColumnDef::new(About::ResumeUrl).text())
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // contacts (singleton row)
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Contacts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Contacts::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(Contacts::Email)
                            .string_len(254)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Contacts::Phone).string_len(50))
                    .col(ColumnDef::new(Contacts::Location).string_len(150))
                    .col(ColumnDef::new(Contacts::GithubUrl).text())
                    .col(ColumnDef::new(Contacts::LinkedinUrl).text())
                    .col(ColumnDef::new(Contacts::WebsiteUrl).text())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Contacts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(About::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum About {
    Table,
    Id,
    Name,
    Title,
    Bio,
    Location,
    AvatarUrl,
    ResumeUrl,
}

#[derive(DeriveIden)]
enum Contacts {
    Table,
    Id,
    Email,
    Phone,
    Location,
    GithubUrl,
    LinkedinUrl,
    WebsiteUrl,
}
