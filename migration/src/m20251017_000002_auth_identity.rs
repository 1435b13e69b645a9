use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AuthIdentity::Table)
                    .if_not_exists()
                    .col(pk_uuid(AuthIdentity::Id))
                    .col(string_uniq(AuthIdentity::Email))
                    .col(string(AuthIdentity::PasswordHash))
                    .col(string_null(AuthIdentity::FullName))
                    .col(timestamp(AuthIdentity::CreatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AuthIdentity::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AuthIdentity {
    Table,
    Id,
    Email,
    PasswordHash,
    FullName,
    CreatedAt,
}
