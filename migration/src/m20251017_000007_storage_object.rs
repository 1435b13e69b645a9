use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251017_000002_auth_identity::AuthIdentity;

static IDX_STORAGE_OBJECT_BUCKET_NAME: &str = "idx-storage_object-bucket-name";
static FK_STORAGE_OBJECT_OWNER_ID: &str = "fk-storage_object-owner_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StorageObject::Table)
                    .if_not_exists()
                    .col(pk_uuid(StorageObject::Id))
                    .col(string(StorageObject::Bucket))
                    .col(string(StorageObject::Name))
                    .col(uuid(StorageObject::OwnerId))
                    .col(string(StorageObject::ContentType))
                    .col(big_integer(StorageObject::Size))
                    .col(timestamp(StorageObject::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(StorageObject::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_STORAGE_OBJECT_BUCKET_NAME)
                    .table(StorageObject::Table)
                    .col(StorageObject::Bucket)
                    .col(StorageObject::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STORAGE_OBJECT_OWNER_ID)
                    .from_tbl(StorageObject::Table)
                    .from_col(StorageObject::OwnerId)
                    .to_tbl(AuthIdentity::Table)
                    .to_col(AuthIdentity::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_STORAGE_OBJECT_OWNER_ID)
                    .table(StorageObject::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_STORAGE_OBJECT_BUCKET_NAME)
                    .table(StorageObject::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(StorageObject::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum StorageObject {
    Table,
    Id,
    Bucket,
    Name,
    OwnerId,
    ContentType,
    Size,
    CreatedAt,
    UpdatedAt,
}
