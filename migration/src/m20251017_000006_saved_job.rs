use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251017_000003_profile::Profile, m20251017_000004_job::Job};

static IDX_SAVED_JOB_JOB_ID_USER_ID: &str = "idx-saved_job-job_id-user_id";
static IDX_SAVED_JOB_USER_ID: &str = "idx-saved_job-user_id";
static FK_SAVED_JOB_JOB_ID: &str = "fk-saved_job-job_id";
static FK_SAVED_JOB_USER_ID: &str = "fk-saved_job-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SavedJob::Table)
                    .if_not_exists()
                    .col(pk_uuid(SavedJob::Id))
                    .col(uuid(SavedJob::JobId))
                    .col(uuid(SavedJob::UserId))
                    .col(timestamp(SavedJob::SavedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SAVED_JOB_JOB_ID_USER_ID)
                    .table(SavedJob::Table)
                    .col(SavedJob::JobId)
                    .col(SavedJob::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SAVED_JOB_USER_ID)
                    .table(SavedJob::Table)
                    .col(SavedJob::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SAVED_JOB_JOB_ID)
                    .from_tbl(SavedJob::Table)
                    .from_col(SavedJob::JobId)
                    .to_tbl(Job::Table)
                    .to_col(Job::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SAVED_JOB_USER_ID)
                    .from_tbl(SavedJob::Table)
                    .from_col(SavedJob::UserId)
                    .to_tbl(Profile::Table)
                    .to_col(Profile::Id)
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
                    .name(FK_SAVED_JOB_USER_ID)
                    .table(SavedJob::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SAVED_JOB_JOB_ID)
                    .table(SavedJob::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SAVED_JOB_USER_ID)
                    .table(SavedJob::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SAVED_JOB_JOB_ID_USER_ID)
                    .table(SavedJob::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SavedJob::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum SavedJob {
    Table,
    Id,
    JobId,
    UserId,
    SavedAt,
}
