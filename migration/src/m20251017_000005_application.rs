use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251017_000001_job_board_enums::ApplicationStatus, m20251017_000003_profile::Profile,
    m20251017_000004_job::Job,
};

static IDX_APPLICATION_JOB_ID_APPLICANT_ID: &str = "idx-application-job_id-applicant_id";
static IDX_APPLICATION_APPLICANT_ID: &str = "idx-application-applicant_id";
static FK_APPLICATION_JOB_ID: &str = "fk-application-job_id";
static FK_APPLICATION_APPLICANT_ID: &str = "fk-application-applicant_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Application::Table)
                    .if_not_exists()
                    .col(pk_uuid(Application::Id))
                    .col(uuid(Application::JobId))
                    .col(uuid(Application::ApplicantId))
                    .col(
                        enumeration(
                            Application::Status,
                            ApplicationStatus::Enum,
                            [
                                ApplicationStatus::Applied,
                                ApplicationStatus::Viewed,
                                ApplicationStatus::Shortlisted,
                                ApplicationStatus::Rejected,
                                ApplicationStatus::Hired,
                            ],
                        )
                        .default("applied"),
                    )
                    .col(text_null(Application::CoverLetter))
                    .col(string_null(Application::ResumeUrl))
                    .col(timestamp(Application::AppliedAt).default(Expr::current_timestamp()))
                    .col(timestamp(Application::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        // One application per applicant per job; concurrent double submissions
        // are resolved by this index.
        manager
            .create_index(
                Index::create()
                    .name(IDX_APPLICATION_JOB_ID_APPLICANT_ID)
                    .table(Application::Table)
                    .col(Application::JobId)
                    .col(Application::ApplicantId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_APPLICATION_APPLICANT_ID)
                    .table(Application::Table)
                    .col(Application::ApplicantId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APPLICATION_JOB_ID)
                    .from_tbl(Application::Table)
                    .from_col(Application::JobId)
                    .to_tbl(Job::Table)
                    .to_col(Job::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APPLICATION_APPLICANT_ID)
                    .from_tbl(Application::Table)
                    .from_col(Application::ApplicantId)
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
                    .name(FK_APPLICATION_APPLICANT_ID)
                    .table(Application::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_APPLICATION_JOB_ID)
                    .table(Application::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_APPLICATION_APPLICANT_ID)
                    .table(Application::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_APPLICATION_JOB_ID_APPLICANT_ID)
                    .table(Application::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Application::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Application {
    Table,
    Id,
    JobId,
    ApplicantId,
    Status,
    CoverLetter,
    ResumeUrl,
    AppliedAt,
    UpdatedAt,
}
