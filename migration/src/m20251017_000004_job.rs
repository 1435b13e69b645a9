use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251017_000001_job_board_enums::JobStatus, m20251017_000003_profile::Profile};

static IDX_JOB_RECRUITER_ID: &str = "idx-job-recruiter_id";
static IDX_JOB_STATUS: &str = "idx-job-status";
static FK_JOB_RECRUITER_ID: &str = "fk-job-recruiter_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Job::Table)
                    .if_not_exists()
                    .col(pk_uuid(Job::Id))
                    .col(uuid(Job::RecruiterId))
                    .col(string(Job::Title))
                    .col(text(Job::Description))
                    .col(string(Job::CompanyName))
                    .col(string(Job::Location))
                    .col(string(Job::JobType))
                    .col(integer_null(Job::SalaryMin))
                    .col(integer_null(Job::SalaryMax))
                    .col(json_binary(Job::RequiredSkills))
                    .col(integer_null(Job::ExperienceRequired))
                    .col(
                        enumeration(
                            Job::Status,
                            JobStatus::Enum,
                            [JobStatus::Open, JobStatus::Closed, JobStatus::Paused],
                        )
                        .default("open"),
                    )
                    .col(integer(Job::ViewsCount).default(0))
                    .col(integer(Job::ApplicationsCount).default(0))
                    .col(timestamp(Job::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(Job::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_JOB_RECRUITER_ID)
                    .table(Job::Table)
                    .col(Job::RecruiterId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_JOB_STATUS)
                    .table(Job::Table)
                    .col(Job::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_JOB_RECRUITER_ID)
                    .from_tbl(Job::Table)
                    .from_col(Job::RecruiterId)
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
                    .name(FK_JOB_RECRUITER_ID)
                    .table(Job::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(Index::drop().name(IDX_JOB_STATUS).table(Job::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_JOB_RECRUITER_ID)
                    .table(Job::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Job::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Job {
    Table,
    Id,
    RecruiterId,
    Title,
    Description,
    CompanyName,
    Location,
    JobType,
    SalaryMin,
    SalaryMax,
    RequiredSkills,
    ExperienceRequired,
    Status,
    ViewsCount,
    ApplicationsCount,
    CreatedAt,
    UpdatedAt,
}
