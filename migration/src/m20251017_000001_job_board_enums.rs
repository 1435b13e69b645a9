use sea_orm_migration::prelude::{extension::postgres::Type, *};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_type(
                Type::create()
                    .as_enum(UserRole::Enum)
                    .values([UserRole::JobSeeker, UserRole::Recruiter, UserRole::Admin])
                    .to_owned(),
            )
            .await?;

        manager
            .create_type(
                Type::create()
                    .as_enum(JobStatus::Enum)
                    .values([JobStatus::Open, JobStatus::Closed, JobStatus::Paused])
                    .to_owned(),
            )
            .await?;

        manager
            .create_type(
                Type::create()
                    .as_enum(ApplicationStatus::Enum)
                    .values([
                        ApplicationStatus::Applied,
                        ApplicationStatus::Viewed,
                        ApplicationStatus::Shortlisted,
                        ApplicationStatus::Rejected,
                        ApplicationStatus::Hired,
                    ])
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_type(Type::drop().name(ApplicationStatus::Enum).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(JobStatus::Enum).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(UserRole::Enum).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum UserRole {
    #[sea_orm(iden = "user_role")]
    Enum,
    JobSeeker,
    Recruiter,
    Admin,
}

#[derive(DeriveIden)]
pub enum JobStatus {
    #[sea_orm(iden = "job_status")]
    Enum,
    Open,
    Closed,
    Paused,
}

#[derive(DeriveIden)]
pub enum ApplicationStatus {
    #[sea_orm(iden = "application_status")]
    Enum,
    Applied,
    Viewed,
    Shortlisted,
    Rejected,
    Hired,
}
