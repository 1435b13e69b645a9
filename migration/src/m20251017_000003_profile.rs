use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251017_000001_job_board_enums::UserRole,
    m20251017_000002_auth_identity::AuthIdentity,
};

static FK_PROFILE_ID: &str = "fk-profile-id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Profile::Table)
                    .if_not_exists()
                    .col(pk_uuid(Profile::Id))
                    .col(string(Profile::Email))
                    .col(string(Profile::FullName))
                    .col(
                        enumeration(
                            Profile::Role,
                            UserRole::Enum,
                            [UserRole::JobSeeker, UserRole::Recruiter, UserRole::Admin],
                        )
                        .default("job_seeker"),
                    )
                    .col(string_null(Profile::Phone))
                    .col(string_null(Profile::Location))
                    .col(text_null(Profile::Bio))
                    .col(string_null(Profile::CompanyName))
                    .col(string_null(Profile::ResumeUrl))
                    .col(string_null(Profile::ProfileImageUrl))
                    .col(json_binary_null(Profile::Skills))
                    .col(integer_null(Profile::ExperienceYears))
                    .col(timestamp(Profile::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(Profile::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PROFILE_ID)
                    .from_tbl(Profile::Table)
                    .from_col(Profile::Id)
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
                    .name(FK_PROFILE_ID)
                    .table(Profile::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Profile::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Profile {
    Table,
    Id,
    Email,
    FullName,
    Role,
    Phone,
    Location,
    Bio,
    CompanyName,
    ResumeUrl,
    ProfileImageUrl,
    Skills,
    ExperienceYears,
    CreatedAt,
    UpdatedAt,
}
