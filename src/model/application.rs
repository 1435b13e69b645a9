use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::ApplicationStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{job::JobDto, profile::ProfileDto};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ApplicationDto {
    pub id: Uuid,
    pub job_id: Uuid,
    pub applicant_id: Uuid,
    pub status: ApplicationStatus,
    pub cover_letter: Option<String>,
    pub resume_url: Option<String>,
    pub applied_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::application::Model> for ApplicationDto {
    fn from(application: entity::application::Model) -> Self {
        Self {
            id: application.id,
            job_id: application.job_id,
            applicant_id: application.applicant_id,
            status: application.status,
            cover_letter: application.cover_letter,
            resume_url: application.resume_url,
            applied_at: application.applied_at,
            updated_at: application.updated_at,
        }
    }
}

/// An application together with the job it was made to
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ApplicationWithJobDto {
    pub application: ApplicationDto,
    pub job: Option<JobDto>,
}

/// An application together with the applicant's profile, as seen by the job owner
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ApplicantDto {
    pub application: ApplicationDto,
    pub applicant: Option<ProfileDto>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ApplyDto {
    pub cover_letter: Option<String>,
    /// Defaults to the resume on the applicant's profile
    pub resume_url: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateApplicationStatusDto {
    pub status: ApplicationStatus,
}
