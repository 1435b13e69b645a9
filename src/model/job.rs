use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::JobStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct JobDto {
    pub id: Uuid,
    pub recruiter_id: Uuid,
    pub title: String,
    pub description: String,
    pub company_name: String,
    pub location: String,
    pub job_type: String,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub required_skills: Vec<String>,
    pub experience_required: Option<i32>,
    pub status: JobStatus,
    pub views_count: i32,
    pub applications_count: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::job::Model> for JobDto {
    fn from(job: entity::job::Model) -> Self {
        Self {
            id: job.id,
            recruiter_id: job.recruiter_id,
            title: job.title,
            description: job.description,
            company_name: job.company_name,
            location: job.location,
            job_type: job.job_type,
            salary_min: job.salary_min,
            salary_max: job.salary_max,
            required_skills: job.required_skills.0,
            experience_required: job.experience_required,
            status: job.status,
            views_count: job.views_count,
            applications_count: job.applications_count,
            created_at: job.created_at,
            updated_at: job.updated_at,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateJobDto {
    pub title: String,
    pub description: String,
    pub company_name: String,
    pub location: String,
    pub job_type: String,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub required_skills: Vec<String>,
    pub experience_required: Option<i32>,
    /// Defaults to open
    pub status: Option<JobStatus>,
}

/// Partial update of a job, omitted fields are left unchanged
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateJobDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub company_name: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub required_skills: Option<Vec<String>>,
    pub experience_required: Option<i32>,
    pub status: Option<JobStatus>,
}

/// Filters for the job listing
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct JobQuery {
    /// Case-insensitive match against title, company name or description
    pub search: Option<String>,
    /// Substring match against location
    pub location: Option<String>,
    /// Exact job type
    pub job_type: Option<String>,
}
