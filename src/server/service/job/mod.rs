//! Job postings: listing, reading and recruiter-side management.

#[cfg(test)]
mod tests;

use entity::sea_orm_active_enums::JobStatus;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::job::{CreateJobDto, JobDto, JobQuery, UpdateJobDto},
    server::{
        data::job::JobRepository,
        error::Error,
        policy::{authorize, Caller, EntityKind, JobSubject, Operation},
        service::{retry::RetryContext, validate},
    },
};

/// Service for job postings.
pub struct JobService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JobService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists jobs visible to the caller matching the query, newest first
    pub async fn list_jobs(&self, caller: &Caller, query: JobQuery) -> Result<Vec<JobDto>, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();
        let caller = *caller;

        ctx.execute_with_retry("list jobs", |_| {
            let db = db.clone();
            let query = query.clone();

            Box::pin(async move {
                let jobs = JobRepository::new(&db)
                    .list_visible(&caller, &query)
                    .await?;

                Ok(jobs.into_iter().map(JobDto::from).collect())
            })
        })
        .await
    }

    /// Lists every job posted by the caller regardless of status
    pub async fn list_own_jobs(&self, caller: &Caller) -> Result<Vec<JobDto>, Error> {
        let identity = caller.require_identity(EntityKind::Job, Operation::Read)?;

        let jobs = JobRepository::new(self.db)
            .list_by_recruiter(identity.id)
            .await?;

        Ok(jobs.into_iter().map(JobDto::from).collect())
    }

    /// Reads a job visible to the caller
    ///
    /// A read by anyone other than the job's recruiter counts as a view.
    ///
    /// # Returns
    /// - `Ok(JobDto)` - Job found and visible
    /// - `Err(Error::NotFound)` - Job missing or hidden from the caller
    pub async fn get_job(&self, caller: &Caller, job_id: Uuid) -> Result<JobDto, Error> {
        let job_repo = JobRepository::new(self.db);

        let mut job = job_repo
            .get_visible(caller, job_id)
            .await?
            .ok_or_else(|| Error::NotFound("Job".to_string()))?;

        if !caller.is(job.recruiter_id) {
            job_repo.increment_views(job.id).await?;
            job.views_count += 1;
        }

        Ok(job.into())
    }

    /// Posts a job owned by the caller
    ///
    /// # Returns
    /// - `Ok(JobDto)` - The created job
    /// - `Err(Error::PolicyError)` - Caller is anonymous or not a recruiter
    /// - `Err(Error::ConstraintError)` - Blank required field, no skills or invalid salary range
    pub async fn create_job(&self, caller: &Caller, job: CreateJobDto) -> Result<JobDto, Error> {
        let identity = caller.require_identity(EntityKind::Job, Operation::Create)?;

        authorize::<entity::job::Entity>(
            caller,
            Operation::Create,
            &JobSubject {
                recruiter_id: identity.id,
                status: job.status.unwrap_or(JobStatus::Open),
            },
        )?;

        let job = CreateJobDto {
            title: validate::non_blank("title", &job.title)?,
            description: validate::non_blank("description", &job.description)?,
            company_name: validate::non_blank("company_name", &job.company_name)?,
            location: validate::non_blank("location", &job.location)?,
            job_type: validate::non_blank("job_type", &job.job_type)?,
            required_skills: validate::skills("required_skills", job.required_skills)?,
            ..job
        };
        validate::salary_range(job.salary_min, job.salary_max)?;
        validate::non_negative("experience_required", job.experience_required)?;

        let job = JobRepository::new(self.db).create(identity.id, job).await?;

        tracing::info!(job_id = %job.id, recruiter_id = %job.recruiter_id, "Job created");

        Ok(job.into())
    }

    /// Applies a partial update to a job owned by the caller
    ///
    /// # Returns
    /// - `Ok(JobDto)` - The updated job
    /// - `Err(Error::NotFound)` - Job does not exist
    /// - `Err(Error::PolicyError)` - Caller does not own the job
    /// - `Err(Error::ConstraintError)` - Invalid field values
    pub async fn update_job(
        &self,
        caller: &Caller,
        job_id: Uuid,
        mut changes: UpdateJobDto,
    ) -> Result<JobDto, Error> {
        let job_repo = JobRepository::new(self.db);

        let job = job_repo
            .get(job_id)
            .await?
            .ok_or_else(|| Error::NotFound("Job".to_string()))?;

        authorize::<entity::job::Entity>(caller, Operation::Update, &JobSubject::from(&job))?;

        changes.title = validate_optional("title", changes.title)?;
        changes.description = validate_optional("description", changes.description)?;
        changes.company_name = validate_optional("company_name", changes.company_name)?;
        changes.location = validate_optional("location", changes.location)?;
        changes.job_type = validate_optional("job_type", changes.job_type)?;
        if let Some(skills) = changes.required_skills.take() {
            changes.required_skills = Some(validate::skills("required_skills", skills)?);
        }
        validate::non_negative("experience_required", changes.experience_required)?;
        validate::salary_range(
            changes.salary_min.or(job.salary_min),
            changes.salary_max.or(job.salary_max),
        )?;

        let job = job_repo
            .update(job_id, changes)
            .await?
            .ok_or_else(|| Error::NotFound("Job".to_string()))?;

        Ok(job.into())
    }

    /// Deletes a job owned by the caller, cascading to its applications and saves
    pub async fn delete_job(&self, caller: &Caller, job_id: Uuid) -> Result<(), Error> {
        let job_repo = JobRepository::new(self.db);

        let job = job_repo
            .get(job_id)
            .await?
            .ok_or_else(|| Error::NotFound("Job".to_string()))?;

        authorize::<entity::job::Entity>(caller, Operation::Delete, &JobSubject::from(&job))?;

        job_repo.delete(job_id).await?;

        tracing::info!(job_id = %job_id, "Job deleted");

        Ok(())
    }
}

fn validate_optional(field: &'static str, value: Option<String>) -> Result<Option<String>, Error> {
    match value {
        Some(value) => Ok(Some(validate::non_blank(field, &value)?)),
        None => Ok(None),
    }
}
