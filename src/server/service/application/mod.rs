//! Job applications: applying, listing and status changes by the job owner.

#[cfg(test)]
mod tests;

use entity::sea_orm_active_enums::ApplicationStatus;
use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::{
    model::{
        application::{ApplicantDto, ApplicationDto, ApplicationWithJobDto, ApplyDto},
        job::JobDto,
        profile::ProfileDto,
    },
    server::{
        data::{
            application::ApplicationRepository, job::JobRepository, profile::ProfileRepository,
        },
        error::{constraint::ConstraintError, Error},
        policy::{
            authorize, ApplicationSubject, Caller, EntityKind, JobSubject, Operation, RowPolicy,
        },
    },
};

/// Service for job applications.
pub struct ApplicationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Applies the caller to a job visible to them
    ///
    /// The application insert and the job's application counter update share a transaction.
    /// Without a resume URL the one on the applicant's profile is used.
    ///
    /// # Returns
    /// - `Ok(ApplicationDto)` - Application created in the `applied` status
    /// - `Err(Error::PolicyError)` - Caller anonymous or not a job seeker
    /// - `Err(Error::NotFound)` - Job missing or hidden from the caller
    /// - `Err(Error::ConstraintError(ConstraintError::AlreadyApplied))` - Caller already applied
    pub async fn apply(
        &self,
        caller: &Caller,
        job_id: Uuid,
        apply: ApplyDto,
    ) -> Result<ApplicationDto, Error> {
        let identity = caller.require_identity(EntityKind::Application, Operation::Create)?;

        let job = JobRepository::new(self.db)
            .get_visible(caller, job_id)
            .await?
            .ok_or_else(|| Error::NotFound("Job".to_string()))?;

        authorize::<entity::application::Entity>(
            caller,
            Operation::Create,
            &ApplicationSubject {
                applicant_id: identity.id,
                job_recruiter_id: job.recruiter_id,
            },
        )?;

        let resume_url = match apply.resume_url.filter(|url| !url.trim().is_empty()) {
            Some(url) => Some(url),
            None => ProfileRepository::new(self.db)
                .get(identity.id)
                .await?
                .and_then(|profile| profile.resume_url),
        };

        let txn = self.db.begin().await?;

        let application = ApplicationRepository::new(&txn)
            .create(job.id, identity.id, apply.cover_letter, resume_url)
            .await
            .map_err(|e| match Error::from(e) {
                Error::ConstraintError(ConstraintError::Duplicate(_)) => {
                    Error::from(ConstraintError::AlreadyApplied { job_id: job.id })
                }
                e => e,
            })?;

        JobRepository::new(&txn)
            .increment_applications(job.id)
            .await?;

        txn.commit().await?;

        tracing::info!(
            application_id = %application.id,
            job_id = %job.id,
            applicant_id = %identity.id,
            "Application submitted"
        );

        Ok(application.into())
    }

    /// Lists the caller's own applications with their jobs, newest first
    ///
    /// An application whose job is no longer visible to the caller is listed without it.
    pub async fn list_mine(&self, caller: &Caller) -> Result<Vec<ApplicationWithJobDto>, Error> {
        let identity = caller.require_identity(EntityKind::Application, Operation::Read)?;

        let applications = ApplicationRepository::new(self.db)
            .list_by_applicant(identity.id)
            .await?;

        Ok(applications
            .into_iter()
            .map(|(application, job)| ApplicationWithJobDto {
                application: application.into(),
                job: job
                    .filter(|job| {
                        entity::job::Entity::allows(caller, Operation::Read, &JobSubject::from(job))
                    })
                    .map(JobDto::from),
            })
            .collect())
    }

    /// Lists applications to a job with applicant profiles
    ///
    /// Only rows within the caller's read scope are returned, so a caller who is neither
    /// the job owner nor an applicant receives an empty list.
    ///
    /// # Returns
    /// - `Ok(Vec<ApplicantDto>)` - Applications the caller may read
    /// - `Err(Error::PolicyError)` - Anonymous caller
    /// - `Err(Error::NotFound)` - Job missing or hidden from the caller
    pub async fn list_for_job(
        &self,
        caller: &Caller,
        job_id: Uuid,
    ) -> Result<Vec<ApplicantDto>, Error> {
        caller.require_identity(EntityKind::Application, Operation::Read)?;

        JobRepository::new(self.db)
            .get_visible(caller, job_id)
            .await?
            .ok_or_else(|| Error::NotFound("Job".to_string()))?;

        let applications = ApplicationRepository::new(self.db)
            .list_for_job(caller, job_id)
            .await?;

        Ok(applications
            .into_iter()
            .map(|(application, applicant)| ApplicantDto {
                application: application.into(),
                applicant: applicant.map(ProfileDto::from),
            })
            .collect())
    }

    /// Moves an application to a new status, only the job's recruiter may do so
    ///
    /// # Returns
    /// - `Ok(ApplicationDto)` - Updated application
    /// - `Err(Error::NotFound)` - Application does not exist
    /// - `Err(Error::PolicyError)` - Caller does not own the job
    pub async fn update_status(
        &self,
        caller: &Caller,
        application_id: Uuid,
        status: ApplicationStatus,
    ) -> Result<ApplicationDto, Error> {
        let application_repo = ApplicationRepository::new(self.db);

        let (application, job) = application_repo
            .get_with_job(application_id)
            .await?
            .ok_or_else(|| Error::NotFound("Application".to_string()))?;

        let Some(job) = job else {
            return Err(Error::InternalError(format!(
                "Application {} references missing job {}",
                application.id, application.job_id
            )));
        };

        authorize::<entity::application::Entity>(
            caller,
            Operation::Update,
            &ApplicationSubject {
                applicant_id: application.applicant_id,
                job_recruiter_id: job.recruiter_id,
            },
        )?;

        let application = application_repo
            .update_status(application_id, status)
            .await?
            .ok_or_else(|| Error::NotFound("Application".to_string()))?;

        tracing::info!(
            application_id = %application.id,
            status = ?application.status,
            "Application status updated"
        );

        Ok(application.into())
    }
}

