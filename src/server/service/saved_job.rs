use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::saved_job::SavedJobDto,
    server::{
        data::{job::JobRepository, saved_job::SavedJobRepository},
        error::Error,
        policy::{authorize, Caller, EntityKind, JobSubject, Operation, RowPolicy, SavedJobSubject},
    },
};

/// Service for a user's bookmarked jobs.
pub struct SavedJobService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SavedJobService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the caller's saved jobs, newest first
    ///
    /// A saved job whose posting is no longer visible to the caller is listed without it.
    pub async fn list(&self, caller: &Caller) -> Result<Vec<SavedJobDto>, Error> {
        caller.require_identity(EntityKind::SavedJob, Operation::Read)?;

        let saved_jobs = SavedJobRepository::new(self.db).list(caller).await?;

        Ok(saved_jobs
            .into_iter()
            .map(|(saved_job, job)| SavedJobDto {
                id: saved_job.id,
                job_id: saved_job.job_id,
                saved_at: saved_job.saved_at,
                job: job
                    .filter(|job| {
                        entity::job::Entity::allows(caller, Operation::Read, &JobSubject::from(job))
                    })
                    .map(Into::into),
            })
            .collect())
    }

    /// Saves a job visible to the caller
    ///
    /// # Returns
    /// - `Ok(SavedJobDto)` - The saved job
    /// - `Err(Error::PolicyError)` - Anonymous caller
    /// - `Err(Error::NotFound)` - Job missing or hidden from the caller
    /// - `Err(Error::ConstraintError(ConstraintError::Duplicate))` - Job already saved
    pub async fn save(&self, caller: &Caller, job_id: Uuid) -> Result<SavedJobDto, Error> {
        let identity = caller.require_identity(EntityKind::SavedJob, Operation::Create)?;

        authorize::<entity::saved_job::Entity>(
            caller,
            Operation::Create,
            &SavedJobSubject {
                user_id: identity.id,
            },
        )?;

        let job = JobRepository::new(self.db)
            .get_visible(caller, job_id)
            .await?
            .ok_or_else(|| Error::NotFound("Job".to_string()))?;

        let saved_job = SavedJobRepository::new(self.db)
            .create(job.id, identity.id)
            .await?;

        Ok(SavedJobDto {
            id: saved_job.id,
            job_id: saved_job.job_id,
            saved_at: saved_job.saved_at,
            job: Some(job.into()),
        })
    }

    /// Removes a job from the caller's saved jobs
    ///
    /// # Returns
    /// - `Ok(())` - Saved job removed
    /// - `Err(Error::PolicyError)` - Anonymous caller
    /// - `Err(Error::NotFound)` - The caller had not saved the job
    pub async fn remove(&self, caller: &Caller, job_id: Uuid) -> Result<(), Error> {
        let identity = caller.require_identity(EntityKind::SavedJob, Operation::Delete)?;

        authorize::<entity::saved_job::Entity>(
            caller,
            Operation::Delete,
            &SavedJobSubject {
                user_id: identity.id,
            },
        )?;

        let result = SavedJobRepository::new(self.db)
            .delete(job_id, identity.id)
            .await?;

        if result.rows_affected == 0 {
            return Err(Error::NotFound("Saved job".to_string()));
        }

        Ok(())
    }
}
