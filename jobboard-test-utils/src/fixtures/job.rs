use chrono::Utc;
use entity::{sea_orm_active_enums::JobStatus, skill_list::SkillList};
use sea_orm::{ActiveValue, EntityTrait};
use uuid::Uuid;

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn job<'a>(&'a self) -> JobFixtures<'a> {
        JobFixtures { test: self }
    }
}

pub struct JobFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> JobFixtures<'a> {
    /// Insert a job with the provided id, recruiter and status.
    ///
    /// The recruiter profile must already exist.
    pub async fn insert_job_with_id(
        &self,
        job_id: Uuid,
        recruiter_id: Uuid,
        status: JobStatus,
    ) -> Result<entity::job::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::Job::insert(entity::job::ActiveModel {
            id: ActiveValue::Set(job_id),
            recruiter_id: ActiveValue::Set(recruiter_id),
            title: ActiveValue::Set("Backend Engineer".to_string()),
            description: ActiveValue::Set("Build and run the services.".to_string()),
            company_name: ActiveValue::Set("Acme".to_string()),
            location: ActiveValue::Set("Remote".to_string()),
            job_type: ActiveValue::Set("full_time".to_string()),
            salary_min: ActiveValue::Set(None),
            salary_max: ActiveValue::Set(None),
            required_skills: ActiveValue::Set(SkillList(vec!["rust".to_string()])),
            experience_required: ActiveValue::Set(None),
            status: ActiveValue::Set(status),
            views_count: ActiveValue::Set(0),
            applications_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .exec_with_returning(&self.test.db)
        .await?)
    }

    pub async fn insert_job(
        &self,
        recruiter_id: Uuid,
        status: JobStatus,
    ) -> Result<entity::job::Model, TestError> {
        self.insert_job_with_id(Uuid::new_v4(), recruiter_id, status)
            .await
    }

    pub async fn insert_open_job(
        &self,
        recruiter_id: Uuid,
    ) -> Result<entity::job::Model, TestError> {
        self.insert_job(recruiter_id, JobStatus::Open).await
    }
}
