use chrono::Utc;
use entity::sea_orm_active_enums::ApplicationStatus;
use sea_orm::{ActiveValue, EntityTrait};
use uuid::Uuid;

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn application<'a>(&'a self) -> ApplicationFixtures<'a> {
        ApplicationFixtures { test: self }
    }
}

pub struct ApplicationFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> ApplicationFixtures<'a> {
    /// Insert an application in the `applied` status.
    ///
    /// Does not touch the job's `applications_count`.
    pub async fn insert_application(
        &self,
        job_id: Uuid,
        applicant_id: Uuid,
    ) -> Result<entity::application::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Application::insert(entity::application::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                job_id: ActiveValue::Set(job_id),
                applicant_id: ActiveValue::Set(applicant_id),
                status: ActiveValue::Set(ApplicationStatus::Applied),
                cover_letter: ActiveValue::Set(None),
                resume_url: ActiveValue::Set(None),
                applied_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
