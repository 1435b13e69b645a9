use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};
use uuid::Uuid;

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn saved_job<'a>(&'a self) -> SavedJobFixtures<'a> {
        SavedJobFixtures { test: self }
    }
}

pub struct SavedJobFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> SavedJobFixtures<'a> {
    pub async fn insert_saved_job(
        &self,
        job_id: Uuid,
        user_id: Uuid,
    ) -> Result<entity::saved_job::Model, TestError> {
        Ok(
            entity::prelude::SavedJob::insert(entity::saved_job::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                job_id: ActiveValue::Set(job_id),
                user_id: ActiveValue::Set(user_id),
                saved_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
