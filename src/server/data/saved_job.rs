use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::policy::{Caller, ReadScope};

pub struct SavedJobRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SavedJobRepository<'a, C> {
    /// Creates a new instance of [`SavedJobRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Saves a job for the user, failing on the unique index if already saved
    pub async fn create(
        &self,
        job_id: Uuid,
        user_id: Uuid,
    ) -> Result<entity::saved_job::Model, DbErr> {
        let saved_job = entity::saved_job::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            job_id: ActiveValue::Set(job_id),
            user_id: ActiveValue::Set(user_id),
            ..Default::default()
        };

        saved_job.insert(self.db).await
    }

    /// Lists saved jobs within the caller's read scope along with the jobs, newest first
    pub async fn list(
        &self,
        caller: &Caller,
    ) -> Result<Vec<(entity::saved_job::Model, Option<entity::job::Model>)>, DbErr> {
        entity::prelude::SavedJob::find()
            .filter(entity::saved_job::Entity::read_scope(caller))
            .find_also_related(entity::job::Entity)
            .order_by_desc(entity::saved_job::Column::SavedAt)
            .all(self.db)
            .await
    }

    /// Removes the user's saved job
    ///
    /// Returns OK regardless of the row existing, check [`DeleteResult::rows_affected`].
    pub async fn delete(&self, job_id: Uuid, user_id: Uuid) -> Result<DeleteResult, DbErr> {
        entity::prelude::SavedJob::delete_many()
            .filter(entity::saved_job::Column::JobId.eq(job_id))
            .filter(entity::saved_job::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }
}
