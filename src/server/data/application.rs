use entity::sea_orm_active_enums::ApplicationStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::server::policy::{Caller, ReadScope};

pub struct ApplicationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ApplicationRepository<'a, C> {
    /// Creates a new instance of [`ApplicationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an application in the `applied` status
    ///
    /// A single insert, a second application for the same job and applicant fails on the
    /// unique index rather than being checked beforehand.
    pub async fn create(
        &self,
        job_id: Uuid,
        applicant_id: Uuid,
        cover_letter: Option<String>,
        resume_url: Option<String>,
    ) -> Result<entity::application::Model, DbErr> {
        let application = entity::application::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            job_id: ActiveValue::Set(job_id),
            applicant_id: ActiveValue::Set(applicant_id),
            status: ActiveValue::Set(ApplicationStatus::Applied),
            cover_letter: ActiveValue::Set(cover_letter),
            resume_url: ActiveValue::Set(resume_url),
            ..Default::default()
        };

        application.insert(self.db).await
    }

    /// Gets an application along with the job it was made to
    pub async fn get_with_job(
        &self,
        application_id: Uuid,
    ) -> Result<Option<(entity::application::Model, Option<entity::job::Model>)>, DbErr> {
        entity::prelude::Application::find_by_id(application_id)
            .find_also_related(entity::job::Entity)
            .one(self.db)
            .await
    }

    /// Lists the applicant's applications with their jobs, newest first
    pub async fn list_by_applicant(
        &self,
        applicant_id: Uuid,
    ) -> Result<Vec<(entity::application::Model, Option<entity::job::Model>)>, DbErr> {
        entity::prelude::Application::find()
            .filter(entity::application::Column::ApplicantId.eq(applicant_id))
            .find_also_related(entity::job::Entity)
            .order_by_desc(entity::application::Column::AppliedAt)
            .all(self.db)
            .await
    }

    /// Lists applications to a job within the caller's read scope, with applicant profiles
    pub async fn list_for_job(
        &self,
        caller: &Caller,
        job_id: Uuid,
    ) -> Result<Vec<(entity::application::Model, Option<entity::profile::Model>)>, DbErr> {
        entity::prelude::Application::find()
            .filter(entity::application::Column::JobId.eq(job_id))
            .filter(entity::application::Entity::read_scope(caller))
            .find_also_related(entity::profile::Entity)
            .order_by_desc(entity::application::Column::AppliedAt)
            .all(self.db)
            .await
    }

    /// Whether the applicant has applied to any job owned by the recruiter
    pub async fn has_applied_to_recruiter(
        &self,
        applicant_id: Uuid,
        recruiter_id: Uuid,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Application::find()
            .inner_join(entity::job::Entity)
            .filter(entity::application::Column::ApplicantId.eq(applicant_id))
            .filter(entity::job::Column::RecruiterId.eq(recruiter_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Sets the status, returning `Ok(None)` when the application does not exist
    pub async fn update_status(
        &self,
        application_id: Uuid,
        status: ApplicationStatus,
    ) -> Result<Option<entity::application::Model>, DbErr> {
        let Some(application) = entity::prelude::Application::find_by_id(application_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut application_am = application.into_active_model();
        application_am.status = ActiveValue::Set(status);

        let application = application_am.update(self.db).await?;

        Ok(Some(application))
    }
}
