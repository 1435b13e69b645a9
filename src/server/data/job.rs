use chrono::Utc;
use entity::{sea_orm_active_enums::JobStatus, skill_list::SkillList};
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, UpdateResult,
};
use uuid::Uuid;

use crate::{
    model::job::{CreateJobDto, JobQuery, UpdateJobDto},
    server::policy::{Caller, ReadScope},
};

pub struct JobRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> JobRepository<'a, C> {
    /// Creates a new instance of [`JobRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a job owned by `recruiter_id` with zeroed counters
    pub async fn create(
        &self,
        recruiter_id: Uuid,
        job: CreateJobDto,
    ) -> Result<entity::job::Model, DbErr> {
        let job = entity::job::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            recruiter_id: ActiveValue::Set(recruiter_id),
            title: ActiveValue::Set(job.title),
            description: ActiveValue::Set(job.description),
            company_name: ActiveValue::Set(job.company_name),
            location: ActiveValue::Set(job.location),
            job_type: ActiveValue::Set(job.job_type),
            salary_min: ActiveValue::Set(job.salary_min),
            salary_max: ActiveValue::Set(job.salary_max),
            required_skills: ActiveValue::Set(SkillList(job.required_skills)),
            experience_required: ActiveValue::Set(job.experience_required),
            status: ActiveValue::Set(job.status.unwrap_or(JobStatus::Open)),
            views_count: ActiveValue::Set(0),
            applications_count: ActiveValue::Set(0),
            ..Default::default()
        };

        job.insert(self.db).await
    }

    /// Gets a job regardless of status, for checks against the loaded row
    pub async fn get(&self, job_id: Uuid) -> Result<Option<entity::job::Model>, DbErr> {
        entity::prelude::Job::find_by_id(job_id).one(self.db).await
    }

    /// Gets a job only if it is within the caller's read scope
    pub async fn get_visible(
        &self,
        caller: &Caller,
        job_id: Uuid,
    ) -> Result<Option<entity::job::Model>, DbErr> {
        entity::prelude::Job::find_by_id(job_id)
            .filter(entity::job::Entity::read_scope(caller))
            .one(self.db)
            .await
    }

    /// Lists jobs within the caller's read scope matching the query, newest first
    pub async fn list_visible(
        &self,
        caller: &Caller,
        query: &JobQuery,
    ) -> Result<Vec<entity::job::Model>, DbErr> {
        let mut filter = Condition::all().add(entity::job::Entity::read_scope(caller));

        if let Some(search) = non_blank(&query.search) {
            let pattern = format!("%{}%", search.to_lowercase());

            filter = filter.add(
                Condition::any()
                    .add(lower(entity::job::Column::Title).like(pattern.clone()))
                    .add(lower(entity::job::Column::CompanyName).like(pattern.clone()))
                    .add(lower(entity::job::Column::Description).like(pattern)),
            );
        }

        if let Some(location) = non_blank(&query.location) {
            let pattern = format!("%{}%", location.to_lowercase());

            filter = filter.add(lower(entity::job::Column::Location).like(pattern));
        }

        if let Some(job_type) = non_blank(&query.job_type) {
            filter = filter.add(entity::job::Column::JobType.eq(job_type));
        }

        entity::prelude::Job::find()
            .filter(filter)
            .order_by_desc(entity::job::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Lists every job owned by the recruiter regardless of status, newest first
    pub async fn list_by_recruiter(
        &self,
        recruiter_id: Uuid,
    ) -> Result<Vec<entity::job::Model>, DbErr> {
        entity::prelude::Job::find()
            .filter(entity::job::Column::RecruiterId.eq(recruiter_id))
            .order_by_desc(entity::job::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Applies the provided fields, leaving omitted ones unchanged
    ///
    /// Returns `Ok(None)` when the job does not exist.
    pub async fn update(
        &self,
        job_id: Uuid,
        changes: UpdateJobDto,
    ) -> Result<Option<entity::job::Model>, DbErr> {
        let Some(job) = self.get(job_id).await? else {
            return Ok(None);
        };

        let mut job_am = job.into_active_model();

        if let Some(title) = changes.title {
            job_am.title = ActiveValue::Set(title);
        }
        if let Some(description) = changes.description {
            job_am.description = ActiveValue::Set(description);
        }
        if let Some(company_name) = changes.company_name {
            job_am.company_name = ActiveValue::Set(company_name);
        }
        if let Some(location) = changes.location {
            job_am.location = ActiveValue::Set(location);
        }
        if let Some(job_type) = changes.job_type {
            job_am.job_type = ActiveValue::Set(job_type);
        }
        if let Some(salary_min) = changes.salary_min {
            job_am.salary_min = ActiveValue::Set(Some(salary_min));
        }
        if let Some(salary_max) = changes.salary_max {
            job_am.salary_max = ActiveValue::Set(Some(salary_max));
        }
        if let Some(required_skills) = changes.required_skills {
            job_am.required_skills = ActiveValue::Set(SkillList(required_skills));
        }
        if let Some(experience_required) = changes.experience_required {
            job_am.experience_required = ActiveValue::Set(Some(experience_required));
        }
        if let Some(status) = changes.status {
            job_am.status = ActiveValue::Set(status);
        }

        let job = job_am.update(self.db).await?;

        Ok(Some(job))
    }

    /// Deletes a job, cascading to its applications and saved-job rows
    ///
    /// Returns OK regardless of the job existing, check [`DeleteResult::rows_affected`].
    pub async fn delete(&self, job_id: Uuid) -> Result<DeleteResult, DbErr> {
        entity::prelude::Job::delete_by_id(job_id).exec(self.db).await
    }

    /// Increments `views_count` in a single statement
    pub async fn increment_views(&self, job_id: Uuid) -> Result<UpdateResult, DbErr> {
        self.increment(job_id, entity::job::Column::ViewsCount).await
    }

    /// Increments `applications_count` in a single statement
    pub async fn increment_applications(&self, job_id: Uuid) -> Result<UpdateResult, DbErr> {
        self.increment(job_id, entity::job::Column::ApplicationsCount)
            .await
    }

    // Bulk updates skip ActiveModelBehavior, so updated_at is stamped here
    async fn increment(
        &self,
        job_id: Uuid,
        column: entity::job::Column,
    ) -> Result<UpdateResult, DbErr> {
        entity::prelude::Job::update_many()
            .col_expr(column, Expr::col(column).add(1))
            .col_expr(
                entity::job::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::job::Column::Id.eq(job_id))
            .exec(self.db)
            .await
    }
}

fn lower(column: entity::job::Column) -> Expr {
    Expr::expr(Func::lower(Expr::col(column)))
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
