use sea_orm::{entity::prelude::*, ActiveValue};

use super::{sea_orm_active_enums::JobStatus, skill_list::SkillList};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "job")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub recruiter_id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub company_name: String,
    pub location: String,
    /// Free text, e.g. "Full-time" or "Contract".
    pub job_type: String,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    #[sea_orm(column_type = "JsonBinary")]
    pub required_skills: SkillList,
    pub experience_required: Option<i32>,
    pub status: JobStatus,
    pub views_count: i32,
    pub applications_count: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::profile::Entity",
        from = "Column::RecruiterId",
        to = "super::profile::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Profile,
    #[sea_orm(has_many = "super::application::Entity")]
    Application,
    #[sea_orm(has_many = "super::saved_job::Entity")]
    SavedJob,
}

impl Related<super::profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profile.def()
    }
}

impl Related<super::application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Application.def()
    }
}

impl Related<super::saved_job::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SavedJob.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// Stamps `updated_at` on every update, overriding any caller supplied value.
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now = chrono::Utc::now().naive_utc();

        if insert {
            if self.created_at.is_not_set() {
                self.created_at = ActiveValue::Set(now);
            }
            if self.updated_at.is_not_set() {
                self.updated_at = ActiveValue::Set(now);
            }
        } else {
            self.updated_at = ActiveValue::Set(now);
        }

        Ok(self)
    }
}
