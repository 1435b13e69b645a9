use sea_orm::{entity::prelude::*, ActiveValue};

use super::{sea_orm_active_enums::UserRole, skill_list::SkillList};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "profile")]
pub struct Model {
    /// Same value as the owning `auth_identity.id`.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    pub phone: Option<String>,
    pub location: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    pub company_name: Option<String>,
    pub resume_url: Option<String>,
    pub profile_image_url: Option<String>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub skills: Option<SkillList>,
    pub experience_years: Option<i32>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::auth_identity::Entity",
        from = "Column::Id",
        to = "super::auth_identity::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    AuthIdentity,
    #[sea_orm(has_many = "super::job::Entity")]
    Job,
    #[sea_orm(has_many = "super::application::Entity")]
    Application,
    #[sea_orm(has_many = "super::saved_job::Entity")]
    SavedJob,
}

impl Related<super::auth_identity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuthIdentity.def()
    }
}

impl Related<super::job::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Job.def()
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
