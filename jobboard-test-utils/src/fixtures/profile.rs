use chrono::Utc;
use entity::sea_orm_active_enums::UserRole;
use sea_orm::{ActiveValue, EntityTrait};
use uuid::Uuid;

use crate::{constant::TEST_PASSWORD_HASH, error::TestError, TestContext};

impl TestContext {
    pub fn profile<'a>(&'a self) -> ProfileFixtures<'a> {
        ProfileFixtures { test: self }
    }
}

pub struct ProfileFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> ProfileFixtures<'a> {
    /// Insert a bare auth identity without a profile.
    pub async fn insert_identity(
        &self,
        identity_id: Uuid,
        email: &str,
    ) -> Result<entity::auth_identity::Model, TestError> {
        Ok(
            entity::prelude::AuthIdentity::insert(entity::auth_identity::ActiveModel {
                id: ActiveValue::Set(identity_id),
                email: ActiveValue::Set(email.to_string()),
                password_hash: ActiveValue::Set(TEST_PASSWORD_HASH.to_string()),
                full_name: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    /// Insert an identity and its profile with the provided id and role.
    pub async fn insert_profile_with_id(
        &self,
        profile_id: Uuid,
        role: UserRole,
    ) -> Result<entity::profile::Model, TestError> {
        let email = format!("{}@example.com", profile_id.simple());
        self.insert_identity(profile_id, &email).await?;

        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Profile::insert(entity::profile::ActiveModel {
                id: ActiveValue::Set(profile_id),
                email: ActiveValue::Set(email),
                full_name: ActiveValue::Set("Test User".to_string()),
                role: ActiveValue::Set(role),
                phone: ActiveValue::Set(None),
                location: ActiveValue::Set(None),
                bio: ActiveValue::Set(None),
                company_name: ActiveValue::Set(None),
                resume_url: ActiveValue::Set(None),
                profile_image_url: ActiveValue::Set(None),
                skills: ActiveValue::Set(None),
                experience_years: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    pub async fn insert_profile(
        &self,
        role: UserRole,
    ) -> Result<entity::profile::Model, TestError> {
        self.insert_profile_with_id(Uuid::new_v4(), role).await
    }

    pub async fn insert_job_seeker(&self) -> Result<entity::profile::Model, TestError> {
        self.insert_profile(UserRole::JobSeeker).await
    }

    pub async fn insert_recruiter(&self) -> Result<entity::profile::Model, TestError> {
        self.insert_profile(UserRole::Recruiter).await
    }

    pub async fn insert_admin(&self) -> Result<entity::profile::Model, TestError> {
        self.insert_profile(UserRole::Admin).await
    }
}
