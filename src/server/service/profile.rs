use entity::sea_orm_active_enums::UserRole;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::profile::{ProfileDto, UpdateProfileDto},
    server::{
        data::profile::ProfileRepository,
        error::{constraint::ConstraintError, Error},
        policy::{authorize, Caller, EntityKind, Operation, ProfileSubject},
        service::{retry::RetryContext, validate},
    },
};

/// Service for reading and updating profiles.
pub struct ProfileService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a profile, readable by anyone
    ///
    /// # Returns
    /// - `Ok(Some(ProfileDto))` - Profile found
    /// - `Ok(None)` - No profile with the ID
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn get_profile(&self, profile_id: Uuid) -> Result<Option<ProfileDto>, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry(&format!("get profile ID {}", profile_id), |_| {
            let db = db.clone();

            Box::pin(async move {
                let profile = ProfileRepository::new(&db).get(profile_id).await?;

                Ok(profile.map(ProfileDto::from))
            })
        })
        .await
    }

    /// Updates the caller's own profile
    ///
    /// # Returns
    /// - `Ok(ProfileDto)` - Updated profile
    /// - `Err(Error::PolicyError)` - Anonymous caller
    /// - `Err(Error::ConstraintError)` - Blank name, negative experience or admin role requested
    /// - `Err(Error::NotFound)` - Caller's profile no longer exists
    pub async fn update_own_profile(
        &self,
        caller: &Caller,
        mut changes: UpdateProfileDto,
    ) -> Result<ProfileDto, Error> {
        let identity = caller.require_identity(EntityKind::Profile, Operation::Update)?;

        authorize::<entity::profile::Entity>(
            caller,
            Operation::Update,
            &ProfileSubject { id: identity.id },
        )?;

        if changes.role == Some(UserRole::Admin) && identity.role != UserRole::Admin {
            return Err(ConstraintError::invalid("role", "admin cannot be self-assigned").into());
        }

        if let Some(full_name) = changes.full_name.as_deref() {
            changes.full_name = Some(validate::non_blank("full_name", full_name)?);
        }
        validate::non_negative("experience_years", changes.experience_years)?;
        if let Some(skills) = changes.skills.take() {
            changes.skills = Some(
                skills
                    .into_iter()
                    .map(|skill| skill.trim().to_string())
                    .filter(|skill| !skill.is_empty())
                    .collect(),
            );
        }

        let profile = ProfileRepository::new(self.db)
            .update(identity.id, changes)
            .await?
            .ok_or_else(|| Error::NotFound("Profile".to_string()))?;

        Ok(profile.into())
    }
}
