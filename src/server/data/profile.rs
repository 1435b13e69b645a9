use entity::{sea_orm_active_enums::UserRole, skill_list::SkillList};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
};
use uuid::Uuid;

use crate::model::profile::UpdateProfileDto;

pub struct ProfileRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProfileRepository<'a, C> {
    /// Creates a new instance of [`ProfileRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a profile sharing its ID with the identity it belongs to
    pub async fn create(
        &self,
        identity_id: Uuid,
        email: &str,
        full_name: &str,
        role: UserRole,
    ) -> Result<entity::profile::Model, DbErr> {
        let profile = entity::profile::ActiveModel {
            id: ActiveValue::Set(identity_id),
            email: ActiveValue::Set(email.to_string()),
            full_name: ActiveValue::Set(full_name.to_string()),
            role: ActiveValue::Set(role),
            phone: ActiveValue::Set(None),
            location: ActiveValue::Set(None),
            bio: ActiveValue::Set(None),
            company_name: ActiveValue::Set(None),
            resume_url: ActiveValue::Set(None),
            profile_image_url: ActiveValue::Set(None),
            skills: ActiveValue::Set(None),
            experience_years: ActiveValue::Set(None),
            ..Default::default()
        };

        profile.insert(self.db).await
    }

    pub async fn get(&self, profile_id: Uuid) -> Result<Option<entity::profile::Model>, DbErr> {
        entity::prelude::Profile::find_by_id(profile_id)
            .one(self.db)
            .await
    }

    /// Applies the provided fields, leaving omitted ones unchanged
    ///
    /// Returns `Ok(None)` when the profile does not exist.
    pub async fn update(
        &self,
        profile_id: Uuid,
        changes: UpdateProfileDto,
    ) -> Result<Option<entity::profile::Model>, DbErr> {
        let Some(profile) = self.get(profile_id).await? else {
            return Ok(None);
        };

        let mut profile_am = profile.into_active_model();

        if let Some(full_name) = changes.full_name {
            profile_am.full_name = ActiveValue::Set(full_name);
        }
        if let Some(role) = changes.role {
            profile_am.role = ActiveValue::Set(role);
        }
        if let Some(phone) = changes.phone {
            profile_am.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(location) = changes.location {
            profile_am.location = ActiveValue::Set(Some(location));
        }
        if let Some(bio) = changes.bio {
            profile_am.bio = ActiveValue::Set(Some(bio));
        }
        if let Some(company_name) = changes.company_name {
            profile_am.company_name = ActiveValue::Set(Some(company_name));
        }
        if let Some(profile_image_url) = changes.profile_image_url {
            profile_am.profile_image_url = ActiveValue::Set(Some(profile_image_url));
        }
        if let Some(skills) = changes.skills {
            profile_am.skills = ActiveValue::Set(Some(SkillList(skills)));
        }
        if let Some(experience_years) = changes.experience_years {
            profile_am.experience_years = ActiveValue::Set(Some(experience_years));
        }

        let profile = profile_am.update(self.db).await?;

        Ok(Some(profile))
    }

    pub async fn set_role(
        &self,
        profile_id: Uuid,
        role: UserRole,
    ) -> Result<Option<entity::profile::Model>, DbErr> {
        self.update(
            profile_id,
            UpdateProfileDto {
                role: Some(role),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn set_resume_url(
        &self,
        profile_id: Uuid,
        resume_url: &str,
    ) -> Result<Option<entity::profile::Model>, DbErr> {
        let Some(profile) = self.get(profile_id).await? else {
            return Ok(None);
        };

        let mut profile_am = profile.into_active_model();
        profile_am.resume_url = ActiveValue::Set(Some(resume_url.to_string()));

        let profile = profile_am.update(self.db).await?;

        Ok(Some(profile))
    }
}
