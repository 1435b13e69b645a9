use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::UserRole;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ProfileDto {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub company_name: Option<String>,
    pub resume_url: Option<String>,
    pub profile_image_url: Option<String>,
    pub skills: Option<Vec<String>>,
    pub experience_years: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::profile::Model> for ProfileDto {
    fn from(profile: entity::profile::Model) -> Self {
        Self {
            id: profile.id,
            email: profile.email,
            full_name: profile.full_name,
            role: profile.role,
            phone: profile.phone,
            location: profile.location,
            bio: profile.bio,
            company_name: profile.company_name,
            resume_url: profile.resume_url,
            profile_image_url: profile.profile_image_url,
            skills: profile.skills.map(|skills| skills.0),
            experience_years: profile.experience_years,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

/// Partial update of the caller's own profile, omitted fields are left unchanged
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateProfileDto {
    pub full_name: Option<String>,
    pub role: Option<UserRole>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub company_name: Option<String>,
    pub profile_image_url: Option<String>,
    pub skills: Option<Vec<String>>,
    pub experience_years: Option<i32>,
}
