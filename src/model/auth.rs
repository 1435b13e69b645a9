use entity::sea_orm_active_enums::UserRole;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SignUpDto {
    pub email: String,
    pub password: String,
    /// Display name, defaults to "User" when omitted or blank
    pub full_name: Option<String>,
    /// Initial role, defaults to job seeker. Admin cannot be requested.
    pub role: Option<UserRole>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SignInDto {
    pub email: String,
    pub password: String,
}
