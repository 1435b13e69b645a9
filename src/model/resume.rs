use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ResumeDto {
    /// Public URL the resume can be fetched from
    pub url: String,
    pub content_type: String,
    pub size: i64,
}
