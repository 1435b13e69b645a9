use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::job::JobDto;

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SavedJobDto {
    pub id: Uuid,
    pub job_id: Uuid,
    pub saved_at: NaiveDateTime,
    /// Absent when the job is no longer visible to the caller
    pub job: Option<JobDto>,
}
