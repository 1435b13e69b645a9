//! SeaORM entities for the job board schema.
//!
//! Tables: `auth_identity`, `profile`, `job`, `application`, `saved_job` and
//! `storage_object`. Enum columns map onto the `user_role`, `job_status` and
//! `application_status` database types.

pub mod prelude;

pub mod application;
pub mod auth_identity;
pub mod job;
pub mod profile;
pub mod saved_job;
pub mod sea_orm_active_enums;
pub mod skill_list;
pub mod storage_object;
