//! HTTP handlers for the job board API.
//!
//! Handlers resolve the caller from the session with [`util::get_caller::get_caller`],
//! delegate to a service and map the result to a JSON response. Every handler carries a
//! `utoipa::path` annotation collected into the OpenAPI document by the router.

pub mod application;
pub mod auth;
pub mod job;
pub mod profile;
pub mod resume;
pub mod saved_job;
pub mod util;
