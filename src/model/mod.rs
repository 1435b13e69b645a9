//! Request and response DTOs shared by the HTTP API.

pub mod api;
pub mod application;
pub mod auth;
pub mod job;
pub mod profile;
pub mod resume;
pub mod saved_job;
