//! Fixture helpers for inserting rows during a test.
//!
//! - `profile` - auth identities and their profiles
//! - `job` - job postings
//! - `application` - job applications
//! - `saved_job` - bookmarks
//! - `factory` - in-memory models for unit tests that never touch the database

pub mod application;
pub mod factory;
pub mod job;
pub mod profile;
pub mod saved_job;
