//! Business logic services.
//!
//! Services resolve the caller's permissions through the policy layer, validate input
//! and coordinate repositories, wrapping multi-step writes in transactions and reads in
//! [`retry::RetryContext`].

pub mod application;
pub mod identity;
pub mod job;
pub mod profile;
pub mod resume;
pub mod retry;
pub mod saved_job;
pub mod validate;
