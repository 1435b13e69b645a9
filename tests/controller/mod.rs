//! Handler tests calling controller functions directly with a test session.

mod application;
mod auth;
mod job;
mod profile;
mod resume;
mod saved_job;

use jobboard_test_utils::prelude::*;

use crate::util::{into_response, read_json, TestContextExt};
