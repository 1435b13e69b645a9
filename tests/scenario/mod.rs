//! End-to-end flows across several handlers sharing one database.

mod application_flow;
mod provisioning;

use jobboard_test_utils::prelude::*;

use crate::util::{into_response, read_json, TestContextExt};
