//! Helpers shared by request handlers.

pub mod get_caller;
