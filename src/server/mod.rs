//! Job board server.
//!
//! Requests enter through [`router`] into [`controller`] handlers, which resolve the
//! caller from the session and call into [`service`]. Services check every operation
//! against the row-level rules in [`policy`] before touching [`data`] repositories or the
//! [`storage`] object store.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod policy;
pub mod router;
pub mod service;
pub mod startup;
pub mod storage;
