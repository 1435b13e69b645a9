//! Repositories wrapping sea-orm queries for each table.
//!
//! Repositories are generic over [`sea_orm::ConnectionTrait`] so services can run them
//! against either the pooled connection or an open transaction. They return raw
//! [`sea_orm::DbErr`]; classification into constraint errors happens on conversion into
//! the server's `Error`.

pub mod application;
pub mod identity;
pub mod job;
pub mod profile;
pub mod saved_job;
pub mod storage_object;
