//! Shared test harness for the job board workspace.
//!
//! Tests are written in two phases: a [`TestBuilder`] declares the tables and
//! fixtures a test needs, then the returned [`TestContext`] exposes the
//! in-memory database, session and temporary object store along with fixture
//! helpers for inserting further rows.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod schema;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_PASSWORD, TEST_PUBLIC_BASE_URL},
        fixtures::factory, test_setup_with_job_board_tables, test_setup_with_tables, TestBuilder,
        TestContext, TestError,
    };
}

/// Build a [`TestContext`] with an empty database, or with tables for the given entities.
#[macro_export]
macro_rules! test_setup_with_tables {
    () => {{
        $crate::TestBuilder::new().build().await
    }};

    ($($entity:expr),+ $(,)?) => {{
        $crate::TestBuilder::new()
            $(.with_table($entity))+
            .build()
            .await
    }};
}

/// Build a [`TestContext`] with every job board table and unique index created.
#[macro_export]
macro_rules! test_setup_with_job_board_tables {
    () => {{
        $crate::TestBuilder::new()
            .with_job_board_tables()
            .build()
            .await
    }};
}
