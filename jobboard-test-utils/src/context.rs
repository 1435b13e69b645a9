//! Test context returned by [`TestBuilder`](crate::TestBuilder).
//!
//! Holds an in-memory SQLite database, a session backed by a memory store and a
//! temporary directory used as the root of the object store.

use std::{path::Path, sync::Arc};

use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    ConnectionTrait, Database, DatabaseConnection,
};
use tempfile::TempDir;
use tower_sessions::{MemoryStore, Session};

use crate::{constant::TEST_PUBLIC_BASE_URL, error::TestError};

/// Test environment for a single test.
///
/// ```ignore
/// let test = test_setup_with_job_board_tables!()?;
///
/// let recruiter = test.profile().insert_recruiter().await?;
/// let job = test.job().insert_open_job(recruiter.id).await?;
/// ```
pub struct TestContext {
    /// Connection to the in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session backed by an in-memory store
    pub session: Session,
    /// Directory backing the object store, removed when the context drops
    pub storage_dir: TempDir,
}

impl TestContext {
    /// Convert the context into any type constructible from its parts.
    ///
    /// Avoids a dependency from this crate on the server crate's `AppState`.
    ///
    /// ```ignore
    /// let app_state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, std::path::PathBuf, String)>,
    {
        T::from((
            self.db.clone(),
            self.storage_dir.path().to_path_buf(),
            TEST_PUBLIC_BASE_URL.to_string(),
        ))
    }

    /// Root directory of the temporary object store.
    pub fn storage_root(&self) -> &Path {
        self.storage_dir.path()
    }
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store, None);

        let db = Database::connect("sqlite::memory:").await?;
        let storage_dir = tempfile::tempdir()?;

        Ok(TestContext {
            db,
            session,
            storage_dir,
        })
    }

    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    pub(crate) async fn with_indexes(
        &self,
        stmts: Vec<IndexCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
