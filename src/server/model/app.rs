use std::path::PathBuf;

use sea_orm::DatabaseConnection;

use crate::server::storage::ObjectStore;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub storage: ObjectStore,
}

/// Builds state from a database connection, object store root and public base URL
impl From<(DatabaseConnection, PathBuf, String)> for AppState {
    fn from((db, storage_root, public_base_url): (DatabaseConnection, PathBuf, String)) -> Self {
        Self {
            db,
            storage: ObjectStore::new(storage_root, public_base_url),
        }
    }
}
