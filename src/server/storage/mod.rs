//! Path-addressed object store on the local filesystem.
//!
//! Objects live at `{root}/{bucket}/{name}` where `name` may contain `/`-separated
//! segments. Metadata (owner, content type, size) is kept in the `storage_object`
//! table by the services using this store.

use std::path::{Component, Path, PathBuf};

use uuid::Uuid;

use crate::server::error::storage::StorageError;

#[derive(Clone, Debug)]
pub struct ObjectStore {
    root: PathBuf,
    public_base_url: String,
}

impl ObjectStore {
    pub fn new(root: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.into(),
        }
    }

    /// Writes the object, replacing any previous object at the same path
    ///
    /// The bytes are written to a sibling temporary file unique to this upload and renamed
    /// into place, so a concurrent fetch never observes a partially written object and
    /// overlapping uploads to the same path do not share a temporary file.
    pub async fn upload(&self, bucket: &str, name: &str, bytes: &[u8]) -> Result<(), StorageError> {
        let path = self.object_path(bucket, name)?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut tmp_name = path.as_os_str().to_owned();
        tmp_name.push(format!(".{}.upload", Uuid::new_v4()));
        let tmp_path = PathBuf::from(tmp_name);

        let written = match tokio::fs::write(&tmp_path, bytes).await {
            Ok(()) => tokio::fs::rename(&tmp_path, &path).await,
            Err(err) => Err(err),
        };

        if let Err(err) = written {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(err.into());
        }

        tracing::debug!(bucket, name, size = bytes.len(), "Stored object");

        Ok(())
    }

    /// Reads the object, returning `Ok(None)` when nothing is stored at the path
    pub async fn fetch(&self, bucket: &str, name: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let path = self.object_path(bucket, name)?;

        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Public URL for an API path below `/api/storage`
    pub fn public_url(&self, path: &str) -> String {
        format!(
            "{}/api/storage/{}",
            self.public_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Resolves the filesystem path, rejecting anything that could escape the bucket
    fn object_path(&self, bucket: &str, name: &str) -> Result<PathBuf, StorageError> {
        let mut path = self.root.join(Self::segment(bucket)?);

        for segment in name.split('/') {
            path.push(Self::segment(segment)?);
        }

        Ok(path)
    }

    fn segment(segment: &str) -> Result<&str, StorageError> {
        let mut components = Path::new(segment).components();

        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) if !segment.contains('\\') => Ok(segment),
            _ => Err(StorageError::InvalidPath(segment.to_string())),
        }
    }
}
