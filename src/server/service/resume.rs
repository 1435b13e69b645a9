//! Resume files stored in the `resumes` bucket.
//!
//! Each identity owns a single object named `{identity_id}/resume`. Uploading replaces it
//! and points the profile's `resume_url` at the public download route.

use entity::sea_orm_active_enums::UserRole;
use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::{
    model::resume::ResumeDto,
    server::{
        data::{
            application::ApplicationRepository, profile::ProfileRepository,
            storage_object::StorageObjectRepository,
        },
        error::{storage::StorageError, Error},
        policy::{authorize, Caller, EntityKind, ObjectSubject, Operation},
        storage::ObjectStore,
    },
};

pub const RESUME_BUCKET: &str = "resumes";
pub const MAX_RESUME_BYTES: usize = 5 * 1024 * 1024;

/// A fetched resume file.
pub struct ResumeFile {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

pub struct ResumeService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a ObjectStore,
}

impl<'a> ResumeService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a ObjectStore) -> Self {
        Self { db, storage }
    }

    /// Object name of the identity's resume within [`RESUME_BUCKET`]
    pub fn object_name(identity_id: Uuid) -> String {
        format!("{}/resume", identity_id)
    }

    /// Stores the caller's resume and links it from their profile
    ///
    /// # Returns
    /// - `Ok(ResumeDto)` - Stored resume with its public URL
    /// - `Err(Error::PolicyError)` - Anonymous caller
    /// - `Err(Error::StorageError)` - Empty or oversized upload, or a write failure
    pub async fn upload(
        &self,
        caller: &Caller,
        content_type: &str,
        bytes: &[u8],
    ) -> Result<ResumeDto, Error> {
        let identity = caller.require_identity(EntityKind::StorageObject, Operation::Create)?;

        if bytes.is_empty() {
            return Err(StorageError::Empty.into());
        }
        if bytes.len() > MAX_RESUME_BYTES {
            return Err(StorageError::TooLarge {
                size: bytes.len(),
                max: MAX_RESUME_BYTES,
            }
            .into());
        }

        authorize::<entity::storage_object::Entity>(
            caller,
            Operation::Create,
            &ObjectSubject {
                owner_id: identity.id,
                shared_with_caller: false,
            },
        )?;

        let name = Self::object_name(identity.id);

        let url = self
            .storage
            .public_url(&format!("{}/{}", RESUME_BUCKET, identity.id));

        let txn = self.db.begin().await?;

        let object = StorageObjectRepository::new(&txn)
            .upsert(
                RESUME_BUCKET,
                &name,
                identity.id,
                content_type,
                bytes.len() as i64,
            )
            .await?;

        ProfileRepository::new(&txn)
            .set_resume_url(identity.id, &url)
            .await?
            .ok_or_else(|| Error::NotFound("Profile".to_string()))?;

        // Metadata is only committed once the bytes are in place; a failed write rolls it back
        self.storage.upload(RESUME_BUCKET, &name, bytes).await?;

        txn.commit().await?;

        tracing::info!(identity_id = %identity.id, size = object.size, "Resume uploaded");

        Ok(ResumeDto {
            url,
            content_type: object.content_type,
            size: object.size,
        })
    }

    /// Reads an identity's resume
    ///
    /// Readable by its owner and by recruiters the owner has applied to.
    ///
    /// # Returns
    /// - `Ok(ResumeFile)` - Resume bytes and content type
    /// - `Err(Error::PolicyError)` - Anonymous caller, or caller may not read the resume
    /// - `Err(Error::NotFound)` - No resume stored for the identity
    pub async fn fetch(&self, caller: &Caller, owner_id: Uuid) -> Result<ResumeFile, Error> {
        let identity = caller.require_identity(EntityKind::StorageObject, Operation::Read)?;

        let name = Self::object_name(owner_id);

        let object = StorageObjectRepository::new(self.db)
            .get(RESUME_BUCKET, &name)
            .await?
            .ok_or_else(|| Error::NotFound("Resume".to_string()))?;

        let shared_with_caller = identity.role == UserRole::Recruiter
            && identity.id != object.owner_id
            && ApplicationRepository::new(self.db)
                .has_applied_to_recruiter(object.owner_id, identity.id)
                .await?;

        authorize::<entity::storage_object::Entity>(
            caller,
            Operation::Read,
            &ObjectSubject {
                owner_id: object.owner_id,
                shared_with_caller,
            },
        )?;

        let bytes = self
            .storage
            .fetch(RESUME_BUCKET, &name)
            .await?
            .ok_or_else(|| Error::NotFound("Resume".to_string()))?;

        Ok(ResumeFile {
            content_type: object.content_type,
            bytes,
        })
    }
}
