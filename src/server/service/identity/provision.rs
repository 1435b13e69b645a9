//! Profile auto-provisioning.
//!
//! Every identity gets exactly one profile, created by [`ProfileProvisioner`] when the
//! identity is created. The handler runs on the identity-creation transaction so the two
//! rows commit or roll back together.

use std::future::Future;

use entity::sea_orm_active_enums::UserRole;
use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::server::{data::profile::ProfileRepository, error::Error};

/// Name given to profiles whose identity has no usable full name
pub const DEFAULT_FULL_NAME: &str = "User";

/// Event dispatched after an identity row is inserted
#[derive(Clone, Debug)]
pub struct IdentityCreated {
    pub identity_id: Uuid,
    pub email: String,
    /// Full name from the identity's sign-up metadata
    pub full_name: Option<String>,
}

/// Handler invoked synchronously when an identity is created
pub trait IdentityCreatedHandler: Send + Sync {
    /// Handle the event on the connection the identity was inserted with
    ///
    /// An error aborts identity creation.
    fn on_identity_created<C>(
        &self,
        db: &C,
        event: &IdentityCreated,
    ) -> impl Future<Output = Result<(), Error>> + Send
    where
        C: ConnectionTrait;
}

/// Creates the job seeker profile for a new identity
#[derive(Clone, Copy, Debug, Default)]
pub struct ProfileProvisioner;

impl ProfileProvisioner {
    /// Trimmed full name, or [`DEFAULT_FULL_NAME`] when absent or blank
    pub fn full_name(event: &IdentityCreated) -> &str {
        event
            .full_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_FULL_NAME)
    }
}

impl IdentityCreatedHandler for ProfileProvisioner {
    async fn on_identity_created<C>(&self, db: &C, event: &IdentityCreated) -> Result<(), Error>
    where
        C: ConnectionTrait,
    {
        let profile_repo = ProfileRepository::new(db);

        profile_repo
            .create(
                event.identity_id,
                &event.email,
                Self::full_name(event),
                UserRole::JobSeeker,
            )
            .await?;

        tracing::info!(identity_id = %event.identity_id, "Provisioned profile for new identity");

        Ok(())
    }
}
