//! Identity service: sign-up and sign-in against the `auth_identity` table.
//!
//! Sign-up inserts the identity and dispatches [`provision::IdentityCreated`] to the
//! configured handler inside one transaction, so an identity never exists without its
//! profile.

pub mod password;
pub mod provision;

#[cfg(test)]
mod tests;

use entity::sea_orm_active_enums::UserRole;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        auth::{SignInDto, SignUpDto},
        profile::ProfileDto,
    },
    server::{
        data::{identity::IdentityRepository, profile::ProfileRepository},
        error::{auth::AuthError, constraint::ConstraintError, Error},
        policy::{authorize, Caller, Operation, ProfileSubject},
        service::{
            identity::provision::{IdentityCreated, IdentityCreatedHandler, ProfileProvisioner},
            retry::RetryContext,
            validate,
        },
    },
};

/// Service for creating and authenticating identities.
pub struct IdentityService<'a, H = ProfileProvisioner> {
    db: &'a DatabaseConnection,
    handler: H,
}

impl<'a> IdentityService<'a> {
    /// Creates a new instance of IdentityService provisioning profiles on sign-up.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            handler: ProfileProvisioner,
        }
    }
}

impl<'a, H: IdentityCreatedHandler> IdentityService<'a, H> {
    /// Creates a service dispatching identity creation to a custom handler.
    pub fn with_handler(db: &'a DatabaseConnection, handler: H) -> Self {
        Self { db, handler }
    }

    /// Creates an identity and its profile.
    ///
    /// The identity insert, the `IdentityCreated` handler and the optional initial role
    /// all run in one transaction; any failure leaves neither row behind.
    ///
    /// # Returns
    /// - `Ok(ProfileDto)` - The provisioned profile
    /// - `Err(Error::ConstraintError)` - Invalid email, password or requested role
    /// - `Err(Error::AuthError(AuthError::EmailTaken))` - Email already registered
    /// - `Err(Error)` - Handler or database failure
    pub async fn sign_up(&self, sign_up: SignUpDto) -> Result<ProfileDto, Error> {
        let email = validate::email(&sign_up.email)?;
        validate::password(&sign_up.password)?;

        if sign_up.role == Some(UserRole::Admin) {
            return Err(ConstraintError::invalid("role", "admin cannot be self-assigned").into());
        }

        let password_hash = password::hash_password(&sign_up.password).await?;
        let full_name = sign_up
            .full_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty());

        let txn = self.db.begin().await?;

        let identity = IdentityRepository::new(&txn)
            .create(&email, &password_hash, full_name)
            .await
            .map_err(|e| match Error::from(e) {
                Error::ConstraintError(ConstraintError::Duplicate(_)) => {
                    Error::from(AuthError::EmailTaken)
                }
                e => e,
            })?;

        let event = IdentityCreated {
            identity_id: identity.id,
            email: identity.email.clone(),
            full_name: identity.full_name.clone(),
        };
        self.handler.on_identity_created(&txn, &event).await?;

        let profile_repo = ProfileRepository::new(&txn);

        if let Some(role) = sign_up.role.filter(|role| *role != UserRole::JobSeeker) {
            let caller = Caller::identity(identity.id, UserRole::JobSeeker);
            authorize::<entity::profile::Entity>(
                &caller,
                Operation::Update,
                &ProfileSubject { id: identity.id },
            )?;

            profile_repo.set_role(identity.id, role).await?;
        }

        let profile = profile_repo.get(identity.id).await?.ok_or_else(|| {
            Error::InternalError(format!(
                "Profile for identity {} missing after creation handler ran",
                identity.id
            ))
        })?;

        txn.commit().await?;

        tracing::info!(identity_id = %identity.id, role = ?profile.role, "Identity signed up");

        Ok(profile.into())
    }

    /// Verifies credentials and returns the identity's profile.
    ///
    /// # Returns
    /// - `Ok(ProfileDto)` - Credentials valid
    /// - `Err(Error::AuthError(AuthError::InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(Error)` - Database failure or malformed stored hash
    pub async fn sign_in(&self, sign_in: SignInDto) -> Result<ProfileDto, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let email = sign_in.email.trim().to_lowercase();
        let db = self.db.clone();

        let identity = ctx
            .execute_with_retry("sign in lookup", |_| {
                let db = db.clone();
                let email = email.clone();

                Box::pin(async move {
                    Ok(IdentityRepository::new(&db).get_by_email(&email).await?)
                })
            })
            .await?;

        let Some(identity) = identity else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !password::verify_password(&sign_in.password, &identity.password_hash).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let profile = ProfileRepository::new(self.db)
            .get(identity.id)
            .await?
            .ok_or_else(|| {
                Error::InternalError(format!("Identity {} has no profile", identity.id))
            })?;

        Ok(profile.into())
    }
}
