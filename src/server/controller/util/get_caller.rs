use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::{app::AppState, session::identity::SessionIdentityId},
    policy::Caller,
    service::profile::ProfileService,
};

/// Resolves the caller from the session
///
/// # Returns
/// - `Ok(Caller::Anonymous)` - No identity in session
/// - `Ok(Caller::Identity)` - Identity in session with its profile's role
/// - `Err(Error::AuthError(AuthError::IdentityNotInDatabase))` - Session refers to a missing
///   profile, the session is cleared
/// - `Err(Error)` - Session or database failure
pub async fn get_caller(state: &AppState, session: &Session) -> Result<Caller, Error> {
    let Some(identity_id) = SessionIdentityId::get(session).await? else {
        return Ok(Caller::Anonymous);
    };

    let Some(profile) = ProfileService::new(&state.db)
        .get_profile(identity_id)
        .await?
    else {
        session.clear().await;

        tracing::warn!(
            "Cleared session for identity ID {} which has no profile in the database",
            identity_id
        );

        return Err(AuthError::IdentityNotInDatabase(identity_id).into());
    };

    Ok(Caller::identity(profile.id, profile.role))
}
