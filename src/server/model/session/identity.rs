use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use uuid::Uuid;

use crate::server::error::Error;

pub const SESSION_IDENTITY_ID_KEY: &str = "jobboard:identity:id";

#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionIdentityId(pub String);

impl SessionIdentityId {
    /// Insert identity ID into session
    pub async fn insert(session: &Session, identity_id: Uuid) -> Result<(), Error> {
        session
            .insert(
                SESSION_IDENTITY_ID_KEY,
                SessionIdentityId(identity_id.to_string()),
            )
            .await?;

        Ok(())
    }

    /// Get identity ID from session
    pub async fn get(session: &Session) -> Result<Option<Uuid>, Error> {
        session
            .get::<SessionIdentityId>(SESSION_IDENTITY_ID_KEY)
            .await?
            .map(|SessionIdentityId(id_str)| {
                Uuid::parse_str(&id_str).map_err(|e| {
                    Error::ParseError(format!("Failed to parse session identity id: {}", e))
                })
            })
            .transpose()
    }
}
