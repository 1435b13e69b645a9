//! Row-level access policy.
//!
//! Every read and mutation is checked against a `(caller, entity, operation)` rule before
//! it reaches storage. Listings apply [`ReadScope`] as a query condition so rows outside
//! the caller's scope are never returned. Single-row mutations load the row, build the
//! entity's [`RowPolicy::Subject`] from it and call [`authorize`], rejecting the whole
//! operation when the rule does not hold.
//!
//! | Entity | Read | Create | Update | Delete |
//! |---|---|---|---|---|
//! | Profile | anyone | own | own | never |
//! | Job | open, or own | own, recruiter role | own | own |
//! | Application | applicant, or job owner | applicant, job seeker role | job owner | never |
//! | SavedJob | own | own | never | own |
//! | StorageObject | owner, or recruiter the owner applied to | owner | owner | owner |

mod rules;
mod scope;

pub use rules::{
    ApplicationSubject, JobSubject, ObjectSubject, ProfileSubject, SavedJobSubject,
};

use std::fmt;

use entity::sea_orm_active_enums::UserRole;
use sea_orm::Condition;
use uuid::Uuid;

use crate::server::error::policy::PolicyError;

/// Operation being attempted on a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Read,
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operation = match self {
            Self::Read => "read",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        };

        f.write_str(operation)
    }
}

/// Entity a rule applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Profile,
    Job,
    Application,
    SavedJob,
    StorageObject,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entity = match self {
            Self::Profile => "profile",
            Self::Job => "job",
            Self::Application => "application",
            Self::SavedJob => "saved job",
            Self::StorageObject => "file",
        };

        f.write_str(entity)
    }
}

/// Authenticated identity making a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallerIdentity {
    pub id: Uuid,
    pub role: UserRole,
}

/// Who is making a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Caller {
    Anonymous,
    Identity(CallerIdentity),
}

impl Caller {
    pub fn identity(id: Uuid, role: UserRole) -> Self {
        Self::Identity(CallerIdentity { id, role })
    }

    pub fn id(&self) -> Option<Uuid> {
        match self {
            Self::Anonymous => None,
            Self::Identity(identity) => Some(identity.id),
        }
    }

    pub fn role(&self) -> Option<UserRole> {
        match self {
            Self::Anonymous => None,
            Self::Identity(identity) => Some(identity.role),
        }
    }

    /// Whether the caller is the identity with the given id.
    pub fn is(&self, id: Uuid) -> bool {
        self.id() == Some(id)
    }

    pub fn has_role(&self, role: UserRole) -> bool {
        self.role() == Some(role)
    }

    /// Returns the caller's identity or an unauthenticated rejection for `operation` on `entity`.
    pub fn require_identity(
        &self,
        entity: EntityKind,
        operation: Operation,
    ) -> Result<CallerIdentity, PolicyError> {
        match self {
            Self::Identity(identity) => Ok(*identity),
            Self::Anonymous => Err(PolicyError::Unauthenticated { entity, operation }),
        }
    }
}

/// Per-entity access rule evaluated against a loaded row.
pub trait RowPolicy {
    const KIND: EntityKind;

    /// The row attributes the rule depends on.
    type Subject;

    fn allows(caller: &Caller, operation: Operation, subject: &Self::Subject) -> bool;
}

/// Query condition restricting listings to the rows the caller may read.
pub trait ReadScope {
    fn read_scope(caller: &Caller) -> Condition;
}

/// Check `operation` on `subject` for `caller`.
///
/// # Returns
/// - `Ok(())` - The rule allows the operation
/// - `Err(PolicyError::Unauthenticated)` - Rejected and the caller is anonymous
/// - `Err(PolicyError::Denied)` - Rejected for an authenticated caller
pub fn authorize<P: RowPolicy>(
    caller: &Caller,
    operation: Operation,
    subject: &P::Subject,
) -> Result<(), PolicyError> {
    if P::allows(caller, operation, subject) {
        return Ok(());
    }

    let err = match caller {
        Caller::Anonymous => PolicyError::Unauthenticated {
            entity: P::KIND,
            operation,
        },
        Caller::Identity(identity) => {
            tracing::debug!(
                identity_id = %identity.id,
                role = ?identity.role,
                "Rejected {} on {}",
                operation,
                P::KIND
            );

            PolicyError::Denied {
                entity: P::KIND,
                operation,
            }
        }
    };

    Err(err)
}
