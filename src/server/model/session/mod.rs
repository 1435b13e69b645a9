//! Typed wrappers for values stored in the user's session.

pub mod identity;
