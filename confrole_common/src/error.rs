//! Error types for role lookups and role-gated usage.

use thiserror::Error;

use crate::role::Role;

/// Failure to turn external input into a [`Role`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoleError {
    /// The name matches no role in the closed set.
    #[error("unknown role: {0:?}")]
    UnknownRole(String),
}

/// A configuration was used in a way its role does not permit.
///
/// Raised by collaborators through [`crate::usage::RoleAssigned`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    /// Selection attempted on a configuration whose role forbids it.
    #[error(
        "configuration '{configuration}' cannot be used in selection (role: {})",
        .role.description()
    )]
    NotSelectable { configuration: String, role: Role },
}
