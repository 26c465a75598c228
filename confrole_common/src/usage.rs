//! Role-gated usage of configurations.
//!
//! Collaborators that own configurations implement [`RoleAssigned`] and call
//! its checks before letting a configuration take part in an operation.
//! The role only supplies the facts; enforcement happens at the call site.

use serde::Deserialize;
use tracing::debug;

use crate::error::UsageError;
use crate::role::Role;

/// A configuration that holds exactly one [`Role`].
pub trait RoleAssigned {
    /// Configuration name, used in diagnostics.
    fn name(&self) -> &str;

    /// The role currently assigned to this configuration.
    fn role(&self) -> Role;

    /// Whether this configuration may be chosen as a selection target.
    fn can_be_used_in_selection(&self) -> bool {
        self.role().can_be_used_in_selection()
    }

    /// Check that this configuration may be chosen as a selection target.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::NotSelectable`] if the role forbids selection.
    fn ensure_selectable(&self) -> Result<(), UsageError> {
        let role = self.role();
        if role.can_be_used_in_selection() {
            return Ok(());
        }
        debug!(configuration = self.name(), %role, "selection rejected by role");
        Err(UsageError::NotSelectable {
            configuration: self.name().to_string(),
            role,
        })
    }
}

/// Minimal configuration declaration: a name bound to a role.
///
/// # TOML Example
///
/// ```toml
/// name = "runtimeElements"
/// role = "ForSelection"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConfigurationDecl {
    pub name: String,
    pub role: Role,
}

impl ConfigurationDecl {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }
}

impl RoleAssigned for ConfigurationDecl {
    fn name(&self) -> &str {
        &self.name
    }

    fn role(&self) -> Role {
        self.role
    }
}
