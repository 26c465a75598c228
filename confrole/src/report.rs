//! Role listings for diagnostics output.

use std::fmt;

use confrole_common::role::{Capabilities, Role};
use serde::Serialize;

/// Everything known about one role, in a printable shape.
#[derive(Debug, Clone, Serialize)]
pub struct RoleSummary {
    pub index: usize,
    pub name: &'static str,
    pub description: &'static str,
    pub capabilities: Capabilities,
}

impl From<Role> for RoleSummary {
    fn from(role: Role) -> Self {
        Self {
            index: role.index(),
            name: role.name(),
            description: role.description(),
            capabilities: role.capabilities(),
        }
    }
}

impl fmt::Display for RoleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<2} {:<14} selection={:<5} {}",
            self.index, self.name, self.capabilities.can_be_used_in_selection, self.description
        )
    }
}

/// Summaries of every role, in declaration order.
pub fn summarize_all() -> Vec<RoleSummary> {
    Role::all().iter().copied().map(RoleSummary::from).collect()
}
