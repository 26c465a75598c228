//! Inventory checks.
//!
//! An inventory is a TOML file listing configuration declarations by name
//! and role. Checking it validates every role name against the closed role
//! set and every requested selection against the role's capabilities.

use std::collections::HashSet;

use confrole_common::config::{ConfigError, SharedConfig};
use confrole_common::error::{RoleError, UsageError};
use confrole_common::role::Role;
use confrole_common::usage::{ConfigurationDecl, RoleAssigned};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Inventory file contents.
///
/// # TOML Example
///
/// ```toml
/// [shared]
/// service_name = "build-inventory"
///
/// [[configurations]]
/// name = "apiElements"
/// role = "ForSelection"
/// selected = true
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InventoryConfig {
    pub shared: SharedConfig,
    #[serde(default)]
    pub configurations: Vec<InventoryEntry>,
}

/// One declared configuration. The role stays a raw string until checked
/// so that every bad name is reported, not just the first.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InventoryEntry {
    pub name: String,
    pub role: String,
    /// The entry is used as a selection target.
    #[serde(default)]
    pub selected: bool,
}

/// A single problem found in an inventory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// The entry's role name matches no known role.
    #[error("configuration '{configuration}': {source}")]
    UnknownRole {
        configuration: String,
        source: RoleError,
    },

    /// The entry is selected but its role forbids selection.
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// A name already used by an earlier entry.
    #[error("configuration '{0}' is declared more than once")]
    DuplicateName(String),
}

/// Outcome of [`check`].
#[derive(Debug, Clone, Default)]
pub struct InventoryReport {
    /// First declaration of each name whose role resolved.
    pub resolved: Vec<ConfigurationDecl>,
    /// Every problem found, in inventory order.
    pub violations: Vec<Violation>,
}

impl InventoryReport {
    /// True when no violation was found.
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of resolved entries holding `role`.
    pub fn count(&self, role: Role) -> usize {
        self.resolved.iter().filter(|d| d.role == role).count()
    }
}

impl InventoryConfig {
    /// Validate the shared section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shared.validate()
    }
}

/// Check every entry of an inventory, collecting all violations.
pub fn check(inventory: &InventoryConfig) -> InventoryReport {
    let mut report = InventoryReport::default();
    let mut seen = HashSet::new();

    for entry in &inventory.configurations {
        let first = seen.insert(entry.name.as_str());
        if !first {
            report
                .violations
                .push(Violation::DuplicateName(entry.name.clone()));
        }

        let role = match entry.role.parse::<Role>() {
            Ok(role) => role,
            Err(source) => {
                report.violations.push(Violation::UnknownRole {
                    configuration: entry.name.clone(),
                    source,
                });
                continue;
            }
        };

        let decl = ConfigurationDecl::new(entry.name.clone(), role);
        if entry.selected {
            if let Err(e) = decl.ensure_selectable() {
                report.violations.push(e.into());
            }
        }
        debug!(configuration = decl.name(), %role, selected = entry.selected, "checked");
        // Only the first declaration of a name counts towards the totals.
        if first {
            report.resolved.push(decl);
        }
    }

    report
}
