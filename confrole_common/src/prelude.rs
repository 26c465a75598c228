//! Common re-exports.
//!
//! ```rust
//! use confrole_common::prelude::*;
//!
//! assert!(Role::ForSelection.can_be_used_in_selection());
//! ```

// ─── Roles ──────────────────────────────────────────────────────────
pub use crate::role::{Capabilities, Role};

// ─── Usage ──────────────────────────────────────────────────────────
pub use crate::usage::{ConfigurationDecl, RoleAssigned};

// ─── Errors ─────────────────────────────────────────────────────────
pub use crate::error::{RoleError, UsageError};

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{ConfigError, ConfigLoader, LogLevel, SharedConfig};
