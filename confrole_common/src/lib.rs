//! Configuration role model.
//!
//! Defines the closed set of roles a dependency configuration can hold and
//! the capabilities each role grants. Everything that stores, resolves or
//! reports on configurations consumes these facts; nothing here depends on
//! those collaborators.
//!
//! # Module Structure
//!
//! - [`role`] - The [`role::Role`] enum and its capability flags
//! - [`usage`] - Contract for configurations that carry a role
//! - [`error`] - Role lookup and usage errors
//! - [`config`] - TOML configuration loading
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use confrole_common::prelude::*;
//!
//! let decl = ConfigurationDecl::new("compileClasspath", Role::ForResolution);
//! assert!(decl.ensure_selectable().is_err());
//! assert_eq!(Role::all().len(), 2);
//! ```

pub mod config;
pub mod error;
pub mod prelude;
pub mod role;
pub mod usage;
