//! Diagnostics for configuration roles: role listings and inventory checks.

pub mod inventory;
pub mod report;
