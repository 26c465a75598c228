//! Inventory loading and checking from files on disk.

use confrole::inventory::{self, InventoryConfig, Violation};
use confrole_common::config::{ConfigError, ConfigLoader, LogLevel};
use confrole_common::error::UsageError;
use confrole_common::role::Role;
use std::fs;
use tempfile::TempDir;

fn write_inventory(dir: &TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("inventory.toml");
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn loads_and_checks_clean_inventory() {
    let dir = TempDir::new().unwrap();
    let path = write_inventory(
        &dir,
        r#"
[shared]
service_name = "java-library"
log_level = "debug"

[[configurations]]
name = "apiElements"
role = "ForSelection"
selected = true

[[configurations]]
name = "runtimeElements"
role = "FOR_SELECTION"
selected = true

[[configurations]]
name = "compileClasspath"
role = "ForResolution"
"#,
    );

    let config = InventoryConfig::load(&path).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.shared.log_level, LogLevel::Debug);

    let report = inventory::check(&config);
    assert!(report.is_clean());
    assert_eq!(report.count(Role::ForSelection), 2);
    assert_eq!(report.count(Role::ForResolution), 1);
}

#[test]
fn reports_selection_of_resolution_configuration() {
    let dir = TempDir::new().unwrap();
    let path = write_inventory(
        &dir,
        r#"
[shared]
service_name = "app"

[[configurations]]
name = "runtimeClasspath"
role = "ForResolution"
selected = true
"#,
    );

    let report = inventory::check(&InventoryConfig::load(&path).unwrap());
    assert_eq!(report.violations.len(), 1);
    let Violation::Usage(UsageError::NotSelectable { configuration, role }) =
        &report.violations[0]
    else {
        panic!("unexpected violation: {:?}", report.violations[0]);
    };
    assert_eq!(configuration, "runtimeClasspath");
    assert_eq!(*role, Role::ForResolution);
    assert!(
        report.violations[0]
            .to_string()
            .contains("cannot be used in selection")
    );
}

#[test]
fn missing_inventory_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");
    let err = InventoryConfig::load(&path).unwrap_err();
    assert!(matches!(&err, ConfigError::FileNotFound(p) if *p == path));
    assert_eq!(
        err.to_string(),
        format!("Configuration file not found: {}", path.display())
    );
}

#[test]
fn empty_service_name_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = write_inventory(&dir, "[shared]\nservice_name = \"\"\n");
    let config = InventoryConfig::load(&path).unwrap();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError(_))
    ));
}

#[test]
fn unknown_role_names_reported_per_entry() {
    let dir = TempDir::new().unwrap();
    let path = write_inventory(
        &dir,
        r#"
[shared]
service_name = "app"

[[configurations]]
name = "legacy"
role = "Consumable"

[[configurations]]
name = "other"
role = "forresolution"
"#,
    );

    let report = inventory::check(&InventoryConfig::load(&path).unwrap());
    assert_eq!(report.violations.len(), 2);
    assert!(report.resolved.is_empty());
    for violation in &report.violations {
        assert!(violation.to_string().contains("unknown role"));
    }
}
