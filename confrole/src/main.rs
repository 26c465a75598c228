//! # Configuration Role Diagnostics
//!
//! Lists the configuration roles, describes one role, or checks an
//! inventory of configuration declarations against the role set.
//!
//! # Usage
//!
//! ```bash
//! confrole list
//! confrole list --json
//! confrole describe ForResolution
//! confrole -v check build/inventory.toml
//! ```

#![deny(warnings)]

use clap::{Parser, Subcommand};
use confrole::inventory::{self, InventoryConfig};
use confrole::report::{RoleSummary, summarize_all};
use confrole_common::config::{ConfigError, ConfigLoader};
use confrole_common::role::Role;
use std::path::{Path, PathBuf};
use std::process;
use tracing::{Level, error, info, warn};
use tracing_subscriber::EnvFilter;

/// Configuration role diagnostics
#[derive(Parser, Debug)]
#[command(name = "confrole")]
#[command(author = "RTS007")]
#[command(version)]
#[command(about = "Inspect configuration roles and check configuration inventories")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose logging (DEBUG level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every role in declaration order
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Describe a single role by name
    Describe {
        /// Role name, e.g. ForSelection
        role: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check an inventory TOML file
    Check {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

fn main() {
    let args = Args::parse();

    let result = match &args.command {
        Command::List { json } => {
            setup_tracing(&args, None);
            list(*json)
        }
        Command::Describe { role, json } => {
            setup_tracing(&args, None);
            describe(role, *json)
        }
        Command::Check { file } => {
            // The inventory's [shared] log_level applies unless --verbose overrides it.
            let loaded = InventoryConfig::load(file);
            let configured = loaded
                .as_ref()
                .ok()
                .map(|c| Level::from(c.shared.log_level));
            setup_tracing(&args, configured);
            check(file, loaded)
        }
    };

    if let Err(e) = result {
        error!("{e}");
        process::exit(1);
    }
}

fn list(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let summaries = summarize_all();
    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else {
        for summary in &summaries {
            println!("{summary}");
        }
    }
    Ok(())
}

fn describe(role: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let summary = RoleSummary::from(role.parse::<Role>()?);
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{summary}");
    }
    Ok(())
}

fn check(
    file: &Path,
    loaded: Result<InventoryConfig, ConfigError>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = loaded?;
    config.validate()?;
    info!(
        "Checking inventory '{}' from {}",
        config.shared.service_name,
        file.display()
    );

    let report = inventory::check(&config);
    for violation in &report.violations {
        warn!("{violation}");
    }
    for role in Role::all() {
        info!("{}: {} configuration(s)", role, report.count(*role));
    }

    if !report.is_clean() {
        return Err(format!(
            "{} violation(s) in {}",
            report.violations.len(),
            file.display()
        )
        .into());
    }
    println!(
        "{}: {} configuration(s) OK",
        file.display(),
        report.resolved.len()
    );
    Ok(())
}

/// Setup tracing subscriber based on CLI arguments and the configured level.
fn setup_tracing(args: &Args, configured: Option<Level>) {
    let level = if args.verbose {
        Level::DEBUG
    } else {
        configured.unwrap_or(Level::INFO)
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if args.json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
