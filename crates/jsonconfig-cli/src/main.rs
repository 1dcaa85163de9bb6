//! jsonconfig — command-line inspector for section/key JSON config files.
//!
//! Loads a document with [`ConfigStore::read_config`] and prints values
//! through the store's typed getters, so scripts see exactly what a host
//! application would read.
//!
//! # Usage
//!
//! ```text
//! jsonconfig --file <PATH> <COMMAND>
//!
//! Commands:
//!   get      <SECTION> <KEY>   Canonical string form (empty if absent)
//!   int      <SECTION> <KEY>   Value coerced to an integer
//!   float    <SECTION> <KEY>   Value coerced to a 64-bit float
//!   sections                   All section names, one per line
//!   keys     <SECTION>         Key names in a section, one per line
//! ```
//!
//! # Environment variables
//!
//! | Variable          | Description                                   |
//! |-------------------|-----------------------------------------------|
//! | `JSONCONFIG_FILE` | Default for `--file`                          |
//! | `RUST_LOG`        | Log filter for stderr output (default `warn`) |

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use jsonconfig_core::ConfigStore;
use tracing::debug;
use tracing_subscriber::EnvFilter;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Inspect a section/key JSON configuration file.
#[derive(Debug, Parser)]
#[command(
    name = "jsonconfig",
    about = "Read values from a section/key JSON configuration file",
    version
)]
struct Cli {
    /// Path to the JSON document (an object of objects).
    #[arg(long, short, env = "JSONCONFIG_FILE")]
    file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, PartialEq, Subcommand)]
enum Command {
    /// Print the canonical string form of a value.  Prints nothing if absent.
    Get { section: String, key: String },
    /// Print a value coerced to an integer.
    Int { section: String, key: String },
    /// Print a value coerced to a 64-bit float.
    Float { section: String, key: String },
    /// List section names.
    Sections,
    /// List key names within a section.
    Keys { section: String },
}

impl Command {
    /// Runs the command against `store` and returns the lines to print.
    ///
    /// # Errors
    ///
    /// Returns an error when `int` or `float` cannot coerce the value.
    fn execute(&self, store: &ConfigStore) -> anyhow::Result<Vec<String>> {
        let lines = match self {
            Command::Get { section, key } => vec![store.get_as_string(section, key)],
            Command::Int { section, key } => {
                vec![store.get_as_int(section, key)?.to_string()]
            }
            Command::Float { section, key } => {
                let value = store.get_as_f64(section, key)?;
                vec![jsonconfig_core::Value::Float64(value).to_string()]
            }
            Command::Sections => store.section_names(),
            Command::Keys { section } => store.keys(section),
        };
        Ok(lines)
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only values.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    debug!(file = %cli.file.display(), command = ?cli.command, "starting");

    let store = ConfigStore::read_config(&cli.file)
        .with_context(|| format!("failed to load config from {}", cli.file.display()))?;

    for line in cli.command.execute(&store)? {
        println!("{line}");
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
