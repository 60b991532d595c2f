//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Output produced by a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// The configured build graph as JSON.
    #[default]
    Json,
    /// The discovery plan as JSON, before any module is configured.
    Plan,
    /// Gradle Kotlin DSL scripts.
    Gradle,
}

/// Import a multi-module Maven checkout as build modules.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "pomport")]
#[command(version)]
#[command(about = "Import a multi-module Maven checkout as build modules")]
pub struct CliArgs {
    /// Maven checkout to import.
    #[arg(value_name = "CHECKOUT_DIR")]
    pub checkout: PathBuf,

    /// Output format.
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Output directory. JSON formats print to stdout when absent; Gradle
    /// scripts default to the checkout directory.
    #[arg(long, short, value_name = "DIR")]
    pub output: Option<PathBuf>,
}
