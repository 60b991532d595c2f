//! pomport - import a multi-module Maven checkout as build modules.
//!
//! Walks the checkout's `pom.xml` tree, registers every SDK leaf module and
//! prints or writes the resulting build wiring.
//!
//! # Usage
//!
//! ```text
//! pomport ./oci-java-sdk                           # build graph as JSON
//! pomport ./oci-java-sdk --format plan             # discovery plan as JSON
//! pomport ./oci-java-sdk --format gradle -o build  # Kotlin DSL scripts
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `POMPORT_SDK_GROUP_ID` | `com.oracle.oci.sdk` | Upstream SDK group id |
//! | `POMPORT_ARTIFACT_PREFIX` | `oci-java-sdk-` | Upstream artifact prefix |
//! | `POMPORT_MODULE_PREFIX` | `oraclecloud-bmc-` | Local module name prefix |
//! | `POMPORT_LOG_LEVEL` | `info` | Log level filter |
//! | `POMPORT_LOG_FORMAT` | `text` | `json` for JSON logs |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `POMPORT_LOG_LEVEL`) |

mod cli;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use pomport_core::render::render_all;
use pomport_core::{Configurator, ImporterConfig, InMemoryBuildGraph, Importer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{CliArgs, OutputFormat};

/// File written under `--output` for `--format plan`.
const PLAN_OUTPUT_FILE: &str = "pomport-plan.json";

/// File written under `--output` for `--format json`.
const GRAPH_OUTPUT_FILE: &str = "pomport-graph.json";

/// Initialize the tracing subscriber, writing to stderr.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `log_level` config value.
fn init_tracing(config: &ImporterConfig) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(&config.log_level)
            .with_context(|| format!("invalid log level filter: {}", config.log_level))?
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);
    if config.log_json {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(())
}

fn write_json<T: serde::Serialize>(
    value: &T,
    output: Option<&Path>,
    file_name: &str,
) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    match output {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create directory: {}", dir.display()))?;
            let path = dir.join(file_name);
            fs::write(&path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "wrote output");
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn write_gradle(graph: &InMemoryBuildGraph, output: &Path) -> Result<()> {
    let files = render_all(graph, output).context("failed to render build scripts")?;
    for (path, content) in &files {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory: {}", parent.display()))?;
        }
        fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    }
    info!(files = files.len(), "wrote build scripts");
    Ok(())
}

fn run(args: &CliArgs, config: &ImporterConfig) -> Result<()> {
    let importer = Importer::new(config.clone());
    let plan = importer
        .discover(&args.checkout)
        .with_context(|| format!("failed to import {}", args.checkout.display()))?;

    if args.format == OutputFormat::Plan {
        return write_json(&plan, args.output.as_deref(), PLAN_OUTPUT_FILE);
    }

    let mut graph = InMemoryBuildGraph::new();
    Configurator::new(config)
        .apply_all(&plan, &mut graph)
        .context("failed to configure modules")?;

    match args.format {
        OutputFormat::Gradle => {
            let output = args.output.as_deref().unwrap_or(&args.checkout);
            write_gradle(&graph, output)
        }
        _ => write_json(&graph, args.output.as_deref(), GRAPH_OUTPUT_FILE),
    }
}

fn main() -> Result<()> {
    let args = CliArgs::parse();

    let config = ImporterConfig::from_env();
    init_tracing(&config)?;

    info!(
        checkout = %args.checkout.display(),
        format = ?args.format,
        sdk_group_id = %config.sdk_group_id,
        version = env!("CARGO_PKG_VERSION"),
        "starting pomport",
    );

    run(&args, &config)
}
