//! Maven descriptor tree importer.
//!
//! This crate converts a multi-module Maven checkout into a set of build
//! modules. It is not a general Maven model: it only understands what is
//! needed to re-create the OCI SDK modules with their dependencies, version
//! constraints and publishing metadata.
//!
//! # Architecture
//!
//! ```text
//! checkout/**/pom.xml
//!        |
//!        v
//!   Importer::discover    (walker + classifier, pure read)
//!        |
//!        v
//!     ImportPlan          (immutable list of DiscoveredModule)
//!        |
//!        v
//!   Configurator::apply   (one module at a time)
//!        |
//!        v
//!    dyn BuildGraph       (InMemoryBuildGraph -> JSON / Kotlin DSL)
//! ```

pub mod classify;
pub mod config;
pub mod configure;
pub mod error;
pub mod graph;
pub mod plan;
pub mod render;
pub mod walker;

use std::path::Path;

pub use classify::Classifier;
pub use config::ImporterConfig;
pub use configure::{ApplySummary, Configurator};
pub use error::{ImportError, ImportResult};
pub use graph::{BuildGraph, InMemoryBuildGraph, ModuleBuild};
pub use plan::{DiscoveredModule, ImportPlan};
pub use walker::Importer;

/// Discover `checkout` and apply every module to a fresh in-memory graph.
pub fn import(checkout: &Path, config: &ImporterConfig) -> ImportResult<InMemoryBuildGraph> {
    let plan = Importer::new(config.clone()).discover(checkout)?;
    let mut graph = InMemoryBuildGraph::new();
    Configurator::new(config).apply_all(&plan, &mut graph)?;
    Ok(graph)
}
