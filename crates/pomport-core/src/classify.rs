//! Dependency classification.
//!
//! Turns raw `<dependency>` entries into [`Dependency`] records. The
//! heuristic is deliberately simple: an entry is a project reference when its
//! group id is the SDK group and its artifact id starts with the SDK artifact
//! prefix. Everything else is an external library whose version may be a
//! single-level `${...}` property placeholder.

use pomport_model::{Coordinates, Dependency, PropertyMap, RawDependency, Scope};
use tracing::{debug, warn};

use crate::config::ImporterConfig;

/// Classifies raw dependency entries against the configured SDK identifiers.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    config: &'a ImporterConfig,
}

impl<'a> Classifier<'a> {
    /// Create a classifier.
    #[must_use]
    pub fn new(config: &'a ImporterConfig) -> Self {
        Self { config }
    }

    /// Classify every entry, skipping those without a group or artifact id.
    #[must_use]
    pub fn classify(&self, entries: &[RawDependency], properties: &PropertyMap) -> Vec<Dependency> {
        entries
            .iter()
            .filter_map(|entry| self.classify_one(entry, properties))
            .collect()
    }

    /// Classify a single entry.
    #[must_use]
    pub fn classify_one(
        &self,
        entry: &RawDependency,
        properties: &PropertyMap,
    ) -> Option<Dependency> {
        let (Some(group), Some(artifact)) = (entry.group_id.as_deref(), entry.artifact_id.as_deref())
        else {
            debug!(?entry, "skipping dependency without group or artifact id");
            return None;
        };
        let scope = Scope::parse(entry.scope.as_deref());

        if group == self.config.sdk_group_id && artifact.starts_with(&self.config.artifact_prefix) {
            return Some(Dependency::Project {
                path: self.project_path(artifact),
                scope,
            });
        }

        let version = resolve_version(entry.version.as_deref().unwrap_or(""), properties);
        if version.is_none() {
            warn!(
                group,
                artifact,
                raw = ?entry.version,
                "unresolved version placeholder, dependency will carry no version"
            );
        }

        Some(Dependency::External {
            coordinates: Coordinates::new(group, artifact, version),
            scope,
        })
    }

    /// Project path for an upstream SDK artifact id.
    #[must_use]
    pub fn project_path(&self, artifact_id: &str) -> String {
        format!(":{}", self.config.module_name(artifact_id))
    }
}

/// Resolve raw version text.
///
/// Text wrapped in `${...}` is looked up in `properties`; a missing property
/// yields `None`. The looked-up value is used as is, never expanded again.
/// Any other text is returned verbatim.
#[must_use]
pub fn resolve_version(raw: &str, properties: &PropertyMap) -> Option<String> {
    match placeholder_name(raw) {
        Some(name) => properties.lookup(name).map(ToOwned::to_owned),
        None => Some(raw.to_owned()),
    }
}

/// The property name inside a `${...}` placeholder.
fn placeholder_name(raw: &str) -> Option<&str> {
    raw.strip_prefix("${")?.strip_suffix('}')
}
