//! The build graph the importer writes into.
//!
//! [`BuildGraph`] is the boundary between the importer and the host build
//! system: the configurator only ever talks to this trait. The
//! [`InMemoryBuildGraph`] implementation records every call so the result can
//! be inspected, serialized or rendered into build scripts.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use pomport_model::{Coordinates, Exclusion, Visibility};
use serde::{Deserialize, Serialize};

use crate::error::{ImportError, ImportResult};

/// Host build system operations used by the importer.
///
/// Module names are passed without the leading `:`.
pub trait BuildGraph {
    /// Register a module and bind it to its source directory.
    fn include(&mut self, module: &str, directory: &Path) -> ImportResult<()>;

    /// Set an extra property on a module.
    fn set_property(&mut self, module: &str, key: &str, value: &str) -> ImportResult<()>;

    /// Apply a plugin to a module. Applying the same plugin twice is a no-op.
    fn apply_plugin(&mut self, module: &str, plugin: &str) -> ImportResult<()>;

    /// Declare a dependency on another module of the same build.
    fn add_project_dependency(
        &mut self,
        module: &str,
        visibility: Visibility,
        path: &str,
    ) -> ImportResult<()>;

    /// Declare a dependency on an external library.
    fn add_external_dependency(
        &mut self,
        module: &str,
        visibility: Visibility,
        coordinates: &Coordinates,
    ) -> ImportResult<()>;

    /// Force an exact version of an external library without adding an edge.
    fn add_strict_constraint(
        &mut self,
        module: &str,
        visibility: Visibility,
        coordinates: &Coordinates,
    ) -> ImportResult<()>;

    /// Attach a dependency directly to a named configuration.
    fn add_configuration_dependency(
        &mut self,
        module: &str,
        configuration: &str,
        coordinates: &Coordinates,
        exclusions: &[Exclusion],
    ) -> ImportResult<()>;
}

/// Target of a declared dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DependencyTarget {
    /// Another module, by path.
    Project {
        /// Module path, e.g. `:oraclecloud-bmc-common`.
        path: String,
    },
    /// An external library.
    External {
        /// Library coordinates.
        coordinates: Coordinates,
    },
}

/// A dependency wired under a visibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredDependency {
    /// Configuration the dependency is declared in.
    pub visibility: Visibility,
    /// What the dependency points at.
    pub target: DependencyTarget,
}

/// A strict version constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredConstraint {
    /// Configuration the constraint is declared in.
    pub visibility: Visibility,
    /// Constrained library and its forced version.
    pub coordinates: Coordinates,
}

/// A dependency attached to a named configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationDependency {
    /// Configuration name.
    pub configuration: String,
    /// Library coordinates.
    pub coordinates: Coordinates,
    /// Transitive modules excluded from it.
    pub exclusions: Vec<Exclusion>,
}

/// Everything recorded for one module.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleBuild {
    /// Source directory.
    pub directory: PathBuf,
    /// Extra properties.
    pub properties: BTreeMap<String, String>,
    /// Applied plugins, in application order.
    pub plugins: Vec<String>,
    /// Declared dependencies, in declaration order.
    pub dependencies: Vec<DeclaredDependency>,
    /// Strict constraints, in declaration order.
    pub constraints: Vec<DeclaredConstraint>,
    /// Dependencies attached to named configurations.
    pub configuration_dependencies: Vec<ConfigurationDependency>,
}

/// A [`BuildGraph`] that records every call.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InMemoryBuildGraph {
    modules: BTreeMap<String, ModuleBuild>,
}

impl InMemoryBuildGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded state of a module.
    #[must_use]
    pub fn module(&self, name: &str) -> Option<&ModuleBuild> {
        self.modules.get(name)
    }

    /// All modules, by name.
    #[must_use]
    pub fn modules(&self) -> &BTreeMap<String, ModuleBuild> {
        &self.modules
    }

    /// Number of included modules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Whether no module has been included.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    fn module_mut(&mut self, module: &str) -> ImportResult<&mut ModuleBuild> {
        self.modules
            .get_mut(module)
            .ok_or_else(|| ImportError::UnknownModule {
                name: module.to_owned(),
            })
    }
}

impl BuildGraph for InMemoryBuildGraph {
    fn include(&mut self, module: &str, directory: &Path) -> ImportResult<()> {
        self.modules.entry(module.to_owned()).or_default().directory = directory.to_path_buf();
        Ok(())
    }

    fn set_property(&mut self, module: &str, key: &str, value: &str) -> ImportResult<()> {
        self.module_mut(module)?
            .properties
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn apply_plugin(&mut self, module: &str, plugin: &str) -> ImportResult<()> {
        let build = self.module_mut(module)?;
        if !build.plugins.iter().any(|p| p == plugin) {
            build.plugins.push(plugin.to_owned());
        }
        Ok(())
    }

    fn add_project_dependency(
        &mut self,
        module: &str,
        visibility: Visibility,
        path: &str,
    ) -> ImportResult<()> {
        self.module_mut(module)?.dependencies.push(DeclaredDependency {
            visibility,
            target: DependencyTarget::Project {
                path: path.to_owned(),
            },
        });
        Ok(())
    }

    fn add_external_dependency(
        &mut self,
        module: &str,
        visibility: Visibility,
        coordinates: &Coordinates,
    ) -> ImportResult<()> {
        self.module_mut(module)?.dependencies.push(DeclaredDependency {
            visibility,
            target: DependencyTarget::External {
                coordinates: coordinates.clone(),
            },
        });
        Ok(())
    }

    fn add_strict_constraint(
        &mut self,
        module: &str,
        visibility: Visibility,
        coordinates: &Coordinates,
    ) -> ImportResult<()> {
        self.module_mut(module)?.constraints.push(DeclaredConstraint {
            visibility,
            coordinates: coordinates.clone(),
        });
        Ok(())
    }

    fn add_configuration_dependency(
        &mut self,
        module: &str,
        configuration: &str,
        coordinates: &Coordinates,
        exclusions: &[Exclusion],
    ) -> ImportResult<()> {
        self.module_mut(module)?
            .configuration_dependencies
            .push(ConfigurationDependency {
                configuration: configuration.to_owned(),
                coordinates: coordinates.clone(),
                exclusions: exclusions.to_vec(),
            });
        Ok(())
    }
}
