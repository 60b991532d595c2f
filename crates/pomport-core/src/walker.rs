//! Module tree walker: the discovery phase.
//!
//! [`Importer::discover`] reads the checkout's root descriptor, then walks
//! every subdirectory. Aggregator descriptors (those declaring `<modules>`)
//! are recursed into; leaf descriptors with a direct parent in the SDK group
//! are registered as [`DiscoveredModule`]s. Directories without a descriptor
//! contribute nothing.
//!
//! ```text
//! checkout/pom.xml            root: properties + constraints
//! checkout/bmc-common/pom.xml leaf   -> oraclecloud-bmc-common
//! checkout/bmc-addons/pom.xml aggregator
//!     bmc-addons/x/pom.xml    leaf   -> oraclecloud-bmc-addons-x
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use pomport_model::{Coordinates, ModuleDescriptor, PropertyMap};
use tracing::{debug, info, warn};

use crate::classify::Classifier;
use crate::config::ImporterConfig;
use crate::error::{ImportError, ImportResult};
use crate::plan::{DiscoveredModule, ImportPlan};

/// Entry point of the importer.
#[derive(Debug, Clone, Default)]
pub struct Importer {
    config: ImporterConfig,
}

impl Importer {
    /// Create an importer with the given configuration.
    #[must_use]
    pub fn new(config: ImporterConfig) -> Self {
        Self { config }
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &ImporterConfig {
        &self.config
    }

    /// Walk `checkout` and collect every module to register.
    ///
    /// # Errors
    ///
    /// Fails when the root descriptor is missing, when any descriptor cannot
    /// be parsed, or when a directory cannot be listed. Two descriptors that
    /// derive the same module name are not an error: the later one replaces
    /// the earlier entry.
    pub fn discover(&self, checkout: &Path) -> ImportResult<ImportPlan> {
        let root_path = checkout.join(&self.config.descriptor_name);
        if !root_path.is_file() {
            return Err(ImportError::MissingRootDescriptor { path: root_path });
        }

        let root = load_descriptor(&root_path)?;
        let classifier = Classifier::new(&self.config);
        let root_constraints = classifier.classify(&root.dependency_management, &root.properties);

        info!(
            checkout = %checkout.display(),
            properties = root.properties.len(),
            constraints = root_constraints.len(),
            "scanning checkout"
        );

        let mut walk = Walk {
            config: &self.config,
            classifier,
            modules: Vec::new(),
            seen: HashMap::new(),
        };
        for dir in subdirectories(checkout)? {
            walk.visit(&dir, &root.properties)?;
        }

        info!(modules = walk.modules.len(), "discovery complete");

        Ok(ImportPlan {
            checkout: checkout.to_path_buf(),
            root_properties: root.properties,
            root_constraints,
            modules: walk.modules,
        })
    }
}

/// State of one discovery run.
struct Walk<'a> {
    config: &'a ImporterConfig,
    classifier: Classifier<'a>,
    modules: Vec<DiscoveredModule>,
    /// Index into `modules` of every registered name.
    seen: HashMap<String, usize>,
}

impl Walk<'_> {
    fn visit(&mut self, dir: &Path, parent_properties: &PropertyMap) -> ImportResult<()> {
        let path = dir.join(&self.config.descriptor_name);
        if !path.is_file() {
            debug!(dir = %dir.display(), "no descriptor, skipping");
            return Ok(());
        }

        let descriptor = load_descriptor(&path)?;
        let properties = parent_properties.overlay(&descriptor.properties);

        if descriptor.is_aggregator() {
            debug!(dir = %dir.display(), "aggregator, descending");
            for sub in subdirectories(dir)? {
                self.visit(&sub, &properties)?;
            }
            return Ok(());
        }

        let Some(parent) = descriptor.parent.as_ref() else {
            debug!(dir = %dir.display(), "leaf without parent, skipping");
            return Ok(());
        };
        let Some(parent_group) = parent
            .group_id
            .as_deref()
            .filter(|group| *group == self.config.sdk_group_id)
        else {
            debug!(
                dir = %dir.display(),
                parent_group = ?parent.group_id,
                "parent outside the SDK group, skipping"
            );
            return Ok(());
        };
        let Some(artifact_id) = descriptor.artifact_id.as_deref() else {
            debug!(dir = %dir.display(), "leaf without artifact id, skipping");
            return Ok(());
        };

        let name = self.config.module_name(artifact_id);
        if self.config.is_excluded(&name) {
            debug!(module = %name, "excluded by name filter");
            return Ok(());
        }

        let reference = Coordinates::new(parent_group, artifact_id, parent.version.clone());
        let module = self.build_module(name, dir, &descriptor, properties, reference);
        info!(
            module = %module.name,
            dir = %dir.display(),
            dependencies = module.dependencies.len(),
            constraints = module.constraints.len(),
            "registered module"
        );
        match self.seen.get(&module.name) {
            Some(&index) => {
                warn!(
                    module = %module.name,
                    previous = %self.modules[index].directory.display(),
                    dir = %dir.display(),
                    "module name derived twice, later directory wins"
                );
                self.modules[index] = module;
            }
            None => {
                self.seen.insert(module.name.clone(), self.modules.len());
                self.modules.push(module);
            }
        }
        Ok(())
    }

    fn build_module(
        &self,
        name: String,
        dir: &Path,
        descriptor: &ModuleDescriptor,
        properties: PropertyMap,
        reference: Coordinates,
    ) -> DiscoveredModule {
        let dependencies = self.classifier.classify(&descriptor.dependencies, &properties);
        let constraints = self
            .classifier
            .classify(&descriptor.dependency_management, &properties);
        DiscoveredModule {
            name,
            directory: dir.to_path_buf(),
            has_protobuf: dir.join(&self.config.protobuf_dir).exists(),
            properties,
            dependencies,
            constraints,
            reference,
        }
    }
}

fn load_descriptor(path: &Path) -> ImportResult<ModuleDescriptor> {
    pomport_xml::read_descriptor(path).map_err(|source| ImportError::Descriptor {
        path: path.to_path_buf(),
        source,
    })
}

/// Immediate subdirectories of `dir`, sorted by name.
fn subdirectories(dir: &Path) -> ImportResult<Vec<PathBuf>> {
    let io_err = |source: std::io::Error| ImportError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}
