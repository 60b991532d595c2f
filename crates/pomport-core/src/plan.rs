//! Discovery output.
//!
//! An [`ImportPlan`] is the immutable result of walking a checkout. It holds
//! everything the apply phase needs, so applying a module never touches the
//! file system.

use std::path::PathBuf;

use pomport_model::{Coordinates, Dependency, PropertyMap};
use serde::{Deserialize, Serialize};

/// A leaf descriptor that qualified for registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveredModule {
    /// Derived local module name, without the leading `:`.
    pub name: String,
    /// Directory holding the module's descriptor.
    pub directory: PathBuf,
    /// Own properties laid over all ancestor properties.
    pub properties: PropertyMap,
    /// Classified `<dependencies>`.
    pub dependencies: Vec<Dependency>,
    /// Classified `<dependencyManagement><dependencies>`.
    pub constraints: Vec<Dependency>,
    /// Whether the module has a protobuf source directory.
    pub has_protobuf: bool,
    /// Upstream module: parent group, own artifact id, parent version.
    pub reference: Coordinates,
}

impl DiscoveredModule {
    /// Project path of this module, e.g. `:oraclecloud-bmc-common`.
    #[must_use]
    pub fn path(&self) -> String {
        format!(":{}", self.name)
    }
}

/// Result of the discovery phase over one checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportPlan {
    /// Checkout root that was scanned.
    pub checkout: PathBuf,
    /// Properties of the root descriptor.
    pub root_properties: PropertyMap,
    /// Classified `<dependencyManagement>` of the root descriptor.
    pub root_constraints: Vec<Dependency>,
    /// Registered modules, in discovery order.
    pub modules: Vec<DiscoveredModule>,
}

impl ImportPlan {
    /// Find a module by name.
    #[must_use]
    pub fn module(&self, name: &str) -> Option<&DiscoveredModule> {
        self.modules.iter().find(|m| m.name == name)
    }

    /// Names of all registered modules.
    pub fn module_names(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().map(|m| m.name.as_str())
    }
}
