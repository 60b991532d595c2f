//! Typed descriptor records produced by the parser.

use serde::{Deserialize, Serialize};

use crate::properties::PropertyMap;

/// One `<dependency>` entry exactly as declared, before classification.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawDependency {
    /// `<groupId>` text.
    pub group_id: Option<String>,
    /// `<artifactId>` text.
    pub artifact_id: Option<String>,
    /// `<version>` text, possibly a `${...}` placeholder.
    pub version: Option<String>,
    /// `<scope>` text.
    pub scope: Option<String>,
}

/// A `<parent>` element declared directly under the document root.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParentRef {
    /// Parent group id.
    pub group_id: Option<String>,
    /// Parent artifact id.
    pub artifact_id: Option<String>,
    /// Parent version.
    pub version: Option<String>,
}

/// Parse result of one project descriptor.
///
/// Only elements that are direct children of the document root are
/// captured; dependencies declared inside `<build>` or `<profiles>` do not
/// show up here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    /// Own `<groupId>`.
    pub group_id: Option<String>,
    /// Own `<artifactId>`.
    pub artifact_id: Option<String>,
    /// Own `<version>`.
    pub version: Option<String>,
    /// Own `<packaging>`.
    pub packaging: Option<String>,
    /// `<modules>` entries; `Some` marks an aggregator, even when empty.
    pub modules: Option<Vec<String>>,
    /// Direct `<parent>` declaration.
    pub parent: Option<ParentRef>,
    /// `<properties>` block.
    pub properties: PropertyMap,
    /// `<dependencies>` block.
    pub dependencies: Vec<RawDependency>,
    /// `<dependencyManagement><dependencies>` block.
    pub dependency_management: Vec<RawDependency>,
}

impl ModuleDescriptor {
    /// Whether this descriptor lists sub-modules.
    #[must_use]
    pub fn is_aggregator(&self) -> bool {
        self.modules.is_some()
    }
}
