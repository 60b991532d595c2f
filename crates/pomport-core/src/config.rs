//! Importer configuration.
//!
//! Provides [`ImporterConfig`], which carries the fixed upstream identifiers
//! the importer keys its heuristics on (SDK group id, artifact prefix, local
//! module prefix) together with the tooling and publishing settings applied
//! to every imported module. Values can be overridden from environment
//! variables.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use pomport_model::Exclusion;

/// Importer configuration.
///
/// Every field defaults to the value used for the OCI Java SDK checkout.
///
/// # Examples
///
/// ```
/// use pomport_core::config::ImporterConfig;
///
/// let config = ImporterConfig::default();
/// assert_eq!(config.sdk_group_id, "com.oracle.oci.sdk");
/// assert_eq!(config.module_name("oci-java-sdk-common"), "oraclecloud-bmc-common");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct ImporterConfig {
    /// Group id shared by every upstream SDK module.
    #[builder(default = String::from("com.oracle.oci.sdk"), setter(into))]
    pub sdk_group_id: String,

    /// Prefix of upstream artifact ids, stripped when deriving module names.
    #[builder(default = String::from("oci-java-sdk-"), setter(into))]
    pub artifact_prefix: String,

    /// Prefix of the local module names.
    #[builder(default = String::from("oraclecloud-bmc-"), setter(into))]
    pub module_prefix: String,

    /// Descriptor file looked up in every directory.
    #[builder(default = String::from("pom.xml"), setter(into))]
    pub descriptor_name: String,

    /// Modules whose name contains this substring are not registered.
    #[builder(default = String::from("examples"), setter(into))]
    pub excluded_substring: String,

    /// Modules whose name ends with this suffix are not registered.
    #[builder(default = String::from("-full"), setter(into))]
    pub excluded_suffix: String,

    /// Plugins applied to every imported module.
    #[builder(default = default_plugins())]
    pub plugins: Vec<String>,

    /// Plugin applied only when the module has a protobuf source directory.
    #[builder(default = String::from("io.micronaut.build.internal.ocisdk-metadata-protobuf"), setter(into))]
    pub protobuf_plugin: String,

    /// Protobuf source directory, relative to the module directory.
    #[builder(default = String::from("src/main/protobuf"), setter(into))]
    pub protobuf_dir: String,

    /// Extra property set on every module to mark it publishable.
    #[builder(default = String::from("micronautPublish"), setter(into))]
    pub publish_property: String,

    /// Configuration that receives the upstream module as a dependency.
    #[builder(default = String::from("metadataElements"), setter(into))]
    pub publishing_configuration: String,

    /// Transitive module excluded from the publishing dependency.
    #[builder(default = default_publishing_exclusion())]
    pub publishing_exclusion: Exclusion,

    /// Log level filter string (e.g. `"info"`, `"debug"`).
    #[builder(default = String::from("info"), setter(into))]
    pub log_level: String,

    /// Whether logs are emitted as JSON.
    #[builder(default = false)]
    pub log_json: bool,
}

fn default_plugins() -> Vec<String> {
    vec![
        "java-library".to_owned(),
        "io.micronaut.build.internal.ocisdk-metadata-module".to_owned(),
    ]
}

fn default_publishing_exclusion() -> Exclusion {
    Exclusion::new("com.fasterxml.jackson.core", "jackson-databind")
}

impl Default for ImporterConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ImporterConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `POMPORT_SDK_GROUP_ID` | `com.oracle.oci.sdk` |
    /// | `POMPORT_ARTIFACT_PREFIX` | `oci-java-sdk-` |
    /// | `POMPORT_MODULE_PREFIX` | `oraclecloud-bmc-` |
    /// | `POMPORT_DESCRIPTOR_NAME` | `pom.xml` |
    /// | `POMPORT_PUBLISHING_CONFIGURATION` | `metadataElements` |
    /// | `POMPORT_LOG_LEVEL` | `info` |
    /// | `POMPORT_LOG_FORMAT` | `text` (`json` for JSON logs) |
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("POMPORT_SDK_GROUP_ID") {
            config.sdk_group_id = v;
        }
        if let Ok(v) = std::env::var("POMPORT_ARTIFACT_PREFIX") {
            config.artifact_prefix = v;
        }
        if let Ok(v) = std::env::var("POMPORT_MODULE_PREFIX") {
            config.module_prefix = v;
        }
        if let Ok(v) = std::env::var("POMPORT_DESCRIPTOR_NAME") {
            config.descriptor_name = v;
        }
        if let Ok(v) = std::env::var("POMPORT_PUBLISHING_CONFIGURATION") {
            config.publishing_configuration = v;
        }
        if let Ok(v) = std::env::var("POMPORT_LOG_LEVEL") {
            config.log_level = v;
        }
        if let Ok(v) = std::env::var("POMPORT_LOG_FORMAT") {
            config.log_json = v.eq_ignore_ascii_case("json");
        }

        config
    }

    /// Local module name for an upstream artifact id.
    ///
    /// The part of `artifact_id` after the first occurrence of the artifact
    /// prefix is appended to the module prefix. An artifact id that does not
    /// contain the prefix is appended whole.
    #[must_use]
    pub fn module_name(&self, artifact_id: &str) -> String {
        format!(
            "{}{}",
            self.module_prefix,
            substring_after(artifact_id, &self.artifact_prefix)
        )
    }

    /// Whether a derived module name is filtered out of registration.
    #[must_use]
    pub fn is_excluded(&self, module_name: &str) -> bool {
        module_name.contains(&self.excluded_substring)
            || module_name.ends_with(&self.excluded_suffix)
    }
}

/// The part of `s` after the first occurrence of `delimiter`, or all of `s`
/// when the delimiter does not occur.
#[must_use]
pub fn substring_after<'a>(s: &'a str, delimiter: &str) -> &'a str {
    s.find(delimiter).map_or(s, |i| &s[i + delimiter.len()..])
}
