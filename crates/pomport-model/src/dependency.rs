//! Classified dependencies and the scope → visibility mapping.
//!
//! Maven declares a `<scope>` on each dependency. The importer maps it to one
//! of a closed set of build-visibility tags ([`Visibility`]) through
//! [`Scope::visibility`], a pure total function. Scopes without a tag (for
//! example `system` or `import`) map to `None` and are never wired.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A declared Maven dependency scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Scope {
    /// `compile`, an empty `<scope/>` or no scope at all.
    #[default]
    Compile,
    /// `runtime`.
    Runtime,
    /// `provided`.
    Provided,
    /// `test`.
    Test,
    /// Any other scope text, kept verbatim.
    Other(String),
}

impl Scope {
    /// Parse optional scope text as found in a descriptor.
    #[must_use]
    pub fn parse(text: Option<&str>) -> Self {
        match text {
            None | Some("" | "compile") => Self::Compile,
            Some("runtime") => Self::Runtime,
            Some("provided") => Self::Provided,
            Some("test") => Self::Test,
            Some(other) => Self::Other(other.to_owned()),
        }
    }

    /// Returns the string value of this scope.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Compile => "compile",
            Self::Runtime => "runtime",
            Self::Provided => "provided",
            Self::Test => "test",
            Self::Other(s) => s,
        }
    }

    /// Build visibility this scope is wired under, or `None` when unmapped.
    #[must_use]
    pub fn visibility(&self) -> Option<Visibility> {
        match self {
            Self::Compile => Some(Visibility::Api),
            Self::Runtime => Some(Visibility::RuntimeOnly),
            Self::Provided => Some(Visibility::CompileOnly),
            Self::Test => Some(Visibility::TestOnly),
            Self::Other(_) => None,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Scope {
    fn from(s: String) -> Self {
        Self::parse(Some(&s))
    }
}

impl From<Scope> for String {
    fn from(scope: Scope) -> Self {
        scope.as_str().to_owned()
    }
}

/// Build-visibility tag a dependency is declared under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Visibility {
    /// Exposed to consumers at compile time.
    #[serde(rename = "api")]
    Api,
    /// Only on the runtime classpath.
    #[serde(rename = "runtimeOnly")]
    RuntimeOnly,
    /// Only on the compile classpath, not exported.
    #[serde(rename = "compileOnly")]
    CompileOnly,
    /// Only for tests.
    #[serde(rename = "testImplementation")]
    TestOnly,
}

impl Visibility {
    /// Name of the build configuration this tag corresponds to.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::RuntimeOnly => "runtimeOnly",
            Self::CompileOnly => "compileOnly",
            Self::TestOnly => "testImplementation",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maven coordinates of an external module.
///
/// A missing version is representable: it happens when a `${...}` placeholder
/// cannot be resolved. Such coordinates are still wired, without a version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinates {
    /// Group id.
    pub group: String,
    /// Artifact id.
    pub artifact: String,
    /// Resolved version, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Coordinates {
    /// Create coordinates.
    #[must_use]
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: Option<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version,
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.version.as_deref() {
            Some(v) if !v.is_empty() => write!(f, "{}:{}:{v}", self.group, self.artifact),
            _ => write!(f, "{}:{}", self.group, self.artifact),
        }
    }
}

/// A group/module pair excluded from a dependency's transitive graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Exclusion {
    /// Excluded group.
    pub group: String,
    /// Excluded module within the group.
    pub module: String,
}

impl Exclusion {
    /// Create an exclusion.
    #[must_use]
    pub fn new(group: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            module: module.into(),
        }
    }
}

/// A classified dependency entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Dependency {
    /// A module that is itself imported from the same checkout.
    Project {
        /// Normalized module path, e.g. `:oraclecloud-bmc-common`.
        path: String,
        /// Declared scope.
        scope: Scope,
    },
    /// A third-party library.
    External {
        /// Coordinates with the placeholder-resolved version.
        coordinates: Coordinates,
        /// Declared scope.
        scope: Scope,
    },
}

impl Dependency {
    /// Declared scope.
    #[must_use]
    pub fn scope(&self) -> &Scope {
        match self {
            Self::Project { scope, .. } | Self::External { scope, .. } => scope,
        }
    }

    /// Build visibility this dependency is wired under, `None` if unmapped.
    #[must_use]
    pub fn visibility(&self) -> Option<Visibility> {
        self.scope().visibility()
    }
}
