//! Importer error types.
//!
//! Every error here is fatal to an import run: the importer runs once while
//! configuring a build and a human has to fix the input.

use std::path::PathBuf;

use pomport_xml::XmlError;

/// Importer error type.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// The checkout directory has no top-level descriptor.
    #[error("root descriptor not found: {}", path.display())]
    MissingRootDescriptor {
        /// Expected descriptor path.
        path: PathBuf,
    },

    /// A descriptor exists but could not be read or parsed.
    #[error("failed to parse descriptor {}: {source}", path.display())]
    Descriptor {
        /// Descriptor path.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: XmlError,
    },

    /// A directory could not be listed.
    #[error("failed to list directory {}: {source}", path.display())]
    Io {
        /// Directory path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A module was configured before being included in the build graph.
    #[error("module {name} is not part of the build graph")]
    UnknownModule {
        /// Module name.
        name: String,
    },

    /// Build files could not be rendered.
    #[error("failed to render build files: {0}")]
    Render(#[from] std::fmt::Error),
}

/// Convenience result type for importer operations.
pub type ImportResult<T> = Result<T, ImportError>;
