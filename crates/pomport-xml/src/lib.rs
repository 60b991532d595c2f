//! Project descriptor parsing for `pomport`.
//!
//! This crate turns a Maven `pom.xml` into a typed
//! [`ModuleDescriptor`](pomport_model::ModuleDescriptor) in a single streaming
//! pass. Downstream code queries the typed record and never looks at raw XML.
//!
//! # Key components
//!
//! - [`parse_descriptor`] / [`read_descriptor`] for a whole descriptor
//! - [`parse_properties`] for just the `<properties>` block
//! - [`XmlError`] for malformed or unreadable input
//!
//! # Conventions
//!
//! - Only direct children of the root element are interpreted
//! - Element names are matched on their local name, namespace prefixes are ignored
//! - Text content is entity-decoded and trimmed

pub mod deserialize;
pub mod error;

pub use deserialize::{parse_descriptor, parse_properties, read_descriptor};
pub use error::XmlError;
