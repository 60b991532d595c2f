//! Data model for `pomport`.
//!
//! This crate holds the types shared by the descriptor parser, the importer
//! and the renderer:
//!
//! - [`ModuleDescriptor`], the typed result of parsing one `pom.xml`
//! - [`PropertyMap`], a descriptor's `<properties>` with right-biased overlay
//! - [`Dependency`], a classified dependency entry, and the closed
//!   [`Scope`] → [`Visibility`] mapping used to wire it

pub mod dependency;
pub mod descriptor;
pub mod properties;

pub use dependency::{Coordinates, Dependency, Exclusion, Scope, Visibility};
pub use descriptor::{ModuleDescriptor, ParentRef, RawDependency};
pub use properties::PropertyMap;
