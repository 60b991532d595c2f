//! Descriptor deserialization: parsing `pom.xml` into typed records.
//!
//! This module provides the [`FromPomXml`] trait and implementations for every
//! record the importer needs. Each implementation reads the children of one
//! element and skips anything it does not recognise, so nested blocks such as
//! `<build>` or `<profiles>` never leak dependencies into the result.

use std::path::Path;

use pomport_model::{ModuleDescriptor, ParentRef, PropertyMap, RawDependency};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::XmlError;

/// Trait for reading a descriptor record from XML.
pub trait FromPomXml: Sized {
    /// Read an instance from the given XML reader.
    ///
    /// The reader is positioned just after the opening tag of this element.
    /// The implementation reads all child content and returns once the
    /// matching end tag is consumed.
    ///
    /// # Errors
    ///
    /// Returns `XmlError` if the XML is malformed.
    fn read_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError>;

    /// Value for the self-closing form of this element (`<parent/>`).
    fn empty() -> Self;
}

/// Parse a complete descriptor.
///
/// # Errors
///
/// Returns `XmlError` if the document is malformed or has no root element.
pub fn parse_descriptor(xml: &[u8]) -> Result<ModuleDescriptor, XmlError> {
    let mut reader = Reader::from_reader(xml);

    loop {
        match reader.read_event()? {
            Event::Start(_) => return ModuleDescriptor::read_xml(&mut reader),
            Event::Empty(_) => return Ok(ModuleDescriptor::empty()),
            Event::Eof => {
                return Err(XmlError::MissingElement("root element".to_owned()));
            }
            // Declaration, comments, processing instructions, whitespace.
            _ => {}
        }
    }
}

/// Read and parse a descriptor file.
///
/// # Errors
///
/// Returns `XmlError::Io` if the file cannot be read, or any parse error.
pub fn read_descriptor(path: &Path) -> Result<ModuleDescriptor, XmlError> {
    let bytes = std::fs::read(path)?;
    let descriptor = parse_descriptor(&bytes)?;
    tracing::trace!(
        path = %path.display(),
        artifact_id = ?descriptor.artifact_id,
        "parsed descriptor"
    );
    Ok(descriptor)
}

/// Extract only the `<properties>` block of a descriptor.
///
/// A descriptor without `<properties>` yields an empty map.
///
/// # Errors
///
/// Returns `XmlError` if the document is malformed.
pub fn parse_properties(xml: &[u8]) -> Result<PropertyMap, XmlError> {
    parse_descriptor(xml).map(|d| d.properties)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn local_name(start: &BytesStart<'_>) -> Result<String, XmlError> {
    let name = start.local_name();
    std::str::from_utf8(name.as_ref())
        .map(ToOwned::to_owned)
        .map_err(|e| XmlError::ParseError(e.to_string()))
}

/// Read the text content of the current element, including the text of any
/// nested elements, and consume its end tag. The result is trimmed.
fn read_text_content(reader: &mut Reader<&[u8]>) -> Result<String, XmlError> {
    let mut text = String::new();
    let mut depth: u32 = 1;
    loop {
        match reader.read_event()? {
            Event::Text(e) => {
                let decoded = e
                    .decode()
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                let unescaped = quick_xml::escape::unescape(&decoded)
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                text.push_str(&unescaped);
            }
            Event::CData(e) => {
                let raw = std::str::from_utf8(&e)
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                text.push_str(raw);
            }
            Event::GeneralRef(e) => {
                if let Some(ch) = e
                    .resolve_char_ref()
                    .map_err(|err| XmlError::ParseError(err.to_string()))?
                {
                    text.push(ch);
                } else {
                    let name = e
                        .decode()
                        .map_err(|err| XmlError::ParseError(err.to_string()))?;
                    match quick_xml::escape::resolve_predefined_entity(&name) {
                        Some(resolved) => text.push_str(resolved),
                        None => {
                            text.push('&');
                            text.push_str(&name);
                            text.push(';');
                        }
                    }
                }
            }
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    return Ok(text.trim().to_owned());
                }
            }
            Event::Eof => {
                return Err(XmlError::UnexpectedEof(
                    "while reading text content".to_owned(),
                ));
            }
            _ => {}
        }
    }
}

/// Skip over an element and all its children.
fn skip_element(reader: &mut Reader<&[u8]>) -> Result<(), XmlError> {
    let mut depth: u32 = 1;
    loop {
        match reader.read_event()? {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    return Ok(());
                }
            }
            Event::Eof => {
                return Err(XmlError::UnexpectedEof("while skipping element".to_owned()));
            }
            _ => {}
        }
    }
}

/// Store `value` unless the slot already holds an earlier occurrence.
fn keep_first<T>(slot: &mut Option<T>, value: T) {
    if slot.is_none() {
        *slot = Some(value);
    }
}

/// Read the children of a `<dependencies>` element.
fn read_dependency_list(reader: &mut Reader<&[u8]>) -> Result<Vec<RawDependency>, XmlError> {
    let mut dependencies = Vec::new();
    loop {
        match reader.read_event()? {
            Event::Start(e) => match local_name(&e)?.as_str() {
                "dependency" => dependencies.push(RawDependency::read_xml(reader)?),
                _ => skip_element(reader)?,
            },
            Event::Empty(e) => {
                if local_name(&e)? == "dependency" {
                    dependencies.push(RawDependency::empty());
                }
            }
            Event::End(_) => return Ok(dependencies),
            Event::Eof => {
                return Err(XmlError::UnexpectedEof("in dependencies".to_owned()));
            }
            _ => {}
        }
    }
}

/// Read `<dependencyManagement>` and return its `<dependencies>` entries.
fn read_dependency_management(
    reader: &mut Reader<&[u8]>,
) -> Result<Vec<RawDependency>, XmlError> {
    let mut dependencies: Option<Vec<RawDependency>> = None;
    loop {
        match reader.read_event()? {
            Event::Start(e) => match local_name(&e)?.as_str() {
                "dependencies" if dependencies.is_none() => {
                    dependencies = Some(read_dependency_list(reader)?);
                }
                _ => skip_element(reader)?,
            },
            Event::End(_) => return Ok(dependencies.unwrap_or_default()),
            Event::Eof => {
                return Err(XmlError::UnexpectedEof(
                    "in dependencyManagement".to_owned(),
                ));
            }
            _ => {}
        }
    }
}

/// Read `<modules>` and return the `<module>` entries.
fn read_modules(reader: &mut Reader<&[u8]>) -> Result<Vec<String>, XmlError> {
    let mut modules = Vec::new();
    loop {
        match reader.read_event()? {
            Event::Start(e) => match local_name(&e)?.as_str() {
                "module" => modules.push(read_text_content(reader)?),
                _ => skip_element(reader)?,
            },
            Event::End(_) => return Ok(modules),
            Event::Eof => return Err(XmlError::UnexpectedEof("in modules".to_owned())),
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// FromPomXml implementations
// ---------------------------------------------------------------------------

impl FromPomXml for PropertyMap {
    fn read_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut properties = PropertyMap::new();
        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    let name = local_name(&e)?;
                    let value = read_text_content(reader)?;
                    properties.insert(name, value);
                }
                Event::Empty(e) => properties.insert(local_name(&e)?, ""),
                Event::End(_) => return Ok(properties),
                Event::Eof => {
                    return Err(XmlError::UnexpectedEof("in properties".to_owned()));
                }
                _ => {}
            }
        }
    }

    fn empty() -> Self {
        PropertyMap::new()
    }
}

impl FromPomXml for RawDependency {
    fn read_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut dep = RawDependency::default();
        loop {
            match reader.read_event()? {
                Event::Start(e) => match local_name(&e)?.as_str() {
                    "groupId" => keep_first(&mut dep.group_id, read_text_content(reader)?),
                    "artifactId" => {
                        keep_first(&mut dep.artifact_id, read_text_content(reader)?);
                    }
                    "version" => keep_first(&mut dep.version, read_text_content(reader)?),
                    "scope" => keep_first(&mut dep.scope, read_text_content(reader)?),
                    _ => skip_element(reader)?,
                },
                Event::Empty(e) => match local_name(&e)?.as_str() {
                    "groupId" => keep_first(&mut dep.group_id, String::new()),
                    "artifactId" => keep_first(&mut dep.artifact_id, String::new()),
                    "version" => keep_first(&mut dep.version, String::new()),
                    "scope" => keep_first(&mut dep.scope, String::new()),
                    _ => {}
                },
                Event::End(_) => return Ok(dep),
                Event::Eof => {
                    return Err(XmlError::UnexpectedEof("in dependency".to_owned()));
                }
                _ => {}
            }
        }
    }

    fn empty() -> Self {
        RawDependency::default()
    }
}

impl FromPomXml for ParentRef {
    fn read_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut parent = ParentRef::default();
        loop {
            match reader.read_event()? {
                Event::Start(e) => match local_name(&e)?.as_str() {
                    "groupId" => keep_first(&mut parent.group_id, read_text_content(reader)?),
                    "artifactId" => {
                        keep_first(&mut parent.artifact_id, read_text_content(reader)?);
                    }
                    "version" => keep_first(&mut parent.version, read_text_content(reader)?),
                    _ => skip_element(reader)?,
                },
                Event::End(_) => return Ok(parent),
                Event::Eof => return Err(XmlError::UnexpectedEof("in parent".to_owned())),
                _ => {}
            }
        }
    }

    fn empty() -> Self {
        ParentRef::default()
    }
}

impl FromPomXml for ModuleDescriptor {
    fn read_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut d = ModuleDescriptor::default();
        let mut seen_properties = false;
        let mut seen_dependencies = false;
        let mut seen_management = false;

        loop {
            match reader.read_event()? {
                Event::Start(e) => match local_name(&e)?.as_str() {
                    "groupId" => keep_first(&mut d.group_id, read_text_content(reader)?),
                    "artifactId" => keep_first(&mut d.artifact_id, read_text_content(reader)?),
                    "version" => keep_first(&mut d.version, read_text_content(reader)?),
                    "packaging" => keep_first(&mut d.packaging, read_text_content(reader)?),
                    "modules" if d.modules.is_none() => d.modules = Some(read_modules(reader)?),
                    "parent" if d.parent.is_none() => d.parent = Some(ParentRef::read_xml(reader)?),
                    "properties" if !seen_properties => {
                        seen_properties = true;
                        d.properties = PropertyMap::read_xml(reader)?;
                    }
                    "dependencies" if !seen_dependencies => {
                        seen_dependencies = true;
                        d.dependencies = read_dependency_list(reader)?;
                    }
                    "dependencyManagement" if !seen_management => {
                        seen_management = true;
                        d.dependency_management = read_dependency_management(reader)?;
                    }
                    _ => skip_element(reader)?,
                },
                Event::Empty(e) => match local_name(&e)?.as_str() {
                    "groupId" => keep_first(&mut d.group_id, String::new()),
                    "artifactId" => keep_first(&mut d.artifact_id, String::new()),
                    "version" => keep_first(&mut d.version, String::new()),
                    "packaging" => keep_first(&mut d.packaging, String::new()),
                    "modules" => keep_first(&mut d.modules, Vec::new()),
                    "parent" => keep_first(&mut d.parent, ParentRef::empty()),
                    _ => {}
                },
                Event::End(_) => return Ok(d),
                Event::Eof => {
                    return Err(XmlError::UnexpectedEof("in project".to_owned()));
                }
                _ => {}
            }
        }
    }

    fn empty() -> Self {
        ModuleDescriptor::default()
    }
}
