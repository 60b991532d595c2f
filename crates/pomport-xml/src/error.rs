//! Descriptor parsing error types.

use std::io;

/// Errors that can occur while reading or parsing a descriptor.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// The descriptor could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An error from the underlying quick-xml library.
    #[error("XML processing error: {0}")]
    QuickXml(#[from] quick_xml::Error),

    /// A required XML element was missing.
    #[error("missing required XML element: {0}")]
    MissingElement(String),

    /// The document ended inside an element.
    #[error("unexpected end of document: {0}")]
    UnexpectedEof(String),

    /// Text or a name could not be decoded.
    #[error("failed to decode value: {0}")]
    ParseError(String),
}
