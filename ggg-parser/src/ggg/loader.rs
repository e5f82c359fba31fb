//! Document loading utilities
//!
//! `DocumentLoader` reads a GGG file (a YAML container) from disk or from a
//! string and turns it into the typed [`Document`] model in three steps:
//! YAML parse, schema shape check, typed decode. Each step has its own
//! entry point so callers (the CLI's verbose mode in particular) can run
//! and report them separately.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::ggg::ast::document::Document;
use crate::ggg::ast::error::StructureError;
use crate::ggg::schema;

/// Error that can occur when loading documents
#[derive(Debug)]
pub enum LoaderError {
    /// IO error when reading file
    Io(String),
    /// The container is not valid YAML
    Yaml(serde_yaml::Error),
    /// The YAML shape or field types do not match the document schema
    Structure(StructureError),
}

impl std::fmt::Display for LoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoaderError::Io(msg) => write!(f, "IO error: {}", msg),
            LoaderError::Yaml(err) => write!(f, "Invalid YAML: {}", err),
            LoaderError::Structure(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for LoaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoaderError::Io(_) => None,
            LoaderError::Yaml(err) => Some(err),
            LoaderError::Structure(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for LoaderError {
    fn from(err: std::io::Error) -> Self {
        LoaderError::Io(err.to_string())
    }
}

impl From<serde_yaml::Error> for LoaderError {
    fn from(err: serde_yaml::Error) -> Self {
        LoaderError::Yaml(err)
    }
}

impl From<StructureError> for LoaderError {
    fn from(err: StructureError) -> Self {
        LoaderError::Structure(err)
    }
}

/// Shape-check a parsed YAML value and decode it into the typed model.
///
/// The shape check rejects unknown keys and mistyped values with their
/// path; the decode step catches what the shape check deliberately leaves
/// alone (missing fields), also with a path.
pub fn decode_document(value: serde_yaml::Value) -> Result<Document, LoaderError> {
    schema::check_document(&value)?;
    let doc: Document = serde_path_to_error::deserialize(value).map_err(
        |err: serde_path_to_error::Error<serde_yaml::Error>| {
            StructureError::Decode {
                path: err.path().to_string(),
                message: err.into_inner().to_string(),
            }
        },
    )?;
    debug!(segs = doc.segs.len(), "loaded document");
    Ok(doc)
}

/// Loads GGG documents from files or strings.
pub struct DocumentLoader {
    source: String,
}

impl DocumentLoader {
    /// Load from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let source = fs::read_to_string(path)?;
        Ok(DocumentLoader { source })
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        DocumentLoader {
            source: source.into(),
        }
    }

    /// Parse the raw YAML container, without shape checking.
    pub fn value(&self) -> Result<serde_yaml::Value, LoaderError> {
        Ok(serde_yaml::from_str(&self.source)?)
    }

    /// Parse, shape-check, and decode the typed document.
    pub fn document(&self) -> Result<Document, LoaderError> {
        decode_document(self.value()?)
    }

    /// Get the raw source string
    pub fn source(&self) -> &str {
        &self.source
    }
}
