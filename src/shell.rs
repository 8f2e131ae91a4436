//! File-I/O shell around the parse and export cores.
//!
//! This is the only module that touches the filesystem; the parser and
//! exporters work purely on in-memory data. Whatever presentation layer
//! drives the crate calls [`on_open`] and [`on_save`] and owns the contact
//! sequence in between.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::export::{ExportError, FormatRegistry};
use crate::parser::{Contact, ParseError, VcfParser};

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Read and parse a contact file.
///
/// The returned sequence is owned by the caller; nothing is cached between
/// calls.
pub fn on_open(path: &Path, parser: &VcfParser) -> Result<Vec<Contact>, ShellError> {
    let bytes = fs::read(path).map_err(|source| ShellError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parser.parse_bytes(&bytes)?)
}

/// Serialize contacts with the exporter registered for `tag` and write the
/// result to `path`. Nothing is written when serialization fails.
pub fn on_save(
    registry: &FormatRegistry,
    contacts: &[Contact],
    tag: &str,
    path: &Path,
) -> Result<(), ShellError> {
    let bytes = registry.export(contacts, tag)?;

    fs::write(path, bytes).map_err(|source| ShellError::Write {
        path: path.to_path_buf(),
        source,
    })
}
