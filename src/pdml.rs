//! PDML export loading.
//!
//! A PDML export is an XML document representing captured traffic as a tree
//! of `proto`/`field` elements whose human-readable content lives in
//! `showname` attributes. This module only reads and parses the file; the
//! actual signal extraction is in [`crate::extract`].

use std::path::Path;

use log::debug;

use crate::error::ViewerError;

/// Read the full text of a PDML export file.
pub fn read_export(path: &Path) -> Result<String, ViewerError> {
    debug!("reading PDML export from {}", path.display());
    Ok(std::fs::read_to_string(path)?)
}

/// Parse PDML text into a navigable document tree.
///
/// The returned document borrows `text`, so the caller keeps the text alive
/// for the duration of the extraction pass.
pub fn parse(text: &str) -> Result<roxmltree::Document<'_>, ViewerError> {
    roxmltree::Document::parse(text).map_err(|err| ViewerError::Parse(err.to_string()))
}
