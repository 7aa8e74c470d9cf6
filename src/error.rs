//! Error taxonomy for the extraction pipeline.

use thiserror::Error;

/// Errors that abort a viewer run before the GUI is shown.
///
/// There is no partial-success mode: a packet with a missing timestamp or a
/// malformed signal value fails the whole extraction, never just that packet.
#[derive(Debug, Error)]
pub enum ViewerError {
    /// The export file could not be read.
    #[error("failed to read export file: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed markup, or an expected node/field/attribute is missing.
    #[error("malformed PDML: {0}")]
    Parse(String),

    /// A signal's bracketed value is neither numeric nor a boolean token.
    #[error("invalid signal value: {0}")]
    Value(String),
}
