//! Error types for rx-sexp

use rx_algebra::{Field, NodeKind};
use thiserror::Error;

/// Generator and registry errors
///
/// A `MissingField` means a rule names a slot the node does not have: the
/// tree or the table is malformed. It is returned as soon as it is found and
/// no partial output is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SexpError {
    /// SX001: Rule reads a field the node does not provide
    #[error("[SX001] Node of kind '{kind}' has no '{field}' field")]
    MissingField { kind: NodeKind, field: Field },

    /// SX002: Two rules registered for the same node kind
    #[error("[SX002] Duplicate rule for node kind '{kind}'")]
    DuplicateRule { kind: NodeKind },
}

/// Result type alias for SexpError
pub type SexpResult<T> = Result<T, SexpError>;
