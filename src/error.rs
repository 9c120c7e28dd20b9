//! Error taxonomy.
//!
//! The algebra itself is total: compose, transform, push and trim accept
//! any well-formed deltas. Only application, the document views (lines,
//! diff) and the wire codec can fail.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeltaError {
    /// The delta consumes more content than the document holds.
    #[error("length of delta is longer than length of document")]
    LengthMismatch,
    /// A retain or delete appeared where a pure-insert document was
    /// expected.
    #[error("delta is not a document")]
    BadDocument,
    /// The wire form could not be decoded.
    #[error("INVALID_OP: {0}")]
    InvalidOp(String),
}
