//! Error types for sqlhint

use thiserror::Error;

/// Result type alias for sqlhint operations
pub type HintResult<T> = Result<T, HintError>;

/// Errors returned by the checked [`Metadata`](crate::Metadata) mutators.
///
/// The codec operations themselves (`wrap_sql`, `parse_metadata`,
/// `strip_metadata`) never fail; only validated metadata construction does.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HintError {
    /// Key is empty after trimming
    #[error("Metadata key cannot be empty")]
    EmptyKey,

    /// A key or value contains a character reserved by the comment grammar
    #[error("Metadata {field} cannot contain {ch:?}")]
    ReservedChar {
        /// Which side of the entry was rejected: `"key"` or `"value"`.
        field: &'static str,
        /// The offending character (`;`, `=`, or `*`).
        ch: char,
    },
}
