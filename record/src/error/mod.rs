use thiserror::Error;

/// Result type alias for record operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading input documents or notifying about a record.
///
/// Field derivation itself never fails: malformed raw values degrade to
/// empty or default values instead.
#[derive(Debug, Error)]
pub enum Error {
    /// The input document is not valid JSON or does not match the expected
    /// shape.
    #[error("invalid document: {0}")]
    Json(#[from] serde_json::Error),

    /// A snapshot document must be a JSON object of field names to values.
    #[error("snapshot must be an object, got {kind}")]
    NotAnObject {
        /// Kind of JSON value that was received instead.
        kind: &'static str,
    },

    /// A notifier refused or failed to handle a record.
    #[error("unable to notify for torrent {hash:?}: {reason}")]
    Notify {
        /// Hash of the torrent the record belongs to, empty when unknown.
        hash: String,
        /// Human readable cause.
        reason: String,
    },
}
