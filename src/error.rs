//! Error types for boxoffice-client
//!
//! Two error families live here:
//! - [`TransportError`] — the open set of failures the repository boundary can
//!   produce (connectivity, timeouts, HTTP status, decoding)
//! - [`DomainError`] — the closed three-variant taxonomy guaranteed to the
//!   presentation layer
//!
//! The `From` impls in this module are the *only* place transport failures are
//! translated into domain errors. No other module constructs a [`DomainError`]
//! from transport data.

use thiserror::Error;

/// Result type alias for use-case-level operations
pub type Result<T> = std::result::Result<T, DomainError>;

/// Failures originating at the network/decoding boundary
///
/// This is an open set: the repository implementation supplies it, and new
/// variants may appear as the transport layer evolves. Consumers must not
/// match on it exhaustively — classification happens through the
/// [`DomainError`] mapping below, which carries an explicit default arm.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TransportError {
    /// Connection to the remote service could not be established
    #[error("remote unreachable: {0}")]
    Unreachable(String),

    /// Request exceeded the configured timeout
    #[error("request timed out: {0}")]
    Timeout(String),

    /// Remote responded with a non-success HTTP status
    #[error("server returned status {code}")]
    Status {
        /// The HTTP status code the remote answered with
        code: u16,
    },

    /// Response body could not be decoded into the expected payload
    #[error("payload decode failed: {0}")]
    Decode(String),

    /// Remote responded successfully but the payload carried no usable data
    #[error("payload carried no usable data")]
    EmptyPayload,

    /// Anything the boundary could not classify
    #[error("transport error: {0}")]
    Other(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        // Order matters: a timed-out connect reports both is_timeout and
        // is_connect, and timeout is the more specific classification.
        if err.is_timeout() {
            TransportError::Timeout(err.to_string())
        } else if err.is_connect() {
            TransportError::Unreachable(err.to_string())
        } else if err.is_decode() {
            TransportError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            TransportError::Status {
                code: status.as_u16(),
            }
        } else {
            TransportError::Other(err.to_string())
        }
    }
}

/// The closed error taxonomy delivered to the presentation layer
///
/// Every transport-error variant maps to exactly one of these three variants;
/// no transport type ever crosses the use-case boundary unmapped. Each variant
/// resolves to a displayable message via its `Display` impl — the presentation
/// layer derives user-facing text from it and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Connectivity-level failure. Retryable by nature, though this crate
    /// implements no retry policy.
    #[error("a network problem prevented the request from completing")]
    NetworkIssue,

    /// The remote service responded but usable data could not be produced
    /// (malformed or missing payload)
    #[error("the requested data is currently unavailable")]
    DataUnavailable,

    /// Safety net for anything not classifiable. Never empty-handled as a
    /// crash — it renders like any other variant.
    #[error("an unknown error occurred")]
    Unknown,
}

impl From<&TransportError> for DomainError {
    fn from(err: &TransportError) -> Self {
        match err {
            TransportError::Unreachable(_) | TransportError::Timeout(_) => {
                DomainError::NetworkIssue
            }
            TransportError::Decode(_) | TransportError::EmptyPayload => {
                DomainError::DataUnavailable
            }
            // A non-success status means the remote responded, so it is
            // neither a connectivity nor a payload classification. It lands
            // in the safety net together with anything unrecognized — the
            // transport set is open, so this arm must stay a wildcard.
            _ => DomainError::Unknown,
        }
    }
}

impl From<TransportError> for DomainError {
    fn from(err: TransportError) -> Self {
        DomainError::from(&err)
    }
}

impl From<EntityError> for DomainError {
    fn from(_: EntityError) -> Self {
        // A record that decoded but cannot be mapped is unusable data, not a
        // connectivity problem.
        DomainError::DataUnavailable
    }
}

/// Per-record entity-mapping failure
///
/// Produced when a raw ranked-list record carries a field that cannot be
/// parsed into its domain representation (the wire format is string-typed).
/// The fetch orchestrator classifies this as [`DomainError::DataUnavailable`];
/// it never propagates as a panic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field '{field}' could not be parsed from {value:?}")]
pub struct EntityError {
    /// The wire-format field name that failed to parse
    pub field: &'static str,
    /// The raw value that was rejected
    pub value: String,
}

/// Configuration error with context about which setting is invalid
#[derive(Debug, Error)]
#[error("configuration error: {message}")]
pub struct ConfigError {
    /// Human-readable error message describing the configuration issue
    pub message: String,
    /// The configuration key that caused the error (e.g., "api.api_key")
    pub key: Option<&'static str>,
}
