use thiserror::Error;

use crate::booking::tourist::TouristId;

/// Failure reported by an outbound port (backend, mailer, weather API).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("connection failed: {0}")]
    Connection(String),

    #[error("request timed out after {0}ms")]
    Timeout(u64),

    #[error("unexpected HTTP status {code}: {body}")]
    Status { code: u16, body: String },

    #[error("could not decode response: {0}")]
    Decode(String),

    #[error("request rejected: {0}")]
    Rejected(String),
}

/// Form edits that would break one of the form invariants.
///
/// The state is left untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("the last remaining tourist cannot be removed")]
    LastTourist,

    #[error("no tourist with id {0}")]
    UnknownTourist(TouristId),

    #[error("excursion '{0}' is not offered for the selected tour")]
    ExcursionUnavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}
