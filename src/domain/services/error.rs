use thiserror::Error;

/// Failures raised while talking to the ask-ai backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Connection failure, timeout, or a non-2xx status.
    #[error("Network error: {0}")]
    Network(String),

    /// A 2xx reply whose body lacks a usable `response` text.
    #[error("Malformed upstream response: {0}")]
    MalformedUpstream(String),
}

/// Failures raised while turning model text into a typed payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizationError {
    /// The cleaned reply is not JSON at all. Carries the original text.
    #[error("Unparsable JSON reply: {reason}")]
    UnparsableJson { raw: String, reason: String },

    /// The reply parsed, but not into the shape the domain expects.
    #[error("Schema mismatch: {reason}")]
    SchemaMismatch { reason: String },
}

impl NormalizationError {
    pub fn unparsable(raw: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnparsableJson {
            raw: raw.into(),
            reason: reason.into(),
        }
    }

    pub fn schema(reason: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            reason: reason.into(),
        }
    }
}

/// Why a dispatched prompt produced no payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplyError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Normalization(#[from] NormalizationError),
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid provider: {0}")]
    InvalidProvider(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Session busy: {0}")]
    SessionBusy(String),
}

impl DomainError {
    pub fn invalid_provider(value: impl Into<String>) -> Self {
        Self::InvalidProvider(value.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
