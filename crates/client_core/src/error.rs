use thiserror::Error;

/// User-facing failure of one operation. Transport errors and rejected
/// statuses collapse into the same variant; the cause is only logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OperationError {
    #[error("failed to load users")]
    Fetch,
    #[error("failed to save user")]
    Save,
    #[error("failed to delete user")]
    Delete,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid API port '{0}'")]
    InvalidPort(String),
    #[error("invalid API base URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
}
