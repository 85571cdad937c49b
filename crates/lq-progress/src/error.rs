//! Error types for the progress service.

use thiserror::Error;

use lq_core::GameType;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from the durable record store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store cannot be reached. The service does not retry; retry
    /// policy belongs to the storage collaborator.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by the service operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A required submission field was absent.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A submission field was present but malformed.
    #[error("invalid submission: {0}")]
    Validation(String),

    /// A referenced record was absent where one is required.
    #[error("no progress record for game '{0}'")]
    NotFound(GameType),

    /// The durable store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    /// HTTP-equivalent status classification for the transport layer:
    /// 400 for validation failures, 404 for missing records, 503 when the
    /// store is unreachable.
    pub fn status(&self) -> u16 {
        match self {
            Self::MissingField(_) | Self::Validation(_) => 400,
            Self::NotFound(_) => 404,
            Self::Store(_) => 503,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classification() {
        assert_eq!(ServiceError::MissingField("score").status(), 400);
        assert_eq!(ServiceError::Validation("bad".into()).status(), 400);
        assert_eq!(ServiceError::NotFound(GameType::Math).status(), 404);
        assert_eq!(
            ServiceError::Store(StoreError::Unavailable("down".into())).status(),
            503
        );
    }

    #[test]
    fn messages_are_human_readable() {
        assert_eq!(
            ServiceError::MissingField("gameType").to_string(),
            "missing required field: gameType"
        );
        assert_eq!(
            StoreError::Unavailable("connection refused".into()).to_string(),
            "store unavailable: connection refused"
        );
    }
}
