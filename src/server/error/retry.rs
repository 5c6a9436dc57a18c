use sea_orm::DbErr;

use super::Error;

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (transient store errors)
    Retry,
    /// Failed permanently (bad request)
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Self::DbErr(db_err) => {
                match db_err {
                    // Connection acquisition errors - transient, should retry
                    DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                    // Connection errors - transient, should retry
                    DbErr::Conn(_) => ErrorRetryStrategy::Retry,

                    // Query, conversion & record errors won't resolve with retry
                    _ => ErrorRetryStrategy::Fail,
                }
            }

            // Session & Redis errors - transient connection issues
            Self::SessionError(_) => ErrorRetryStrategy::Retry,
            Self::RedisError(_) => ErrorRetryStrategy::Retry,

            // Configuration errors - permanent failures, won't resolve with retry
            Self::ConfigError(_) => ErrorRetryStrategy::Fail,

            // Auth errors - permanent failures (missing session, insufficient access)
            Self::AuthError(_) => ErrorRetryStrategy::Fail,

            // Domain errors - permanent failures (validation, missing records)
            Self::SubmissionError(_) => ErrorRetryStrategy::Fail,
            Self::FootballError(_) => ErrorRetryStrategy::Fail,

            // Parse errors - permanent failures (bad data format)
            Self::ParseError(_) => ErrorRetryStrategy::Fail,

            // InternalError - permanent failures (internal error within Touchline's code)
            Self::InternalError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
