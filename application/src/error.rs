use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Maximum of {limit} WebSocket connections reached")]
    ConnectionLimitReached { limit: usize },
}

pub type AppResult<T> = Result<T, AppError>;
