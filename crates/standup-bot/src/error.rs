//! Application error types.

use thiserror::Error;

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),

    #[error("Chat gateway error: {0}")]
    Chat(#[from] chat_client::ChatError),

    #[error("Store error: {0}")]
    Store(#[from] update_store::StoreError),
}

/// Result type alias for application errors.
pub type AppResult<T> = Result<T, AppError>;
