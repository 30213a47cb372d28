use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("account is deactivated, please contact an administrator")]
    AccountDisabled,

    #[error("token expired")]
    TokenExpired,

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("password hashing failed: {0}")]
    Hash(String),

    #[error("invalid input: {0}")]
    Validation(#[from] homa_core::error::CoreError),

    #[error("storage error: {0}")]
    Storage(#[from] homa_storage::error::StorageError),

    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}
