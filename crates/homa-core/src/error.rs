use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{0}")]
    MissingField(String),

    #[error("{0}")]
    InvalidField(String),

    #[error("no fields to update")]
    EmptyUpdate,
}
