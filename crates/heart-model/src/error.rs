use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
