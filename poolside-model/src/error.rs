use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("invalid id: {0}")]
    InvalidId(String),

    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
