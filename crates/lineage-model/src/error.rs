use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("invalid token: {0:?} is empty after trimming")]
    EmptyToken(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
