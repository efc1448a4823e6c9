use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown source format: {0}")]
    UnknownFormat(String),
    #[error("unknown output format: {0}")]
    UnknownOutputFormat(String),
    #[error("unknown transformation kind: {0}")]
    UnknownTransformation(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
