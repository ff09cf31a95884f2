use crate::template::TemplateError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("Failed to serialize parameter file: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Serialize(#[from] SerializeError),
}
