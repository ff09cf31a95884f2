use crate::template::TemplateFormat;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template file not found: {path}")]
    NotFound { path: String },

    #[error("Failed to read template {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid {format} template: {reason}")]
    Parse {
        format: TemplateFormat,
        reason: String,
    },

    #[error("Unknown template format")]
    UnknownFormat,

    #[error("Template root must be an object, found {found}")]
    InvalidShape { found: String },
}
