use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Schema parsing error: {message}")]
    SchemaParseError { message: String },

    #[error("Invalid schema value for {field}: '{value}' ({reason})")]
    InvalidSchemaValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown form: {0}")]
    UnknownFormError(String),

    #[error("Invalid field argument: '{0}' (expected NAME=VALUE)")]
    FieldArgumentError(String),

    #[error("Unsupported value for field '{field}': {reason}")]
    FieldValueError { field: String, reason: String },
}

pub type Result<T> = std::result::Result<T, FormError>;
