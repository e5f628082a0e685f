use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Menu schema error: {message}")]
    SchemaError { message: String },
}

pub type Result<T> = std::result::Result<T, MenuError>;
