use crate::language::Language;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid Key: {0}")]
    InvalidKey(String),

    #[error("Ciphertext contains no letters to decode")]
    EmptyInput,

    #[error("No profile loaded for language '{0}'")]
    UnknownLanguage(Language),

    #[error("Missing Resource: {0}")]
    MissingResource(String),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type CfResult<T> = Result<T, CipherError>;
