use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GenerateError>;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Failed to parse JSON Schema: {0}")]
    ParseError(String),

    #[error("No definitions found in JSON Schema")]
    MissingDefinitions,

    #[error("Failed to write {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
