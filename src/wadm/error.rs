use thiserror::Error;

#[derive(Error, Debug)]
pub enum WadmError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Directory tool failed: {0}")]
    Tool(String),

    #[error("No employee found for: {0}")]
    UnknownEmployee(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, WadmError>;
