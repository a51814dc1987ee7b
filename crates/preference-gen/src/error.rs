use crate::config::ConfigError;
use arrow::error::ArrowError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Cannot normalize attractivity weights, total attractivity is {total}")]
    DegenerateDistribution { total: f64 },

    #[error("Request generation failed for student {student_rank}")]
    TaskFailure {
        student_rank: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Error reading input table: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input table is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),
}

impl Error {
    /// True for malformed tables, counts or configuration values.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput(_) | Error::Config(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
