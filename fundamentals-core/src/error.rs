//! 错误类型 (Core 层)
//!
//! Building a report cannot fail; only writing it out can.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Writing the rendered report failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialising the report to JSON failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
