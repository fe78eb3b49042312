//! Error types for the calculator engine.

use thiserror::Error;

/// Result type alias for calculator operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that can occur while driving the calculator.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Arithmetic produced infinity or NaN; the engine has already reset itself
    #[error("Non-finite result: {0}")]
    NonFiniteResult(f64),

    /// The entry buffer could not be parsed as a number
    #[error("Invalid operand: {0:?}")]
    InvalidOperand(String),

    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing or writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Missing input file argument
    #[error("Missing input file argument. Usage: calculator <keys.csv>")]
    MissingArgument,
}
