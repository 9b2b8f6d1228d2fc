use thiserror::Error;

/// Main error type for filtering and statistics
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HampelError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Input sequence is empty")]
    EmptyInput,

    #[error("Non-finite sample {value} at index {index}")]
    NonFiniteSample { index: usize, value: f64 },
}

/// Errors raised while reading sample sequences from text
#[derive(Error, Debug)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error on line {line}: {token:?} is not a number")]
    Parse { line: usize, token: String },
}
