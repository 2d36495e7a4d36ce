use thiserror::Error;

/// Errors produced while scanning a single input source.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ScanError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid UTF-8 on line {line}")]
    InvalidText { line: u64 },

    #[error("cannot derive probabilities from an empty histogram")]
    ZeroTotal,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, ScanError>;
