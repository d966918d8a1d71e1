use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported layer type: {0}")]
    UnsupportedLayer(String),

    #[error("Arity mismatch for {what}: expected {expected} values, got {actual}")]
    ArityMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid numeric input: {0:?}")]
    InvalidNumber(String),

    #[error("Stride must be non-zero")]
    ZeroStride,

    #[error("Arithmetic overflow computing {0}")]
    Overflow(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
