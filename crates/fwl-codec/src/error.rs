use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("truncated world file: {field} at offset {offset} needs {needed} bytes, {available} available")]
    Truncated {
        field: &'static str,
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("negative {field} length {length} at offset {offset}")]
    NegativeLength {
        field: &'static str,
        offset: usize,
        length: i8,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CodecError {
    /// Returns `true` for errors caused by malformed or short input bytes.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Truncated { .. } | Self::NegativeLength { .. })
    }
}

pub type CodecResult<T> = Result<T, CodecError>;
