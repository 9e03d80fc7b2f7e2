use thiserror::Error;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ImageError {
    /// Error for when a token of the program literal is not a valid signed integer.
    ///
    /// Fatal at parse time: no partial image is usable.
    #[error("malformed program literal: token '{0}' is not a valid integer")]
    MalformedLiteral(String),

    /// Error for a read, write or jump target outside `[0, len)`.
    #[error("memory access out of bounds: address {address} outside image of length {len}")]
    OutOfBounds { address: i64, len: usize },
}
