use thiserror::Error;

use super::image::ImageError;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum VirtualMachineError {
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Error for a decoded opcode outside the supported set.
    #[error("unknown opcode {opcode} at address {address}")]
    UnknownOpcode { opcode: i64, address: usize },

    /// Error for a parameter mode digit that is neither position (0) nor immediate (1).
    #[error("unknown parameter mode {digit} for parameter {index} of instruction at address {address}")]
    UnknownParameterMode {
        digit: i64,
        index: usize,
        address: usize,
    },
}
