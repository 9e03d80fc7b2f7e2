pub mod bytecode;
pub mod context;
pub mod core;
pub mod errors;
pub mod image;

pub use crate::core::{Interpreter, TraceStep};
pub use crate::errors::{image::ImageError, vm::VirtualMachineError};
pub use crate::image::ProgramImage;
