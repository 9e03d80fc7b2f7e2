use std::fmt;

use crate::{
    bytecode::instruction::Instruction, context::run_context::RunContext,
    errors::vm::VirtualMachineError, image::ProgramImage,
};

/// Snapshot handed to the trace observer once per decoded instruction.
#[derive(Debug)]
pub struct TraceStep<'a> {
    /// Address of the instruction word just decoded.
    pub pc: usize,
    /// I/O register value before the instruction executes.
    pub io: i64,
    /// The decoded instruction.
    pub instruction: &'a Instruction,
}

/// The Intcode interpreter: a fetch-decode-execute loop over one
/// [`ProgramImage`].
///
/// Each run is single-threaded, synchronous and runs to completion or
/// failure within one call; the image is exclusively borrowed for the whole
/// run. There is no iteration bound: a program lacking opcode 99 keeps
/// advancing until it fails with an out-of-bounds access or an unknown
/// opcode.
///
/// Tracing is an observer injected at construction rather than a global
/// flag; [`Interpreter::new`] runs silently.
pub struct Interpreter<'obs> {
    observer: Option<Box<dyn FnMut(&TraceStep<'_>) + 'obs>>,
}

impl fmt::Debug for Interpreter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interpreter")
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl Default for Interpreter<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'obs> Interpreter<'obs> {
    /// An interpreter with no tracing.
    #[must_use]
    pub const fn new() -> Self {
        Self { observer: None }
    }

    /// An interpreter that invokes `observer` once per decoded instruction,
    /// including the final halt.
    #[must_use]
    pub fn with_observer(observer: impl FnMut(&TraceStep<'_>) + 'obs) -> Self {
        Self {
            observer: Some(Box::new(observer)),
        }
    }

    /// Executes `image` to completion or failure with one scalar input.
    ///
    /// Sets the I/O register to `input`, resets the instruction pointer to 0
    /// and loops: decode, dispatch, advance (or jump). Returns the final I/O
    /// register value when opcode 99 is decoded; fails on an unknown opcode,
    /// an unknown parameter-mode digit, or any out-of-bounds access. The
    /// image is mutated in place, so its final state remains inspectable by
    /// the caller.
    pub fn run(
        &mut self,
        image: &mut ProgramImage,
        input: i64,
    ) -> Result<i64, VirtualMachineError> {
        let mut run_context = RunContext::new(input);

        loop {
            let instruction = Instruction::decode(image, run_context.pc())?;

            if let Some(observer) = self.observer.as_mut() {
                observer(&TraceStep {
                    pc: run_context.pc(),
                    io: run_context.io(),
                    instruction: &instruction,
                });
            }

            if matches!(instruction, Instruction::Halt) {
                return Ok(run_context.io());
            }

            instruction.execute(&mut run_context, image)?;
        }
    }
}
