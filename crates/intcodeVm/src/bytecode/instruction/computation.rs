use crate::{
    bytecode::{operand::Parameter, operation::Operation},
    context::run_context::RunContext,
    errors::vm::VirtualMachineError,
    image::ProgramImage,
};

/// Performs a binary computation and stores the result: `mem[dst] = arg_a op arg_b`.
///
/// Covers opcodes 1 (add), 2 (mul), 7 (less-than) and 8 (equals). The
/// destination is always a raw address; its mode digit is ignored, so write
/// targets are never computed through an extra indirection.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComputationInstruction {
    /// The operation to perform.
    pub operation: Operation,
    /// The first operand.
    pub arg_a: Parameter,
    /// The second operand.
    pub arg_b: Parameter,
    /// The address receiving the result.
    pub dst: i64,
}

impl ComputationInstruction {
    pub(crate) fn execute(
        &self,
        run_context: &mut RunContext,
        image: &mut ProgramImage,
    ) -> Result<(), VirtualMachineError> {
        let a = self.arg_a.value(image)?;
        let b = self.arg_b.value(image)?;
        image.write(self.dst, self.operation.compute(a, b))?;
        run_context.advance(3);
        Ok(())
    }
}
