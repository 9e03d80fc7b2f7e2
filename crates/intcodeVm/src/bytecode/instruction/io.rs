use crate::{
    bytecode::operand::Parameter, context::run_context::RunContext,
    errors::vm::VirtualMachineError, image::ProgramImage,
};

/// Opcode 3: stores the *current* I/O register value at a target address.
///
/// The target is a raw address; its mode digit is ignored. If an output
/// instruction has already overwritten the register, a later input reads
/// that later value, not the original run input.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InputInstruction {
    /// The address receiving the register value.
    pub dst: i64,
}

impl InputInstruction {
    pub(crate) fn execute(
        &self,
        run_context: &mut RunContext,
        image: &mut ProgramImage,
    ) -> Result<(), VirtualMachineError> {
        image.write(self.dst, run_context.io())?;
        run_context.advance(1);
        Ok(())
    }
}

/// Opcode 4: overwrites the I/O register with a freshly computed value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OutputInstruction {
    /// The value reported out.
    pub src: Parameter,
}

impl OutputInstruction {
    pub(crate) fn execute(
        &self,
        run_context: &mut RunContext,
        image: &ProgramImage,
    ) -> Result<(), VirtualMachineError> {
        let value = self.src.value(image)?;
        run_context.set_io(value);
        run_context.advance(1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bytecode::operand::ParameterMode;

    #[test]
    fn test_input_stores_register_at_raw_address() {
        let mut image = ProgramImage::parse("3,0,99").unwrap();
        let mut run_context = RunContext::new(7);
        let instruction = InputInstruction { dst: 0 };

        instruction.execute(&mut run_context, &mut image).unwrap();

        assert_eq!(image.cells(), &[7, 0, 99]);
        assert_eq!(run_context.pc(), 2);
    }

    #[test]
    fn test_output_overwrites_register() {
        let image = ProgramImage::parse("4,2,99").unwrap();
        let mut run_context = RunContext::new(7);
        let instruction = OutputInstruction {
            src: Parameter {
                raw: 2,
                mode: ParameterMode::Position,
            },
        };

        instruction.execute(&mut run_context, &image).unwrap();

        assert_eq!(run_context.io(), 99);
        assert_eq!(run_context.pc(), 2);
    }

    #[test]
    fn test_later_input_reads_overwritten_register() {
        // output then input: the input must observe the value the output
        // left in the register, not the original run input.
        let mut image = ProgramImage::parse("104,5,3,0,99").unwrap();
        let mut run_context = RunContext::new(1);

        OutputInstruction {
            src: Parameter {
                raw: 5,
                mode: ParameterMode::Immediate,
            },
        }
        .execute(&mut run_context, &image)
        .unwrap();
        InputInstruction { dst: 0 }
            .execute(&mut run_context, &mut image)
            .unwrap();

        assert_eq!(image.read(0).unwrap(), 5);
    }
}
