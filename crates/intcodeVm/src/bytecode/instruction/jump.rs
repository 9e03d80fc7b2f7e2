use crate::{
    bytecode::operand::Parameter,
    context::run_context::RunContext,
    errors::{image::ImageError, vm::VirtualMachineError},
    image::ProgramImage,
};

/// The branch predicate of a conditional jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum JumpCondition {
    /// Opcode 5: jump-if-true, taken when the condition value is non-zero.
    NonZero,
    /// Opcode 6: jump-if-false, taken when the condition value is zero.
    Zero,
}

/// Conditional control transfer.
///
/// When the branch is taken the target becomes the instruction pointer
/// unconditionally and the default advance is suppressed; the no-branch path
/// applies the default advance explicitly.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JumpInstruction {
    /// When the jump is taken.
    pub condition: JumpCondition,
    /// The value to test.
    pub arg: Parameter,
    /// The destination instruction pointer.
    pub dest: Parameter,
}

impl JumpInstruction {
    pub(crate) fn execute(
        &self,
        run_context: &mut RunContext,
        image: &ProgramImage,
    ) -> Result<(), VirtualMachineError> {
        let value = self.arg.value(image)?;
        let taken = match self.condition {
            JumpCondition::NonZero => value != 0,
            JumpCondition::Zero => value == 0,
        };

        if taken {
            let target = self.dest.value(image)?;
            // A jump target outside the image is as fatal as any other
            // out-of-bounds access.
            let target = usize::try_from(target)
                .ok()
                .filter(|&t| t < image.len())
                .ok_or(ImageError::OutOfBounds {
                    address: target,
                    len: image.len(),
                })?;
            run_context.jump_to(target);
        } else {
            run_context.advance(2);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bytecode::operand::ParameterMode;

    fn immediate(raw: i64) -> Parameter {
        Parameter {
            raw,
            mode: ParameterMode::Immediate,
        }
    }

    #[test]
    fn test_taken_jump_sets_pointer_directly() {
        let image = ProgramImage::parse("1105,1,4,99,99").unwrap();
        let mut run_context = RunContext::new(0);
        let instruction = JumpInstruction {
            condition: JumpCondition::NonZero,
            arg: immediate(1),
            dest: immediate(4),
        };

        instruction.execute(&mut run_context, &image).unwrap();
        assert_eq!(run_context.pc(), 4);
    }

    #[test]
    fn test_untaken_jump_applies_default_advance() {
        let image = ProgramImage::parse("1105,0,4,99,99").unwrap();
        let mut run_context = RunContext::new(0);
        let instruction = JumpInstruction {
            condition: JumpCondition::NonZero,
            arg: immediate(0),
            dest: immediate(4),
        };

        instruction.execute(&mut run_context, &image).unwrap();
        assert_eq!(run_context.pc(), 3);
    }

    #[test]
    fn test_jump_target_outside_image_fails() {
        let image = ProgramImage::parse("1105,1,-2,99").unwrap();
        let mut run_context = RunContext::new(0);
        let instruction = JumpInstruction {
            condition: JumpCondition::NonZero,
            arg: immediate(1),
            dest: immediate(-2),
        };

        let err = instruction.execute(&mut run_context, &image).unwrap_err();
        assert_eq!(
            err,
            VirtualMachineError::Image(ImageError::OutOfBounds {
                address: -2,
                len: 4,
            })
        );
    }
}
