use computation::ComputationInstruction;
use io::{InputInstruction, OutputInstruction};
use jump::{JumpCondition, JumpInstruction};

use crate::{
    bytecode::{operand::Parameter, operation::Operation},
    context::run_context::RunContext,
    errors::vm::VirtualMachineError,
    image::ProgramImage,
};

pub mod computation;
pub mod io;
pub mod jump;

/// One decoded Intcode instruction.
///
/// The low two decimal digits of the instruction word select the opcode; the
/// remaining digits, read right-to-left, carry one addressing-mode digit per
/// parameter.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Instruction {
    /// Opcodes 1, 2, 7 and 8: `mem[dst] = arg_a op arg_b`.
    Computation(ComputationInstruction),
    /// Opcode 3: store the I/O register at a target address.
    Input(InputInstruction),
    /// Opcode 4: overwrite the I/O register with a computed value.
    Output(OutputInstruction),
    /// Opcodes 5 and 6: conditional control transfer.
    Jump(JumpInstruction),
    /// Opcode 99: terminate the run, reporting the I/O register.
    Halt,
}

impl Instruction {
    /// Decodes the instruction starting at `address`.
    ///
    /// Fails with `UnknownOpcode` for an opcode outside the supported set,
    /// `UnknownParameterMode` for a mode digit other than 0 or 1, and
    /// `OutOfBounds` when the opcode or parameter words fall outside the
    /// image — which is also how a program lacking a halt eventually dies,
    /// as the pointer keeps advancing past the image.
    pub fn decode(image: &ProgramImage, address: usize) -> Result<Self, VirtualMachineError> {
        let word = image.read(address as i64)?;
        let opcode = word % 100;
        let modes = word / 100;

        match opcode {
            1 | 2 | 7 | 8 => {
                let operation = match opcode {
                    1 => Operation::Add,
                    2 => Operation::Mul,
                    7 => Operation::LessThan,
                    _ => Operation::Equals,
                };
                let raw = image.slice(address + 1, 3)?;
                Ok(Self::Computation(ComputationInstruction {
                    operation,
                    arg_a: Parameter::decode(raw[0], modes, 0, address)?,
                    arg_b: Parameter::decode(raw[1], modes, 1, address)?,
                    // The destination is a raw address; its mode digit is
                    // ignored.
                    dst: raw[2],
                }))
            }
            3 => {
                let raw = image.slice(address + 1, 1)?;
                Ok(Self::Input(InputInstruction { dst: raw[0] }))
            }
            4 => {
                let raw = image.slice(address + 1, 1)?;
                Ok(Self::Output(OutputInstruction {
                    src: Parameter::decode(raw[0], modes, 0, address)?,
                }))
            }
            5 | 6 => {
                let condition = if opcode == 5 {
                    JumpCondition::NonZero
                } else {
                    JumpCondition::Zero
                };
                let raw = image.slice(address + 1, 2)?;
                Ok(Self::Jump(JumpInstruction {
                    condition,
                    arg: Parameter::decode(raw[0], modes, 0, address)?,
                    dest: Parameter::decode(raw[1], modes, 1, address)?,
                }))
            }
            99 => Ok(Self::Halt),
            _ => Err(VirtualMachineError::UnknownOpcode { opcode, address }),
        }
    }

    /// Executes a single decoded instruction, including the instruction
    /// pointer update it implies: the default advance of `1 + parameter
    /// count`, or a direct assignment for a taken jump.
    ///
    /// `Halt` has no effect; the run loop terminates on it before calling
    /// this.
    pub fn execute(
        &self,
        run_context: &mut RunContext,
        image: &mut ProgramImage,
    ) -> Result<(), VirtualMachineError> {
        match self {
            Self::Computation(instruction) => instruction.execute(run_context, image),
            Self::Input(instruction) => instruction.execute(run_context, image),
            Self::Output(instruction) => instruction.execute(run_context, image),
            Self::Jump(instruction) => instruction.execute(run_context, image),
            Self::Halt => Ok(()),
        }
    }
}
