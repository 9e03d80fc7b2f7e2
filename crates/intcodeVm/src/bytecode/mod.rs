pub mod instruction;
pub mod operand;
pub mod operation;
