/// The binary operation of a three-parameter computation instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operation {
    /// Opcode 1.
    Add,
    /// Opcode 2.
    Mul,
    /// Opcode 7: stores 1 if the first operand is strictly smaller, else 0.
    LessThan,
    /// Opcode 8: stores 1 if the operands are equal, else 0.
    Equals,
}

impl Operation {
    /// Computes `a op b`. Arithmetic wraps on overflow; comparisons yield 1 or 0.
    #[must_use]
    pub const fn compute(&self, a: i64, b: i64) -> i64 {
        match self {
            Self::Add => a.wrapping_add(b),
            Self::Mul => a.wrapping_mul(b),
            Self::LessThan => (a < b) as i64,
            Self::Equals => (a == b) as i64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic_operations() {
        assert_eq!(Operation::Add.compute(2, 3), 5);
        assert_eq!(Operation::Mul.compute(-4, 3), -12);
    }

    #[test]
    fn test_comparison_operations_yield_flags() {
        assert_eq!(Operation::LessThan.compute(7, 8), 1);
        assert_eq!(Operation::LessThan.compute(8, 8), 0);
        assert_eq!(Operation::Equals.compute(8, 8), 1);
        assert_eq!(Operation::Equals.compute(9, 8), 0);
    }
}
