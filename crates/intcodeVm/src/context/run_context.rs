/// The mutable register state of one interpreter run.
#[derive(Debug)]
pub struct RunContext {
    /// The address of the next instruction word to decode.
    pub(crate) pc: usize,
    /// The single scalar slot shared by the input and output instructions.
    ///
    /// Set once from the run input before execution; every input instruction
    /// copies its *current* value, every output instruction overwrites it.
    pub(crate) io: i64,
}

impl RunContext {
    #[must_use]
    pub const fn new(input: i64) -> Self {
        Self { pc: 0, io: input }
    }

    #[must_use]
    pub const fn pc(&self) -> usize {
        self.pc
    }

    #[must_use]
    pub const fn io(&self) -> i64 {
        self.io
    }

    /// Default pointer advance: one word for the opcode plus one per parameter.
    pub(crate) const fn advance(&mut self, parameter_count: usize) {
        self.pc += 1 + parameter_count;
    }

    /// Direct pointer assignment by a taken jump, suppressing the default
    /// advance for this step.
    pub(crate) const fn jump_to(&mut self, target: usize) {
        self.pc = target;
    }

    pub(crate) const fn set_io(&mut self, value: i64) {
        self.io = value;
    }
}
