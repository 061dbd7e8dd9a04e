#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while the virtual machine runs.
///
/// Every variant records `pc`, the index of the instruction that failed.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero {
        /// Index of the failing instruction.
        pc: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// Index of the failing instruction.
        pc: usize,
    },
    /// An operator was applied to values it does not support.
    TypeMismatch {
        /// Details about the type mismatch.
        details: String,
        /// Index of the failing instruction.
        pc:      usize,
    },
    /// An instruction needed more operands than the stack held.
    StackUnderflow {
        /// Index of the failing instruction.
        pc: usize,
    },
    /// `LOAD_CONST` referred to an id missing from the constant pool.
    UnknownConstant {
        /// The constant id.
        id: usize,
        /// Index of the failing instruction.
        pc: usize,
    },
    /// `RETURN` ran with no active call.
    ReturnOutsideFunction {
        /// Index of the failing instruction.
        pc: usize,
    },
    /// Nested calls went deeper than the VM allows.
    CallDepthExceeded {
        /// The maximum call depth.
        limit: usize,
        /// Index of the failing instruction.
        pc:    usize,
    },
    /// The program ran more instructions than the caller allowed.
    StepLimitExceeded {
        /// The configured step limit.
        limit: u64,
        /// Index of the instruction that would have run next.
        pc:    usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { pc } => write!(f, "Error at instruction {pc}: Division by zero."),
            Self::Overflow { pc } => write!(f,
                                            "Error at instruction {pc}: Integer overflow while trying to compute result."),
            Self::TypeMismatch { details, pc } => {
                write!(f, "Error at instruction {pc}: Type error: {details}.")
            },
            Self::StackUnderflow { pc } => {
                write!(f, "Error at instruction {pc}: Operand stack is empty.")
            },
            Self::UnknownConstant { id, pc } => {
                write!(f, "Error at instruction {pc}: Unknown constant id {id}.")
            },
            Self::ReturnOutsideFunction { pc } => {
                write!(f, "Error at instruction {pc}: Return outside of a function.")
            },
            Self::CallDepthExceeded { limit, pc } => write!(f,
                                                            "Error at instruction {pc}: Call depth exceeded the limit of {limit}."),
            Self::StepLimitExceeded { limit, pc } => write!(f,
                                                            "Error at instruction {pc}: Execution exceeded the limit of {limit} steps."),
        }
    }
}

impl std::error::Error for RuntimeError {}
