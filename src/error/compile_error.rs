#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while lowering an AST to bytecode.
pub enum CompileError {
    /// Expression text did not match any shape the compiler can lower.
    InvalidExpression {
        /// The expression text.
        expression: String,
        /// Why the text was rejected.
        details:    String,
    },
    /// A call line did not start with a function name.
    InvalidCall {
        /// The call text.
        text: String,
    },
    /// A call named a function that is never defined.
    UndefinedFunction {
        /// The name of the function.
        name: String,
    },
    /// A call supplied the wrong number of arguments.
    ArityMismatch {
        /// The name of the function.
        name:     String,
        /// Number of declared parameters.
        expected: usize,
        /// Number of arguments supplied.
        found:    usize,
    },
    /// A function was given a body more than once.
    FunctionAlreadyDefined {
        /// The name of the function.
        name: String,
    },
    /// A forward declaration and the definition disagree on parameters.
    ConflictingDeclaration {
        /// The name of the function.
        name: String,
    },
    /// A jump was emitted but never given a target.
    UnresolvedJump {
        /// Index of the jump instruction.
        index: usize,
    },
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidExpression { expression, details } => {
                write!(f, "Compile error: Cannot compile expression '{expression}': {details}.")
            },
            Self::InvalidCall { text } => {
                write!(f, "Compile error: '{text}' does not start with a function name.")
            },
            Self::UndefinedFunction { name } => {
                write!(f, "Compile error: Unknown function '{name}'.")
            },
            Self::ArityMismatch { name, expected, found } => write!(f,
                                                                    "Compile error: Function '{name}' takes {expected} argument(s) but {found} were supplied."),
            Self::FunctionAlreadyDefined { name } => {
                write!(f, "Compile error: Function '{name}' is already defined.")
            },
            Self::ConflictingDeclaration { name } => write!(f,
                                                            "Compile error: Declaration of '{name}' does not match its definition."),
            Self::UnresolvedJump { index } => {
                write!(f, "Compile error: Jump at instruction {index} was never patched.")
            },
        }
    }
}

impl std::error::Error for CompileError {}
