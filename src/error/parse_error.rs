#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing token tuples.
pub enum ParseError {
    /// A statement that opens a block did not end with `:`.
    ExpectedColon {
        /// The keyword of the offending statement.
        keyword: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A `yugma` loop was written without the `in` keyword.
    ExpectedIn {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `yugma` loop had nothing between `in` and `:`.
    ExpectedLoopBound {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A name (label, function name, loop variable) was missing or was not an
    /// identifier.
    ExpectedName {
        /// The keyword of the offending statement.
        keyword: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A function parameter was not an identifier.
    InvalidParameter {
        /// The offending lexeme.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An `anya` line was anything other than `anya :`.
    MalformedElse {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An `anya` line did not directly follow the body of a `yadi`.
    DanglingElse {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A statement ending in `:` was not followed by an indented block.
    ExpectedBlock {
        /// The keyword of the offending statement.
        keyword: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Indentation increased where a statement was expected.
    UnexpectedIndent {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Indentation decreased below the top level.
    UnexpectedDedent {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An assignment had no target or no value.
    InvalidAssignment {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Reached the end of input where a statement was expected.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl ParseError {
    /// Returns the source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::ExpectedColon { line, .. }
            | Self::ExpectedIn { line }
            | Self::ExpectedLoopBound { line }
            | Self::ExpectedName { line, .. }
            | Self::InvalidParameter { line, .. }
            | Self::MalformedElse { line }
            | Self::DanglingElse { line }
            | Self::ExpectedBlock { line, .. }
            | Self::UnexpectedIndent { line }
            | Self::UnexpectedDedent { line }
            | Self::InvalidAssignment { line }
            | Self::UnexpectedEndOfInput { line } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectedColon { keyword, line } => {
                write!(f, "Error on line {line}: Expected ':' after '{keyword}'.")
            },
            Self::ExpectedIn { line } => write!(f,
                                                "Error on line {line}: Expected 'in' in yugma statement. Example: yugma i in 3:"),
            Self::ExpectedLoopBound { line } => {
                write!(f, "Error on line {line}: Expected a loop bound between 'in' and ':'.")
            },
            Self::ExpectedName { keyword, line } => {
                write!(f, "Error on line {line}: Expected a name after '{keyword}'.")
            },
            Self::InvalidParameter { token, line } => {
                write!(f, "Error on line {line}: Parameter '{token}' is not an identifier.")
            },
            Self::MalformedElse { line } => {
                write!(f, "Error on line {line}: Expected ':' after anya, and nothing else.")
            },
            Self::DanglingElse { line } => {
                write!(f, "Error on line {line}: Found 'anya' without a preceding 'yadi' block.")
            },
            Self::ExpectedBlock { keyword, line } => {
                write!(f, "Error on line {line}: Expected an indented block after '{keyword}'.")
            },
            Self::UnexpectedIndent { line } => {
                write!(f, "Error on line {line}: Unexpected indent.")
            },
            Self::UnexpectedDedent { line } => {
                write!(f, "Error on line {line}: Unexpected dedent.")
            },
            Self::InvalidAssignment { line } => write!(f,
                                                       "Error on line {line}: Invalid assignment. Example: x = 1 + 2"),
            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
