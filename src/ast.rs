/// An abstract syntax tree (AST) node representing one statement.
///
/// `Statement` is a closed set: every statement kind of the language has
/// exactly one variant, carrying only the fields relevant to that kind.
/// Expressions (print values, assignment values, tests and loop bounds) are
/// kept as the space-joined text of their source lexemes. The parser never
/// interprets them; the bytecode compiler re-lexes them, and the transpiler
/// copies them through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A `bhava` block: a descriptive tag over a group of statements with no
    /// runtime effect of its own.
    LabeledBlock {
        /// The tag attached to the block.
        label: String,
        /// Statements grouped under the tag.
        body:  Vec<Self>,
    },
    /// A `kar` function definition.
    ///
    /// A definition written without a trailing `:` is a forward declaration
    /// and has an empty body.
    FunctionDef {
        /// Name of the function.
        name:   String,
        /// Parameter names, in declaration order.
        params: Vec<String>,
        /// The function body. Empty for forward declarations.
        body:   Vec<Self>,
    },
    /// A `yadi` conditional with an optional `anya` branch.
    If {
        /// The test expression text.
        test:   String,
        /// Statements run when the test is truthy.
        body:   Vec<Self>,
        /// Statements run when the test is falsy. Empty when no `anya`
        /// branch was written.
        orelse: Vec<Self>,
    },
    /// A `yugma` counted loop running `var` from `0` up to, but excluding,
    /// `bound`.
    For {
        /// The loop variable.
        var:   String,
        /// The bound expression text.
        bound: String,
        /// Statements run once per iteration.
        body:  Vec<Self>,
    },
    /// A `yatra` loop that re-evaluates its test before every iteration.
    While {
        /// The test expression text.
        test: String,
        /// Statements run while the test is truthy.
        body: Vec<Self>,
    },
    /// A `ch` print statement.
    Print {
        /// The expression text to print.
        value: String,
    },
    /// An assignment `target = value`.
    Assign {
        /// The variable receiving the value.
        target: String,
        /// The expression text producing the value.
        value:  String,
    },
    /// Any other line, taken as an invocation.
    Call {
        /// The whole line text: the callee followed by its arguments.
        text: String,
    },
}

impl Statement {
    /// Returns the keyword-style name of the statement kind.
    ///
    /// # Example
    /// ```
    /// use sabdastra::ast::Statement;
    ///
    /// let stmt = Statement::Print { value: "1".to_string() };
    /// assert_eq!(stmt.kind(), "print");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::LabeledBlock { .. } => "labeled-block",
            Self::FunctionDef { .. } => "function-definition",
            Self::If { .. } => "conditional",
            Self::For { .. } => "counted-for",
            Self::While { .. } => "while",
            Self::Print { .. } => "print",
            Self::Assign { .. } => "assignment",
            Self::Call { .. } => "call",
        }
    }
}
