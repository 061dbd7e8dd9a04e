use tracing::debug;

use crate::{
    ast::Statement,
    error::ParseError,
    toolchain::{lexer::LogicalLine, parser::statement::parse_statement},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program.
///
/// This is the entry point for parsing. Statements are parsed one after the
/// other until the tuples run out. A `Dedent` at the top level means the
/// markers were not balanced and is reported as an error; an `Indent` where a
/// statement should start is reported by the statement parser.
///
/// Grammar: `program := statement*`
///
/// # Parameters
/// - `lines`: The lexer output.
///
/// # Returns
/// The parsed statements, in source order.
///
/// # Example
/// ```
/// use sabdastra::{
///     ast::Statement,
///     toolchain::{lexer::tokenize, parser::core::parse_program},
/// };
///
/// let lines = tokenize("x = 4\nch x");
/// let program = parse_program(&lines).unwrap();
///
/// assert_eq!(program,
///            vec![Statement::Assign { target: "x".to_string(),
///                                     value:  "4".to_string(), },
///                 Statement::Print { value: "x".to_string() },]);
/// ```
pub fn parse_program(lines: &[LogicalLine]) -> ParseResult<Vec<Statement>> {
    let mut iter = lines.iter().peekable();
    let mut statements = Vec::new();

    while let Some(next) = iter.peek() {
        if let LogicalLine::Dedent { line } = next {
            return Err(ParseError::UnexpectedDedent { line: *line });
        }

        statements.push(parse_statement(&mut iter)?);
    }

    debug!(count = statements.len(), "parsed program");
    Ok(statements)
}
