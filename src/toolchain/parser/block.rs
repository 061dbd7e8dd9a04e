use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    toolchain::{
        lexer::{LogicalLine, Token},
        parser::{core::ParseResult, statement::parse_statement},
    },
};

/// Parses an indented block.
///
/// A block is exactly one `Indent` … `Dedent` span. Statements inside the
/// span are parsed recursively, so nested blocks consume their own markers
/// and the loop here only ever sees the `Dedent` that closes this level.
///
/// Grammar: `block := INDENT statement+ DEDENT`
///
/// # Parameters
/// - `lines`: Tuple stream positioned right after the statement that opened
///   the block.
/// - `keyword`: Keyword of the opening statement, for error reporting.
/// - `line`: Line number of the opening statement.
///
/// # Returns
/// The statements of the block.
///
/// # Errors
/// `ExpectedBlock` if the next element is not an `Indent`.
pub fn parse_block<'a, I>(lines: &mut Peekable<I>,
                          keyword: &Token,
                          line: usize)
                          -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a LogicalLine>
{
    match lines.next() {
        Some(LogicalLine::Indent { .. }) => {},
        _ => {
            return Err(ParseError::ExpectedBlock { keyword: keyword.to_string(),
                                                   line });
        },
    }

    let mut statements = Vec::new();

    loop {
        match lines.peek() {
            Some(LogicalLine::Dedent { .. }) => {
                lines.next();
                break;
            },
            Some(_) => statements.push(parse_statement(lines)?),
            None => break,
        }
    }

    Ok(statements)
}
