use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    toolchain::{
        lexer::{LogicalLine, Token, join_tokens},
        parser::{
            block::parse_block,
            core::ParseResult,
            utils::{expect_name, parse_params, strip_colon},
        },
    },
};

/// Parses a single statement.
///
/// The statement kind is chosen from the first lexeme of the next tuple:
/// - `bhava` → labeled block,
/// - `kar` → function definition,
/// - `yadi` → conditional (with an optional `anya` branch),
/// - `yugma` → counted loop,
/// - `yatra` → while loop,
/// - `ch` → print.
///
/// Any other tuple containing `=` is an assignment; anything else is a call.
///
/// # Parameters
/// - `lines`: Tuple stream positioned at the statement.
///
/// # Returns
/// A parsed [`Statement`] node.
///
/// # Errors
/// - `UnexpectedIndent` / `UnexpectedDedent` if a marker stands where a
///   statement should start.
/// - `DanglingElse` for an `anya` that does not close a conditional.
/// - Any error raised by the individual statement parsers.
pub fn parse_statement<'a, I>(lines: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a LogicalLine>
{
    let (tokens, line) = match lines.next() {
        Some(LogicalLine::Tokens { tokens, line }) => (tokens.as_slice(), *line),
        Some(LogicalLine::Indent { line }) => {
            return Err(ParseError::UnexpectedIndent { line: *line });
        },
        Some(LogicalLine::Dedent { line }) => {
            return Err(ParseError::UnexpectedDedent { line: *line });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    };

    let Some((first, rest)) = tokens.split_first() else {
        return Err(ParseError::UnexpectedEndOfInput { line });
    };

    match first {
        Token::Bhava => parse_labeled_block(lines, rest, line),
        Token::Kar => parse_function_definition(lines, rest, line),
        Token::Yadi => parse_if(lines, rest, line),
        Token::Anya => Err(ParseError::DanglingElse { line }),
        Token::Yugma => parse_for(lines, rest, line),
        Token::Yatra => parse_while(lines, rest, line),
        Token::Ch => Ok(Statement::Print { value: join_tokens(rest) }),
        _ if tokens.contains(&Token::Equals) => parse_assignment(tokens, line),
        _ => Ok(Statement::Call { text: join_tokens(tokens) }),
    }
}

/// Parses a labeled block.
///
/// Syntax:
/// ```text
///     bhava <label...> :
///         <block>
/// ```
/// The label carries no runtime meaning; it is kept as text.
fn parse_labeled_block<'a, I>(lines: &mut Peekable<I>,
                              rest: &[Token],
                              line: usize)
                              -> ParseResult<Statement>
    where I: Iterator<Item = &'a LogicalLine>
{
    let label = strip_colon(rest, &Token::Bhava, line)?;
    if label.is_empty() {
        return Err(ParseError::ExpectedName { keyword: Token::Bhava.to_string(),
                                              line });
    }

    let body = parse_block(lines, &Token::Bhava, line)?;

    Ok(Statement::LabeledBlock { label: join_tokens(label),
                                 body })
}

/// Parses a function definition or forward declaration.
///
/// Syntax:
/// ```text
///     kar <name> <param>* :
///         <block>
///     kar <name> <param>*
/// ```
/// Parentheses and commas are dropped by the lexer, so `kar greet(nama):` is
/// read as `kar greet nama :`. Without the trailing `:` the definition is a
/// forward declaration with an empty body.
///
/// # Errors
/// - `ExpectedName` if the function name is missing.
/// - `InvalidParameter` if a parameter is not an identifier.
/// - `ExpectedBlock` if `:` is not followed by an indented block.
fn parse_function_definition<'a, I>(lines: &mut Peekable<I>,
                                    rest: &[Token],
                                    line: usize)
                                    -> ParseResult<Statement>
    where I: Iterator<Item = &'a LogicalLine>
{
    let (has_body, signature) = match rest.split_last() {
        Some((Token::Colon, init)) => (true, init),
        _ => (false, rest),
    };

    let name = expect_name(signature.first(), &Token::Kar, line)?;
    let params = parse_params(signature.get(1..).unwrap_or_default(), line)?;

    let body = if has_body {
        parse_block(lines, &Token::Kar, line)?
    } else {
        Vec::new()
    };

    Ok(Statement::FunctionDef { name, params, body })
}

/// Parses a conditional with an optional else-branch.
///
/// Syntax:
/// ```text
///     yadi <test...> :
///         <block>
///     anya :
///         <block>
/// ```
/// The `anya` line must directly follow the body, at the same depth as the
/// `yadi` line.
///
/// # Errors
/// - `ExpectedColon` if the `yadi` line does not end in `:`.
/// - `MalformedElse` if the `anya` line is anything but `anya :`.
fn parse_if<'a, I>(lines: &mut Peekable<I>, rest: &[Token], line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a LogicalLine>
{
    let test = strip_colon(rest, &Token::Yadi, line)?;
    let body = parse_block(lines, &Token::Yadi, line)?;

    let next = lines.peek().copied();
    let orelse = match next {
        Some(LogicalLine::Tokens { tokens, line: else_line })
            if tokens.first() == Some(&Token::Anya) =>
        {
            lines.next();

            if tokens.as_slice() != [Token::Anya, Token::Colon] {
                return Err(ParseError::MalformedElse { line: *else_line });
            }

            parse_block(lines, &Token::Anya, *else_line)?
        },
        _ => Vec::new(),
    };

    Ok(Statement::If { test: join_tokens(test),
                       body,
                       orelse })
}

/// Parses a counted loop.
///
/// Syntax:
/// ```text
///     yugma <var> in <bound...> :
///         <block>
/// ```
/// The loop runs `var` from `0` up to, but excluding, `bound`.
///
/// # Errors
/// - `ExpectedName` if the loop variable is missing.
/// - `ExpectedIn` if `in` does not follow the variable.
/// - `ExpectedColon` if the line does not end in `:`.
/// - `ExpectedLoopBound` if nothing stands between `in` and `:`.
fn parse_for<'a, I>(lines: &mut Peekable<I>, rest: &[Token], line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a LogicalLine>
{
    let var = expect_name(rest.first(), &Token::Yugma, line)?;

    if rest.get(1) != Some(&Token::In) {
        return Err(ParseError::ExpectedIn { line });
    }

    let bound = strip_colon(&rest[2..], &Token::Yugma, line)?;
    if bound.is_empty() {
        return Err(ParseError::ExpectedLoopBound { line });
    }

    let body = parse_block(lines, &Token::Yugma, line)?;

    Ok(Statement::For { var,
                        bound: join_tokens(bound),
                        body })
}

/// Parses a while loop.
///
/// Syntax:
/// ```text
///     yatra <test...> :
///         <block>
/// ```
fn parse_while<'a, I>(lines: &mut Peekable<I>,
                      rest: &[Token],
                      line: usize)
                      -> ParseResult<Statement>
    where I: Iterator<Item = &'a LogicalLine>
{
    let test = strip_colon(rest, &Token::Yatra, line)?;
    let body = parse_block(lines, &Token::Yatra, line)?;

    Ok(Statement::While { test: join_tokens(test),
                          body })
}

/// Parses an assignment of the form `<identifier> = <value...>`.
///
/// # Errors
/// `InvalidAssignment` if the target is not an identifier directly followed
/// by `=`, or if nothing follows the `=`.
fn parse_assignment(tokens: &[Token], line: usize) -> ParseResult<Statement> {
    match tokens {
        [Token::Identifier(target), Token::Equals, value @ ..] if !value.is_empty() => {
            Ok(Statement::Assign { target: target.clone(),
                                   value:  join_tokens(value), })
        },
        _ => Err(ParseError::InvalidAssignment { line }),
    }
}
