use crate::{
    error::ParseError,
    toolchain::{lexer::Token, parser::core::ParseResult},
};

/// Removes the trailing `:` of a block-opening statement.
///
/// # Parameters
/// - `tokens`: The lexemes after the keyword.
/// - `keyword`: The statement keyword, for error reporting.
/// - `line`: Line number of the statement.
///
/// # Returns
/// The lexemes between the keyword and the `:`.
///
/// # Errors
/// `ExpectedColon` if the last lexeme is not `:`.
pub(in crate::toolchain::parser) fn strip_colon<'t>(tokens: &'t [Token],
                                                    keyword: &Token,
                                                    line: usize)
                                                    -> ParseResult<&'t [Token]> {
    match tokens.split_last() {
        Some((Token::Colon, init)) => Ok(init),
        _ => Err(ParseError::ExpectedColon { keyword: keyword.to_string(),
                                             line }),
    }
}

/// Extracts an identifier used as a name.
///
/// # Errors
/// `ExpectedName` if the token is missing or is not an identifier.
pub(in crate::toolchain::parser) fn expect_name(token: Option<&Token>,
                                                keyword: &Token,
                                                line: usize)
                                                -> ParseResult<String> {
    match token {
        Some(Token::Identifier(name)) => Ok(name.clone()),
        _ => Err(ParseError::ExpectedName { keyword: keyword.to_string(),
                                            line }),
    }
}

/// Collects function parameters, all of which must be identifiers.
///
/// # Errors
/// `InvalidParameter` naming the first lexeme that is not an identifier.
pub(in crate::toolchain::parser) fn parse_params(tokens: &[Token],
                                                 line: usize)
                                                 -> ParseResult<Vec<String>> {
    tokens.iter()
          .map(|token| match token {
              Token::Identifier(name) => Ok(name.clone()),
              other => Err(ParseError::InvalidParameter { token: other.to_string(),
                                                          line }),
          })
          .collect()
}
