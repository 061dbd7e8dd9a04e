use std::fmt;

use logos::Logos;
use tracing::trace;

/// Represents a lexeme on one logical line.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Whitespace separates tokens; characters that match no variant are dropped.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Hash)]
#[logos(skip r"[ \t\f\r\n]+")]
pub enum Token {
    /// `bhava`, opens a labeled block.
    #[token("bhava")]
    Bhava,
    /// `kar`, defines a function.
    #[token("kar")]
    Kar,
    /// `yadi`, opens a conditional.
    #[token("yadi")]
    Yadi,
    /// `anya`, opens the else-branch of a conditional.
    #[token("anya")]
    Anya,
    /// `yugma`, opens a counted loop.
    #[token("yugma")]
    Yugma,
    /// `yatra`, opens a while loop.
    #[token("yatra")]
    Yatra,
    /// `ch`, prints a value.
    #[token("ch")]
    Ch,
    /// `in`
    #[token("in")]
    In,
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Single-quoted string literal tokens, such as `'Namaste'`. The payload
    /// excludes the quotes.
    #[regex(r"'[^']*'", parse_string)]
    Str(String),
    /// Identifier tokens; variable or function names such as `nama`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `=`
    #[token("=")]
    Equals,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `:`
    #[token(":")]
    Colon,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bhava => f.write_str("bhava"),
            Self::Kar => f.write_str("kar"),
            Self::Yadi => f.write_str("yadi"),
            Self::Anya => f.write_str("anya"),
            Self::Yugma => f.write_str("yugma"),
            Self::Yatra => f.write_str("yatra"),
            Self::Ch => f.write_str("ch"),
            Self::In => f.write_str("in"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "'{s}'"),
            Self::Identifier(name) => f.write_str(name),
            Self::EqualEqual => f.write_str("=="),
            Self::BangEqual => f.write_str("!="),
            Self::Less => f.write_str("<"),
            Self::Greater => f.write_str(">"),
            Self::Equals => f.write_str("="),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::Star => f.write_str("*"),
            Self::Slash => f.write_str("/"),
            Self::Colon => f.write_str(":"),
        }
    }
}

/// One element of the lexer output.
///
/// The parser never sees a flat token stream: it sees one `Tokens` tuple per
/// non-blank source line, interleaved with the structural `Indent` and
/// `Dedent` markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogicalLine {
    /// Leading whitespace grew compared to the enclosing block.
    Indent {
        /// The line that opened the deeper level.
        line: usize,
    },
    /// One indentation level was closed.
    Dedent {
        /// The line that closed the level, or one past the last line for the
        /// flush at end of input.
        line: usize,
    },
    /// All lexemes of one source line.
    Tokens {
        /// The lexemes, in source order. Never empty.
        tokens: Vec<Token>,
        /// The 1-based source line number.
        line:   usize,
    },
}

impl LogicalLine {
    /// Returns the source line this element refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Indent { line } | Self::Dedent { line } | Self::Tokens { line, .. } => *line,
        }
    }
}

impl fmt::Display for LogicalLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Indent { .. } => f.write_str("INDENT"),
            Self::Dedent { .. } => f.write_str("DEDENT"),
            Self::Tokens { tokens, line } => write!(f, "{line:>4}: ({})", join_tokens(tokens)),
        }
    }
}

/// Converts source text into logical-line token tuples.
///
/// Blank lines, and lines holding nothing the lexer recognizes, are dropped
/// without touching the indentation stack. Leading whitespace is measured in
/// characters. All indentation levels still open at the end of the input are
/// closed with trailing `Dedent` markers, so markers are always balanced.
///
/// # Example
/// ```
/// use sabdastra::toolchain::lexer::{LogicalLine, Token, tokenize};
///
/// let lines = tokenize("yugma i in 3:\n    ch i\n");
///
/// assert_eq!(lines.len(), 4);
/// assert!(matches!(lines[1], LogicalLine::Indent { line: 2 }));
/// assert!(matches!(lines[3], LogicalLine::Dedent { .. }));
///
/// let LogicalLine::Tokens { tokens, .. } = &lines[2] else { panic!() };
/// assert_eq!(tokens, &vec![Token::Ch, Token::Identifier("i".to_string())]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<LogicalLine> {
    let mut lines = Vec::new();
    let mut indents = IndentStack::new();
    let mut last_line = 0;

    for (index, text) in source.lines().enumerate() {
        let line = index + 1;
        last_line = line;

        let tokens = lex_line(text);
        if tokens.is_empty() {
            continue;
        }

        let width = text.chars().take_while(|c| c.is_whitespace()).count();
        indents.adjust(width, line, &mut lines);

        lines.push(LogicalLine::Tokens { tokens, line });
    }

    indents.flush(last_line + 1, &mut lines);

    trace!(count = lines.len(), "tokenized source");
    lines
}

/// Splits a single line of text into lexemes.
///
/// Unrecognized characters, and integer literals too large for `i64`, are
/// skipped. This is also how the compiler re-reads expression text.
///
/// # Example
/// ```
/// use sabdastra::toolchain::lexer::{Token, lex_line};
///
/// let tokens = lex_line("x = 'a' + (7)!");
/// assert_eq!(tokens,
///            vec![Token::Identifier("x".to_string()),
///                 Token::Equals,
///                 Token::Str("a".to_string()),
///                 Token::Plus,
///                 Token::Integer(7)]);
/// ```
#[must_use]
pub fn lex_line(text: &str) -> Vec<Token> {
    Token::lexer(text).filter_map(Result::ok).collect()
}

/// Joins lexemes back into text, separated by single spaces.
///
/// # Example
/// ```
/// use sabdastra::toolchain::lexer::{join_tokens, lex_line};
///
/// assert_eq!(join_tokens(&lex_line("1+2   *3")), "1 + 2 * 3");
/// ```
#[must_use]
pub fn join_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}

/// The stack of open indentation widths.
///
/// The bottom entry is always `0`. Widths only grow between dedent events.
struct IndentStack {
    widths: Vec<usize>,
}

impl IndentStack {
    fn new() -> Self {
        Self { widths: vec![0] }
    }

    fn top(&self) -> usize {
        self.widths.last().copied().unwrap_or(0)
    }

    /// Emits the markers needed to move from the current level to `width`.
    ///
    /// A dedent that lands between two open levels closes the deeper one and
    /// then opens a new level at `width`.
    fn adjust(&mut self, width: usize, line: usize, out: &mut Vec<LogicalLine>) {
        while width < self.top() {
            self.widths.pop();
            out.push(LogicalLine::Dedent { line });
        }
        if width > self.top() {
            self.widths.push(width);
            out.push(LogicalLine::Indent { line });
        }
    }

    /// Closes every level still open above the base.
    fn flush(&mut self, line: usize, out: &mut Vec<LogicalLine>) {
        while self.widths.len() > 1 {
            self.widths.pop();
            out.push(LogicalLine::Dedent { line });
        }
    }
}

/// Parses an integer literal from the current token slice.
///
/// Returns `None` when the literal does not fit in an `i64`, which makes the
/// lexer skip it.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Strips the surrounding quotes from a string literal.
fn parse_string(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}
