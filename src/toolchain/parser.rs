/// Core parser logic and program entry point.
///
/// Defines the `ParseResult` alias and walks the top level of a program,
/// handing each tuple to the statement parser.
pub mod core;

/// Block parsing.
///
/// A block is exactly one `Indent` … `Dedent` span following a statement that
/// ends in `:`.
pub mod block;

/// Statement parsing.
///
/// Dispatches on the first lexeme of a tuple and builds the matching
/// `Statement` variant.
pub mod statement;

/// Shared helpers for the statement parsers.
///
/// Provides the `:` terminator check, name extraction and text joining used
/// by several statement kinds.
pub mod utils;
