/// The lexer module turns source text into logical-line token tuples.
///
/// Each non-blank physical line becomes one tuple of lexemes. Changes in
/// leading whitespace are reported as separate `Indent` and `Dedent` markers,
/// which the parser uses to delimit blocks.
///
/// # Responsibilities
/// - Tracks the indentation stack and keeps markers balanced.
/// - Splits line text into identifiers, keywords, integers, strings and
///   operators.
/// - Silently drops any character it does not recognize.
pub mod lexer;
/// The parser module builds the AST from token tuples.
///
/// Parsing is a single-pass recursive descent keyed on the first lexeme of
/// each tuple. Expression text is captured verbatim and never validated here.
///
/// # Responsibilities
/// - Dispatches each tuple to the matching statement parser.
/// - Parses indented blocks and attaches optional `anya` branches.
/// - Reports syntax errors with line numbers; no partial AST is returned.
pub mod parser;
/// The transpiler module renders an AST as indentation-structured text.
///
/// The rendering follows a generic scripting convention (`if`/`else`, `for`
/// over `range`, `while`, `def`, `print`). It is a pure, total function: every
/// AST has a rendering.
pub mod transpiler;
/// The compiler module lowers an AST to a flat bytecode program.
///
/// # Responsibilities
/// - Interns literals into a dense, zero-based constant pool.
/// - Lowers expressions as left-to-right chains with no precedence.
/// - Emits placeholder jumps and backpatches them once targets are known.
/// - Lays out function bodies out of line and resolves call targets.
pub mod compiler;
/// The value module defines the runtime data types of the VM.
///
/// Values are integers, reals, strings and booleans. The module implements
/// truthiness, display formatting and the arithmetic and comparison
/// operators.
pub mod value;
/// The vm module executes bytecode programs.
///
/// The virtual machine runs an instruction array against an operand stack, a
/// call stack and a caller-owned environment, collecting printed lines in an
/// in-memory output buffer.
pub mod vm;
