/// Parsing errors.
///
/// Defines every syntax error the parser can raise: missing `:` terminators,
/// a `yugma` loop without `in`, malformed or dangling `anya` branches, missing
/// blocks and unexpected indentation. A parse error aborts the whole parse.
pub mod parse_error;
/// Compilation errors.
///
/// Raised while lowering an AST to bytecode: expression text the compiler
/// cannot lower, calls to unknown functions, argument count mismatches and
/// conflicting function definitions.
pub mod compile_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while the virtual machine runs
/// a program, such as division by zero, type mismatches, integer overflow and
/// exhausted step or call-depth limits.
pub mod runtime_error;

pub use compile_error::CompileError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
