//! # sabdastra
//!
//! sabdastra is a miniature, whitespace-significant teaching language written
//! in Rust. Source text flows through a lexer, a recursive-descent parser and
//! then either a source-to-source transpiler or a bytecode compiler feeding a
//! small stack-based virtual machine.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug_span;

use crate::{
    ast::Statement,
    error::ParseError,
    toolchain::{
        compiler::{Program, compile},
        lexer::tokenize,
        parser::core::parse_program,
        transpiler::transpile,
        vm::core::{Environment, Vm},
    },
};

/// Defines the structure of parsed programs.
///
/// This module declares the `Statement` sum type, one variant per statement
/// kind of the language. Expression and test text is carried verbatim as
/// strings; it is only interpreted by the execution backend that consumes it.
pub mod ast;
/// Provides unified error types for parsing, compiling and executing.
///
/// # Responsibilities
/// - Defines one error enum per failing stage (parser, compiler, VM).
/// - Attaches line numbers or instruction indices for context.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// A fixed catalog of named, prebuilt programs.
///
/// Each entry maps a mantra name to a ready-made AST that can be handed to the
/// transpiler or the compiler without going through the lexer and parser.
pub mod mantra;
/// Orchestrates every stage of the language pipeline.
///
/// This module ties together the lexer, the parser, the transpiler, the
/// bytecode compiler, runtime values and the virtual machine.
///
/// # Responsibilities
/// - Converts source text into logical-line token tuples.
/// - Builds the AST and lowers it either to text or to bytecode.
/// - Executes bytecode against a caller-owned environment.
pub mod toolchain;
/// General utilities for safe numeric conversion.
pub mod util;

/// Parses source text into a list of statements.
///
/// # Examples
/// ```
/// use sabdastra::{ast::Statement, parse_source};
///
/// let program = parse_source("ch 1 + 2 * 3").unwrap();
/// assert_eq!(program, vec![Statement::Print { value: "1 + 2 * 3".to_string() }]);
/// ```
pub fn parse_source(source: &str) -> Result<Vec<Statement>, ParseError> {
    let _span = debug_span!("parse_source", bytes = source.len()).entered();

    let lines = tokenize(source);
    parse_program(&lines)
}

/// Parses source text and renders it in the target scripting convention.
///
/// # Examples
/// ```
/// use sabdastra::transpile_source;
///
/// let text = transpile_source("yugma i in 3:\n    ch i").unwrap();
/// assert_eq!(text, "for i in range(3):\n    print(i)");
/// ```
pub fn transpile_source(source: &str) -> Result<String, ParseError> {
    Ok(transpile(&parse_source(source)?))
}

/// Parses and compiles source text into a bytecode program.
///
/// # Errors
/// Returns an error if the source fails to parse, or if the compiler rejects
/// an expression, a call or a function definition.
pub fn compile_source(source: &str) -> Result<Program, Box<dyn std::error::Error>> {
    let statements = parse_source(source)?;
    let program = compile(&statements)?;

    Ok(program)
}

/// Compiles and runs source text, returning the printed output lines.
///
/// Every variable the program assigns is left in `env` afterwards. When
/// execution fails part-way, the lines printed so far are discarded by this
/// helper; drive a [`Vm`] directly to keep them.
///
/// # Errors
/// Returns an error if parsing, compiling or executing fails.
///
/// # Examples
/// ```
/// use sabdastra::{run_source, toolchain::vm::core::Environment};
///
/// let mut env = Environment::new();
/// let output = run_source("x = 6 / 4\nch x", &mut env).unwrap();
/// assert_eq!(output, vec!["1.5".to_string()]);
///
/// // Division by zero aborts the run.
/// assert!(run_source("ch 1 / 0", &mut env).is_err());
/// ```
pub fn run_source(source: &str,
                  env: &mut Environment)
                  -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let program = compile_source(source)?;

    let mut vm = Vm::new(&program);
    vm.run(env)?;

    Ok(vm.into_output())
}
