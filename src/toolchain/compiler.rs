use std::{collections::HashMap, fmt};

use tracing::{debug, debug_span};

use crate::{
    ast::Statement,
    error::CompileError,
    toolchain::compiler::{
        constant_pool::ConstantPool,
        emitter::{Emitter, Patch},
        instruction::Instruction,
    },
};

/// The constant pool.
///
/// Stores integer and string literals by dense, zero-based id.
pub mod constant_pool;
/// Opcodes and their operands.
pub mod instruction;

mod emitter;
mod expr;
mod statement;

pub type CompileResult<T> = Result<T, CompileError>;

/// A compiled program: the instruction array and the constants it uses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// The flat instruction array. Jump targets index into it.
    pub instructions: Vec<Instruction>,
    /// Literals referenced by `LOAD_CONST`.
    pub constants:    ConstantPool,
}

impl fmt::Display for Program {
    /// Writes a disassembly listing, one instruction per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, instruction) in self.instructions.iter().enumerate() {
            write!(f, "{index:04}  {instruction}")?;
            if let Instruction::LoadConst(id) = instruction
               && let Some(constant) = self.constants.get(*id)
            {
                write!(f, "  ({constant})")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Lowers a program to bytecode.
///
/// Compilation runs in two passes over the AST. The first collects every
/// function signature, so calls may appear before the definition they
/// target. The second emits code; jumps are emitted with placeholder targets
/// and backpatched as soon as their destination is known, and call targets
/// are patched once every function body has been placed.
///
/// # Errors
/// - `InvalidExpression` for expression text the compiler cannot lower.
/// - `InvalidCall`, `UndefinedFunction` or `ArityMismatch` for bad calls.
/// - `FunctionAlreadyDefined` or `ConflictingDeclaration` for clashing
///   definitions.
///
/// # Example
/// ```
/// use sabdastra::{
///     ast::Statement,
///     toolchain::compiler::{compile, constant_pool::ConstId, instruction::Instruction},
/// };
///
/// let program = compile(&[Statement::Print { value: "1 + 2".to_string() }]).unwrap();
///
/// assert_eq!(program.instructions,
///            vec![Instruction::LoadConst(ConstId(0)),
///                 Instruction::LoadConst(ConstId(1)),
///                 Instruction::Add,
///                 Instruction::Print]);
/// ```
pub fn compile(statements: &[Statement]) -> CompileResult<Program> {
    let _span = debug_span!("compile", statements = statements.len()).entered();

    let mut compiler = Compiler::default();
    compiler.declare_functions(statements)?;
    compiler.compile_block(statements)?;
    compiler.finish()
}

/// What the first pass learned about a function.
#[derive(Debug)]
struct FunctionInfo {
    params:   Vec<String>,
    has_body: bool,
    entry:    Option<usize>,
}

#[derive(Debug, Default)]
struct Compiler {
    emitter:   Emitter,
    constants: ConstantPool,
    functions: HashMap<String, FunctionInfo>,
    calls:     Vec<(Patch, String)>,
}

impl Compiler {
    /// Records the signature of every function defined anywhere in
    /// `statements`, including inside nested blocks.
    fn declare_functions(&mut self, statements: &[Statement]) -> CompileResult<()> {
        for statement in statements {
            match statement {
                Statement::FunctionDef { name, params, body } => {
                    self.declare(name, params, !body.is_empty())?;
                    self.declare_functions(body)?;
                },
                Statement::LabeledBlock { body, .. }
                | Statement::For { body, .. }
                | Statement::While { body, .. } => self.declare_functions(body)?,
                Statement::If { body, orelse, .. } => {
                    self.declare_functions(body)?;
                    self.declare_functions(orelse)?;
                },
                Statement::Print { .. } | Statement::Assign { .. } | Statement::Call { .. } => {},
            }
        }
        Ok(())
    }

    fn declare(&mut self, name: &str, params: &[String], has_body: bool) -> CompileResult<()> {
        let Some(existing) = self.functions.get_mut(name) else {
            self.functions.insert(name.to_string(),
                                  FunctionInfo { params: params.to_vec(),
                                                 has_body,
                                                 entry: None });
            return Ok(());
        };

        if existing.params != params {
            return Err(CompileError::ConflictingDeclaration { name: name.to_string() });
        }
        if existing.has_body && has_body {
            return Err(CompileError::FunctionAlreadyDefined { name: name.to_string() });
        }
        existing.has_body |= has_body;

        Ok(())
    }

    fn compile_block(&mut self, statements: &[Statement]) -> CompileResult<()> {
        for statement in statements {
            self.compile_statement(statement)?;
        }
        Ok(())
    }

    /// Resolves call targets and hands out the finished program.
    fn finish(self) -> CompileResult<Program> {
        let Self { mut emitter,
                   constants,
                   functions,
                   calls, } = self;

        for (patch, name) in calls {
            let entry = functions.get(&name).and_then(|function| function.entry);
            let Some(entry) = entry else {
                return Err(CompileError::UndefinedFunction { name });
            };
            emitter.patch(patch, entry);
        }

        let instructions = emitter.finish()?;

        debug!(instructions = instructions.len(),
               constants = constants.len(),
               "compiled program");

        Ok(Program { instructions,
                     constants })
    }
}
