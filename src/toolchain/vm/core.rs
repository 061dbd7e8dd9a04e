use std::collections::HashMap;

use tracing::{debug, debug_span, trace};

use crate::{
    error::RuntimeError,
    toolchain::{
        compiler::{Program, instruction::Instruction},
        value::Value,
        vm::arith::{ArithmeticOperator, ComparisonOperator, eval_arithmetic, eval_comparison},
    },
};

/// Maximum number of nested calls before execution is aborted.
pub const MAX_CALL_DEPTH: usize = 256;

pub type VmResult<T> = Result<T, RuntimeError>;

/// The variable bindings a program reads and writes.
///
/// There is one flat namespace: function parameters, loop variables and
/// top-level assignments all live here. The environment belongs to the
/// caller, who may inspect it after a run or reuse it for the next one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value bound to `name`, or `0` if it is unbound.
    ///
    /// # Example
    /// ```
    /// use sabdastra::toolchain::{value::Value, vm::core::Environment};
    ///
    /// let mut env = Environment::new();
    /// assert_eq!(env.get("x"), Value::Integer(0));
    ///
    /// env.set("x", Value::from("om"));
    /// assert_eq!(env.get("x"), Value::from("om"));
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Value {
        self.variables.get(name).cloned().unwrap_or_default()
    }

    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.variables.insert(name.into(), value);
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if no variable is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over the bindings in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.variables.iter().map(|(name, value)| (name.as_str(), value))
    }
}

/// A stack-based virtual machine running one compiled program.
///
/// The VM owns its operand stack, call stack, program counter and output
/// buffer; only the environment is supplied from outside. `PRINT` never
/// writes anywhere but the output buffer, and the buffer stays readable after
/// a failed run.
///
/// # Example
/// ```
/// use sabdastra::{
///     compile_source,
///     toolchain::vm::core::{Environment, Vm},
/// };
///
/// let program = compile_source("ch 'start'\nch 1 / 0").unwrap();
/// let mut env = Environment::new();
/// let mut vm = Vm::new(&program);
///
/// assert!(vm.run(&mut env).is_err());
/// assert_eq!(vm.output(), ["start"]);
/// ```
#[derive(Debug)]
pub struct Vm<'p> {
    program:    &'p Program,
    stack:      Vec<Value>,
    calls:      Vec<usize>,
    pc:         usize,
    output:     Vec<String>,
    step_limit: Option<u64>,
    steps:      u64,
}

impl<'p> Vm<'p> {
    /// Creates a VM positioned at the first instruction of `program`.
    #[must_use]
    pub const fn new(program: &'p Program) -> Self {
        Self { program,
               stack: Vec::new(),
               calls: Vec::new(),
               pc: 0,
               output: Vec::new(),
               step_limit: None,
               steps: 0 }
    }

    /// Caps the number of instructions the VM will execute.
    ///
    /// # Example
    /// ```
    /// use sabdastra::{
    ///     compile_source,
    ///     error::RuntimeError,
    ///     toolchain::vm::core::{Environment, Vm},
    /// };
    ///
    /// let program = compile_source("yatra 1:\n    ch 'again'").unwrap();
    /// let mut vm = Vm::new(&program).with_step_limit(100);
    ///
    /// let err = vm.run(&mut Environment::new()).unwrap_err();
    /// assert!(matches!(err, RuntimeError::StepLimitExceeded { limit: 100, .. }));
    /// ```
    #[must_use]
    pub const fn with_step_limit(mut self, limit: u64) -> Self {
        self.step_limit = Some(limit);
        self
    }

    /// Runs the program until the program counter passes the last
    /// instruction.
    ///
    /// Each instruction is fetched, the program counter is advanced, and the
    /// instruction is dispatched. Execution is not restartable: once halted,
    /// normally or by an error, further calls return immediately.
    ///
    /// # Errors
    /// Returns the first runtime error raised. Output produced before the
    /// error remains available through [`Vm::output`].
    pub fn run(&mut self, env: &mut Environment) -> VmResult<()> {
        let _span = debug_span!("vm.run", instructions = self.program.instructions.len()).entered();
        let program = self.program;

        while let Some(instruction) = program.instructions.get(self.pc) {
            if let Some(limit) = self.step_limit
               && self.steps >= limit
            {
                let error = RuntimeError::StepLimitExceeded { limit,
                                                              pc: self.pc };
                return Err(self.halt(error));
            }
            self.steps += 1;

            let pc = self.pc;
            self.pc += 1;

            trace!(pc, %instruction, depth = self.stack.len(), "dispatch");
            if let Err(error) = self.execute(instruction, pc, env) {
                return Err(self.halt(error));
            }
        }

        debug!(steps = self.steps, lines = self.output.len(), "program halted");
        Ok(())
    }

    /// Lines printed so far.
    #[must_use]
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Consumes the VM and returns the printed lines.
    #[must_use]
    pub fn into_output(self) -> Vec<String> {
        self.output
    }

    /// Number of instructions executed so far.
    #[must_use]
    pub const fn steps(&self) -> u64 {
        self.steps
    }

    fn execute(&mut self,
               instruction: &Instruction,
               pc: usize,
               env: &mut Environment)
               -> VmResult<()> {
        match instruction {
            Instruction::LoadConst(id) => {
                let constant = self.program
                                   .constants
                                   .get(*id)
                                   .ok_or(RuntimeError::UnknownConstant { id: id.0, pc })?;
                self.stack.push(Value::from(constant));
            },
            Instruction::LoadVar(name) => self.stack.push(env.get(name)),
            Instruction::StoreVar(name) => {
                let value = self.pop(pc)?;
                env.set(name.clone(), value);
            },
            Instruction::Print => {
                let value = self.pop(pc)?;
                self.output.push(value.to_string());
            },
            Instruction::JumpIfFalse(target) => {
                if !self.pop(pc)?.is_truthy() {
                    self.pc = *target;
                }
            },
            Instruction::Jump(target) => self.pc = *target,
            Instruction::Call(target) => {
                if self.calls.len() >= MAX_CALL_DEPTH {
                    return Err(RuntimeError::CallDepthExceeded { limit: MAX_CALL_DEPTH,
                                                                 pc });
                }
                self.calls.push(self.pc);
                self.pc = *target;
            },
            Instruction::Return => {
                self.pc = self.calls.pop().ok_or(RuntimeError::ReturnOutsideFunction { pc })?;
            },
            Instruction::Add => self.arithmetic(ArithmeticOperator::Add, pc)?,
            Instruction::Sub => self.arithmetic(ArithmeticOperator::Sub, pc)?,
            Instruction::Mul => self.arithmetic(ArithmeticOperator::Mul, pc)?,
            Instruction::Div => self.arithmetic(ArithmeticOperator::Div, pc)?,
            Instruction::Equal => self.comparison(ComparisonOperator::Equal, pc)?,
            Instruction::NotEqual => self.comparison(ComparisonOperator::NotEqual, pc)?,
            Instruction::Less => self.comparison(ComparisonOperator::Less, pc)?,
            Instruction::Greater => self.comparison(ComparisonOperator::Greater, pc)?,
            Instruction::LoopStart | Instruction::LoopEnd => {},
        }

        Ok(())
    }

    /// Moves the program counter past the end so the program cannot resume.
    fn halt(&mut self, error: RuntimeError) -> RuntimeError {
        debug!(steps = self.steps, %error, "program aborted");
        self.pc = self.program.instructions.len();
        self.stack.clear();
        self.calls.clear();
        error
    }

    fn pop(&mut self, pc: usize) -> VmResult<Value> {
        self.stack.pop().ok_or(RuntimeError::StackUnderflow { pc })
    }

    /// Pops `b`, then `a`, and pushes `a op b`.
    fn arithmetic(&mut self, op: ArithmeticOperator, pc: usize) -> VmResult<()> {
        let right = self.pop(pc)?;
        let left = self.pop(pc)?;
        self.stack.push(eval_arithmetic(op, &left, &right, pc)?);
        Ok(())
    }

    fn comparison(&mut self, op: ComparisonOperator, pc: usize) -> VmResult<()> {
        let right = self.pop(pc)?;
        let left = self.pop(pc)?;
        self.stack.push(eval_comparison(op, &left, &right, pc)?);
        Ok(())
    }
}
