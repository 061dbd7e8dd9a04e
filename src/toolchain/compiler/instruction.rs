use std::fmt;

use crate::toolchain::compiler::constant_pool::ConstId;

/// One VM instruction: an opcode together with its operand, if any.
///
/// Jump and call operands are indices into the program's instruction array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// Push the constant with the given id.
    LoadConst(ConstId),
    /// Push the value of a variable, or `0` if it is unbound.
    LoadVar(String),
    /// Pop a value and bind it to a variable.
    StoreVar(String),
    /// Pop a value and append its text to the output.
    Print,
    /// Pop a value and jump to the target if it is falsy.
    JumpIfFalse(usize),
    /// Jump to the target unconditionally.
    Jump(usize),
    /// Push the return address and jump to a function entry.
    Call(usize),
    /// Pop a return address and jump back to it.
    Return,
    /// Pop `b`, pop `a`, push `a + b`.
    Add,
    /// Pop `b`, pop `a`, push `a - b`.
    Sub,
    /// Pop `b`, pop `a`, push `a * b`.
    Mul,
    /// Pop `b`, pop `a`, push `a / b` as a real.
    Div,
    /// Pop `b`, pop `a`, push `a == b`.
    Equal,
    /// Pop `b`, pop `a`, push `a != b`.
    NotEqual,
    /// Pop `b`, pop `a`, push `a < b`.
    Less,
    /// Pop `b`, pop `a`, push `a > b`.
    Greater,
    /// Marks the head of a loop. No effect at runtime.
    LoopStart,
    /// Marks the exit of a loop. No effect at runtime.
    LoopEnd,
}

impl Instruction {
    /// Returns the opcode mnemonic.
    ///
    /// # Example
    /// ```
    /// use sabdastra::toolchain::compiler::instruction::Instruction;
    ///
    /// assert_eq!(Instruction::JumpIfFalse(4).opcode(), "JUMP_IF_FALSE");
    /// ```
    #[must_use]
    pub const fn opcode(&self) -> &'static str {
        match self {
            Self::LoadConst(_) => "LOAD_CONST",
            Self::LoadVar(_) => "LOAD_VAR",
            Self::StoreVar(_) => "STORE_VAR",
            Self::Print => "PRINT",
            Self::JumpIfFalse(_) => "JUMP_IF_FALSE",
            Self::Jump(_) => "JUMP",
            Self::Call(_) => "CALL",
            Self::Return => "RETURN",
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::Equal => "EQ",
            Self::NotEqual => "NE",
            Self::Less => "LT",
            Self::Greater => "GT",
            Self::LoopStart => "LOOP_START",
            Self::LoopEnd => "LOOP_END",
        }
    }

    /// Returns the target of a jump or call instruction.
    #[must_use]
    pub const fn target(&self) -> Option<usize> {
        match self {
            Self::JumpIfFalse(target) | Self::Jump(target) | Self::Call(target) => Some(*target),
            _ => None,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let opcode = self.opcode();

        match self {
            Self::LoadConst(id) => write!(f, "{opcode} {id}"),
            Self::LoadVar(name) | Self::StoreVar(name) => write!(f, "{opcode} {name}"),
            Self::JumpIfFalse(target) | Self::Jump(target) | Self::Call(target) => {
                write!(f, "{opcode} {target}")
            },
            _ => f.write_str(opcode),
        }
    }
}
