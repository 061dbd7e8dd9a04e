use crate::{
    error::CompileError,
    toolchain::{
        compiler::{
            CompileResult, Compiler,
            constant_pool::Constant,
            instruction::Instruction,
        },
        lexer::{Token, lex_line},
    },
};

impl Compiler {
    /// Lowers expression text to stack code.
    ///
    /// The text is re-lexed and must have the shape
    /// `chain [comparison chain]`, where a chain is a sequence of operands
    /// joined by `+ - * /`. Chains are evaluated strictly left to right:
    /// there is no precedence and there are no parentheses, so `1 + 2 * 3`
    /// computes `(1 + 2) * 3`.
    pub(super) fn compile_expression(&mut self, text: &str) -> CompileResult<()> {
        let tokens = lex_line(text);
        let comparisons = tokens.iter()
                                .enumerate()
                                .filter_map(|(index, token)| comparison_instruction(token).map(|op| (index, op)))
                                .collect::<Vec<_>>();

        match comparisons.as_slice() {
            [] => self.compile_chain(&tokens, text),
            [(at, comparison)] => {
                self.compile_chain(&tokens[..*at], text)?;
                self.compile_chain(&tokens[at + 1..], text)?;
                self.emitter.emit(comparison.clone());
                Ok(())
            },
            _ => Err(invalid(text, "only one comparison is allowed")),
        }
    }

    /// Lowers a left-to-right arithmetic chain.
    ///
    /// Grammar: `chain := operand (("+" | "-" | "*" | "/") operand)*`
    pub(super) fn compile_chain(&mut self, tokens: &[Token], text: &str) -> CompileResult<()> {
        let Some((first, rest)) = tokens.split_first() else {
            return Err(invalid(text, "expected a value"));
        };

        self.compile_operand(first, text)?;

        let mut rest = rest.iter();
        while let Some(operator) = rest.next() {
            let instruction = arithmetic_instruction(operator).ok_or_else(|| {
                                  invalid(text, format!("expected an operator, found '{operator}'"))
                              })?;
            let operand = rest.next()
                              .ok_or_else(|| invalid(text, format!("expected a value after '{operator}'")))?;

            self.compile_operand(operand, text)?;
            self.emitter.emit(instruction);
        }

        Ok(())
    }

    /// Lowers a single operand: an integer or string literal, or a variable.
    pub(super) fn compile_operand(&mut self, token: &Token, text: &str) -> CompileResult<()> {
        let instruction = match token {
            Token::Integer(n) => Instruction::LoadConst(self.constants.intern(Constant::Integer(*n))),
            Token::Str(s) => Instruction::LoadConst(self.constants.intern(Constant::Str(s.clone()))),
            Token::Identifier(name) => Instruction::LoadVar(name.clone()),
            other => return Err(invalid(text, format!("'{other}' is not a value"))),
        };

        self.emitter.emit(instruction);
        Ok(())
    }
}

const fn arithmetic_instruction(token: &Token) -> Option<Instruction> {
    match token {
        Token::Plus => Some(Instruction::Add),
        Token::Minus => Some(Instruction::Sub),
        Token::Star => Some(Instruction::Mul),
        Token::Slash => Some(Instruction::Div),
        _ => None,
    }
}

const fn comparison_instruction(token: &Token) -> Option<Instruction> {
    match token {
        Token::EqualEqual => Some(Instruction::Equal),
        Token::BangEqual => Some(Instruction::NotEqual),
        Token::Less => Some(Instruction::Less),
        Token::Greater => Some(Instruction::Greater),
        _ => None,
    }
}

fn invalid(text: &str, details: impl Into<String>) -> CompileError {
    CompileError::InvalidExpression { expression: text.to_string(),
                                      details:    details.into(), }
}
