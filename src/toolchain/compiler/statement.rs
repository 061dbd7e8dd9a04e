use tracing::trace;

use crate::{
    ast::Statement,
    error::CompileError,
    toolchain::{
        compiler::{CompileResult, Compiler, constant_pool::Constant, instruction::Instruction},
        lexer::{Token, lex_line},
    },
};

impl Compiler {
    pub(super) fn compile_statement(&mut self, statement: &Statement) -> CompileResult<()> {
        trace!(kind = statement.kind(), at = self.emitter.here(), "lowering statement");

        match statement {
            Statement::LabeledBlock { body, .. } => self.compile_block(body),
            Statement::FunctionDef { name, body, .. } => self.compile_function(name, body),
            Statement::If { test, body, orelse } => self.compile_if(test, body, orelse),
            Statement::For { var, bound, body } => self.compile_for(var, bound, body),
            Statement::While { test, body } => self.compile_while(test, body),
            Statement::Print { value } => {
                self.compile_expression(value)?;
                self.emitter.emit(Instruction::Print);
                Ok(())
            },
            Statement::Assign { target, value } => {
                self.compile_expression(value)?;
                self.emitter.emit(Instruction::StoreVar(target.clone()));
                Ok(())
            },
            Statement::Call { text } => self.compile_call(text),
        }
    }

    /// Lowers a conditional.
    ///
    /// ```text
    ///         <test>
    ///         JUMP_IF_FALSE else
    ///         <body>
    ///         JUMP end
    /// else:   <orelse>
    /// end:
    /// ```
    fn compile_if(&mut self,
                  test: &str,
                  body: &[Statement],
                  orelse: &[Statement])
                  -> CompileResult<()> {
        self.compile_expression(test)?;
        let to_else = self.emitter.emit_jump_if_false();

        self.compile_block(body)?;
        let to_end = self.emitter.emit_jump();

        self.emitter.patch_here(to_else);
        self.compile_block(orelse)?;
        self.emitter.patch_here(to_end);

        Ok(())
    }

    /// Lowers a counted loop.
    ///
    /// ```text
    ///         LOAD_CONST 0
    ///         STORE_VAR var
    /// head:   LOOP_START
    ///         LOAD_VAR var
    ///         <bound>
    ///         LT
    ///         JUMP_IF_FALSE exit
    ///         <body>
    ///         LOAD_VAR var
    ///         LOAD_CONST 1
    ///         ADD
    ///         STORE_VAR var
    ///         JUMP head
    /// exit:   LOOP_END
    /// ```
    /// The bound is re-evaluated on every iteration.
    fn compile_for(&mut self, var: &str, bound: &str, body: &[Statement]) -> CompileResult<()> {
        let zero = self.constants.intern(Constant::Integer(0));
        self.emitter.emit(Instruction::LoadConst(zero));
        self.emitter.emit(Instruction::StoreVar(var.to_string()));

        let head = self.emitter.emit(Instruction::LoopStart);
        self.emitter.emit(Instruction::LoadVar(var.to_string()));
        self.compile_chain(&lex_line(bound), bound)?;
        self.emitter.emit(Instruction::Less);
        let exit = self.emitter.emit_jump_if_false();

        self.compile_block(body)?;

        let one = self.constants.intern(Constant::Integer(1));
        self.emitter.emit(Instruction::LoadVar(var.to_string()));
        self.emitter.emit(Instruction::LoadConst(one));
        self.emitter.emit(Instruction::Add);
        self.emitter.emit(Instruction::StoreVar(var.to_string()));
        self.emitter.emit(Instruction::Jump(head));

        self.emitter.patch_here(exit);
        self.emitter.emit(Instruction::LoopEnd);

        Ok(())
    }

    /// Lowers a while loop.
    ///
    /// ```text
    /// head:   LOOP_START
    ///         <test>
    ///         JUMP_IF_FALSE exit
    ///         <body>
    ///         JUMP head
    /// exit:   LOOP_END
    /// ```
    fn compile_while(&mut self, test: &str, body: &[Statement]) -> CompileResult<()> {
        let head = self.emitter.emit(Instruction::LoopStart);
        self.compile_expression(test)?;
        let exit = self.emitter.emit_jump_if_false();

        self.compile_block(body)?;
        self.emitter.emit(Instruction::Jump(head));

        self.emitter.patch_here(exit);
        self.emitter.emit(Instruction::LoopEnd);

        Ok(())
    }

    /// Lays out a function body out of line.
    ///
    /// ```text
    ///         JUMP over
    /// entry:  <body>
    ///         RETURN
    /// over:
    /// ```
    /// A forward declaration emits an empty body only when no definition
    /// anywhere in the program supplies one, and only the first time.
    fn compile_function(&mut self, name: &str, body: &[Statement]) -> CompileResult<()> {
        let Some(function) = self.functions.get(name) else {
            return Err(CompileError::UndefinedFunction { name: name.to_string() });
        };

        let emits = !body.is_empty() || (!function.has_body && function.entry.is_none());
        if !emits {
            return Ok(());
        }

        let over = self.emitter.emit_jump();
        let entry = self.emitter.here();
        if let Some(function) = self.functions.get_mut(name) {
            function.entry = Some(entry);
        }

        self.compile_block(body)?;
        self.emitter.emit(Instruction::Return);
        self.emitter.patch_here(over);

        Ok(())
    }

    /// Lowers a call line.
    ///
    /// The text is re-lexed as `callee arg*`. Each argument is a single
    /// operand; arguments are evaluated left to right, stored into the
    /// callee's parameter names, and then `CALL` transfers control. The call
    /// target is patched in [`Compiler::finish`].
    fn compile_call(&mut self, text: &str) -> CompileResult<()> {
        let tokens = lex_line(text);
        let Some((Token::Identifier(name), args)) = tokens.split_first() else {
            return Err(CompileError::InvalidCall { text: text.to_string() });
        };

        let Some(function) = self.functions.get(name) else {
            return Err(CompileError::UndefinedFunction { name: name.clone() });
        };
        if function.params.len() != args.len() {
            return Err(CompileError::ArityMismatch { name:     name.clone(),
                                                     expected: function.params.len(),
                                                     found:    args.len(), });
        }
        let params = function.params.clone();

        for arg in args {
            self.compile_operand(arg, text)?;
        }
        for param in params.into_iter().rev() {
            self.emitter.emit(Instruction::StoreVar(param));
        }

        let call = self.emitter.emit_call();
        self.calls.push((call, name.clone()));

        Ok(())
    }
}
