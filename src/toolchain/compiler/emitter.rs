use crate::{error::CompileError, toolchain::compiler::instruction::Instruction};

/// Operand written into a jump or call until its real target is known.
const PLACEHOLDER: usize = usize::MAX;

/// A jump or call emitted with a placeholder target.
///
/// The handle is consumed by [`Emitter::patch`], so every placeholder is
/// patched at most once. [`Emitter::finish`] rejects any that were never
/// patched.
#[must_use = "an emitted jump must be patched"]
#[derive(Debug)]
pub(super) struct Patch {
    index: usize,
}

/// Append-only instruction arena with backpatching.
#[derive(Debug, Default)]
pub(super) struct Emitter {
    code: Vec<Instruction>,
}

impl Emitter {
    /// Index the next emitted instruction will occupy.
    pub(super) const fn here(&self) -> usize {
        self.code.len()
    }

    /// Appends an instruction and returns its index.
    pub(super) fn emit(&mut self, instruction: Instruction) -> usize {
        let index = self.code.len();
        self.code.push(instruction);
        index
    }

    pub(super) fn emit_jump_if_false(&mut self) -> Patch {
        Patch { index: self.emit(Instruction::JumpIfFalse(PLACEHOLDER)) }
    }

    pub(super) fn emit_jump(&mut self) -> Patch {
        Patch { index: self.emit(Instruction::Jump(PLACEHOLDER)) }
    }

    pub(super) fn emit_call(&mut self) -> Patch {
        Patch { index: self.emit(Instruction::Call(PLACEHOLDER)) }
    }

    /// Overwrites the placeholder target of `patch` with `target`.
    pub(super) fn patch(&mut self, patch: Patch, target: usize) {
        if let Some(Instruction::JumpIfFalse(slot) | Instruction::Jump(slot) | Instruction::Call(slot)) =
            self.code.get_mut(patch.index)
        {
            *slot = target;
        }
    }

    /// Points `patch` at the next instruction to be emitted.
    pub(super) fn patch_here(&mut self, patch: Patch) {
        let target = self.here();
        self.patch(patch, target);
    }

    /// Returns the finished instruction array.
    ///
    /// # Errors
    /// `UnresolvedJump` if any placeholder is still in place.
    pub(super) fn finish(self) -> Result<Vec<Instruction>, CompileError> {
        if let Some(index) = self.code.iter().position(|i| i.target() == Some(PLACEHOLDER)) {
            return Err(CompileError::UnresolvedJump { index });
        }
        Ok(self.code)
    }
}
