/// The dispatch loop and execution state.
///
/// Defines the caller-owned `Environment` and the `Vm` that runs a compiled
/// program against it.
pub mod core;

/// Arithmetic and comparison operators.
///
/// Implements the binary opcodes: checked integer arithmetic, true division,
/// string concatenation and the four comparisons.
pub mod arith;
