/// Numeric conversion helpers.
///
/// Integer operands are promoted to `f64` whenever they meet a real operand
/// or take part in a division. Comparisons between integers and reals are
/// done exactly, without going through the rounded promotion.
pub mod num;
