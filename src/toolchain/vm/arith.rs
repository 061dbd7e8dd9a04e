use std::cmp::Ordering;

use crate::{
    error::RuntimeError,
    toolchain::value::Value,
    util::num::{cmp_i64_f64, i64_to_f64},
};

/// The arithmetic opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

/// The comparison opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `>`
    Greater,
}

/// Applies an arithmetic operator to two values.
///
/// Two integers combine with checked integer arithmetic. Division always
/// yields a real, and a zero divisor is an error rather than an infinity.
/// Two strings may be concatenated with `+`. Any other mix involving a
/// string or a boolean is a type error; remaining mixes of integers and reals
/// are computed as reals.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand (`a`, pushed first).
/// - `right`: Right operand (`b`, pushed last).
/// - `pc`: Index of the executing instruction, for error reporting.
///
/// # Errors
/// - `DivisionByZero` if `op` is `Div` and `right` is zero.
/// - `Overflow` if integer arithmetic overflows.
/// - `TypeMismatch` for unsupported operand types.
///
/// # Example
/// ```
/// use sabdastra::{
///     error::RuntimeError,
///     toolchain::{
///         value::Value,
///         vm::arith::{ArithmeticOperator, eval_arithmetic},
///     },
/// };
///
/// let half = eval_arithmetic(ArithmeticOperator::Div, &Value::Integer(1), &Value::Integer(2), 0);
/// assert_eq!(half, Ok(Value::Real(0.5)));
///
/// let err = eval_arithmetic(ArithmeticOperator::Div, &Value::Integer(1), &Value::Integer(0), 7);
/// assert_eq!(err, Err(RuntimeError::DivisionByZero { pc: 7 }));
/// ```
pub fn eval_arithmetic(op: ArithmeticOperator,
                       left: &Value,
                       right: &Value,
                       pc: usize)
                       -> Result<Value, RuntimeError> {
    use ArithmeticOperator::{Add, Div, Mul, Sub};

    match (op, left, right) {
        (Add, Value::Str(a), Value::Str(b)) => Ok(Value::Str(format!("{a}{b}"))),
        (Div, _, _) => {
            let dividend = left.as_real(pc)?;
            let divisor = right.as_real(pc)?;
            if divisor == 0.0 {
                return Err(RuntimeError::DivisionByZero { pc });
            }
            Ok(Value::Real(dividend / divisor))
        },
        (_, Value::Integer(a), Value::Integer(b)) => {
            let result = match op {
                Add => a.checked_add(*b),
                Sub => a.checked_sub(*b),
                Mul => a.checked_mul(*b),
                // Division always yields a real.
                Div => None,
            };
            result.map(Value::Integer).ok_or(RuntimeError::Overflow { pc })
        },
        _ => {
            let a = left.as_real(pc)?;
            let b = right.as_real(pc)?;
            let result = match op {
                Add => a + b,
                Sub => a - b,
                Mul => a * b,
                Div => a / b,
            };
            Ok(Value::Real(result))
        },
    }
}

/// Applies a comparison operator to two values, producing a boolean.
///
/// `==` and `!=` accept any pair: numbers compare by exact value across
/// integers and reals, and values of unrelated types are never equal. `<` and `>`
/// accept two numbers or two strings.
///
/// # Errors
/// `TypeMismatch` if `<` or `>` is applied to values that cannot be ordered.
///
/// # Example
/// ```
/// use sabdastra::toolchain::{
///     value::Value,
///     vm::arith::{ComparisonOperator, eval_comparison},
/// };
///
/// let eq = eval_comparison(ComparisonOperator::Equal, &Value::Integer(2), &Value::Real(2.0), 0);
/// assert_eq!(eq, Ok(Value::Bool(true)));
///
/// let lt = eval_comparison(ComparisonOperator::Less, &Value::from("a"), &Value::from("b"), 0);
/// assert_eq!(lt, Ok(Value::Bool(true)));
///
/// assert!(eval_comparison(ComparisonOperator::Less, &Value::from("a"), &Value::Integer(1), 0).is_err());
/// ```
pub fn eval_comparison(op: ComparisonOperator,
                       left: &Value,
                       right: &Value,
                       pc: usize)
                       -> Result<Value, RuntimeError> {
    let result = match op {
        ComparisonOperator::Equal => values_equal(left, right),
        ComparisonOperator::NotEqual => !values_equal(left, right),
        ComparisonOperator::Less => compare(left, right, pc)? == Ordering::Less,
        ComparisonOperator::Greater => compare(left, right, pc)? == Ordering::Greater,
    };

    Ok(Value::Bool(result))
}

#[allow(clippy::float_cmp)]
fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => a == b,
        (Value::Real(a), Value::Real(b)) => a == b,
        (Value::Integer(a), Value::Real(b)) | (Value::Real(b), Value::Integer(a)) => {
            cmp_i64_f64(*a, *b) == Some(Ordering::Equal)
        },
        (Value::Str(a), Value::Str(b)) => a == b,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        _ => false,
    }
}

fn compare(left: &Value, right: &Value, pc: usize) -> Result<Ordering, RuntimeError> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Ok(a.cmp(b)),
        (Value::Str(a), Value::Str(b)) => Ok(a.cmp(b)),
        (Value::Integer(a), Value::Real(b)) => {
            Ok(cmp_i64_f64(*a, *b).unwrap_or_else(|| i64_to_f64(*a).total_cmp(b)))
        },
        (Value::Real(a), Value::Integer(b)) => {
            Ok(cmp_i64_f64(*b, *a).map_or_else(|| a.total_cmp(&i64_to_f64(*b)), Ordering::reverse))
        },
        (Value::Real(a), Value::Real(b)) => Ok(a.total_cmp(b)),
        _ => Err(RuntimeError::TypeMismatch { details: format!("cannot order {} and {}",
                                                               left.type_name(),
                                                               right.type_name()),
                                              pc }),
    }
}
