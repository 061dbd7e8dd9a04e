use std::fmt;

use crate::{
    error::RuntimeError,
    toolchain::compiler::constant_pool::Constant,
    util::num::i64_to_f64,
};

/// Represents a runtime value in the virtual machine.
///
/// This enum models every value that can sit on the operand stack or be bound
/// in the environment.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64 bit integer. Integer literals and arithmetic on integers produce
    /// this variant.
    Integer(i64),
    /// A double precision floating-point number. Division always produces
    /// this variant.
    Real(f64),
    /// A string.
    Str(String),
    /// A boolean, produced by the comparison operators.
    Bool(bool),
}

impl Default for Value {
    /// The value read from an unbound variable.
    fn default() -> Self {
        Self::Integer(0)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&Constant> for Value {
    fn from(constant: &Constant) -> Self {
        match constant {
            Constant::Integer(n) => Self::Integer(*n),
            Constant::Str(s) => Self::Str(s.clone()),
        }
    }
}

impl Value {
    /// Returns `false` for zero, the empty string and `False`.
    ///
    /// # Example
    /// ```
    /// use sabdastra::toolchain::value::Value;
    ///
    /// assert!(!Value::Integer(0).is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// assert!(Value::Real(0.5).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Integer(n) => *n != 0,
            Self::Real(r) => *r != 0.0,
            Self::Str(s) => !s.is_empty(),
            Self::Bool(b) => *b,
        }
    }

    /// Returns a short name of the value's type, for error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Str(_) => "string",
            Self::Bool(_) => "boolean",
        }
    }

    /// Converts a numeric value to `f64`, rounding large integers.
    ///
    /// # Parameters
    /// - `pc`: Index of the executing instruction, for error reporting.
    ///
    /// # Errors
    /// `TypeMismatch` if the value is not a number.
    pub fn as_real(&self, pc: usize) -> Result<f64, RuntimeError> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => Ok(i64_to_f64(*n)),
            _ => Err(RuntimeError::TypeMismatch { details: format!("expected a number, found {}",
                                                                   self.type_name()),
                                                  pc }),
        }
    }
}

impl fmt::Display for Value {
    /// Formats the value the way `PRINT` writes it.
    ///
    /// Reals always show a fractional part (`2.0`) and switch to exponent
    /// notation below `1e-4` or from `1e16` on (`1e-05`, `1.5e+16`). Strings
    /// are written without quotes and booleans as `True` / `False`.
    ///
    /// # Example
    /// ```
    /// use sabdastra::toolchain::value::Value;
    ///
    /// assert_eq!(Value::Real(2.0).to_string(), "2.0");
    /// assert_eq!(Value::Real(0.0001).to_string(), "0.0001");
    /// assert_eq!(Value::Real(0.00001).to_string(), "1e-05");
    /// assert_eq!(Value::Real(1.5e16).to_string(), "1.5e+16");
    /// assert_eq!(Value::Bool(true).to_string(), "True");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write_real(f, *r),
            Self::Str(s) => f.write_str(s),
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
        }
    }
}

fn write_real(f: &mut fmt::Formatter<'_>, r: f64) -> fmt::Result {
    if r.is_nan() {
        return f.write_str("nan");
    }
    if r.is_infinite() {
        return f.write_str(if r > 0.0 { "inf" } else { "-inf" });
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `1.5e16`.
    let scientific = format!("{r:e}");
    if let Some((mantissa, exponent)) = scientific.split_once('e')
       && let Ok(exponent) = exponent.parse::<i32>()
       && r != 0.0
       && !(-4..16).contains(&exponent)
    {
        let sign = if exponent < 0 { '-' } else { '+' };
        return write!(f, "{mantissa}e{sign}{:02}", exponent.unsigned_abs());
    }

    if r.fract() == 0.0 {
        write!(f, "{r:.1}")
    } else {
        write!(f, "{r}")
    }
}
