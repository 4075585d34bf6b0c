use crate::error::{Error, ErrorCode, Result};

/// The result type a calculation was asked for.
///
/// Integer modes range-check every operand and intermediate result and
/// truncate toward zero; float mode passes values through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Float,
    /// Signed 32-bit integer results.
    Signed,
    /// Unsigned 32-bit integer results.
    Unsigned,
}

impl Mode {
    pub fn is_integer(self) -> bool {
        !matches!(self, Mode::Float)
    }

    /// Check `value` against the range of this mode and truncate it in the
    /// integer modes.
    pub fn check(self, value: f64) -> Result<f64> {
        match self {
            Mode::Float => Ok(value),
            Mode::Signed => {
                if value < f64::from(i32::MIN) {
                    Err(Error::new(ErrorCode::IntegerUnderflow, "Integer underflow."))
                } else if value > f64::from(i32::MAX) {
                    Err(Error::new(ErrorCode::IntegerOverflow, "Integer overflow."))
                } else {
                    Ok(value.trunc())
                }
            }
            Mode::Unsigned => {
                if value < 0.0 {
                    Err(Error::new(
                        ErrorCode::IntegerUnderflow,
                        "Unsigned integer underflow.",
                    ))
                } else if value > f64::from(u32::MAX) {
                    Err(Error::new(
                        ErrorCode::IntegerOverflow,
                        "Unsigned integer overflow.",
                    ))
                } else {
                    Ok(value.trunc())
                }
            }
        }
    }
}
