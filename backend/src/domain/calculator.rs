//! Integer arithmetic service.

use thiserror::Error as ThisError;

use crate::domain::Error;

/// Arithmetic failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum CalculatorError {
    /// The result does not fit in a signed 64-bit integer.
    #[error("{a} + {b} overflows a 64-bit integer")]
    Overflow { a: i64, b: i64 },
}

/// Stateless calculator.
#[derive(Debug, Default, Clone, Copy)]
pub struct Calculator;

impl Calculator {
    /// Add two integers, refusing to wrap on overflow.
    ///
    /// # Examples
    /// ```
    /// use user_registry::domain::Calculator;
    ///
    /// assert_eq!(Calculator.add(5, 3), Ok(8));
    /// assert!(Calculator.add(i64::MAX, 1).is_err());
    /// ```
    pub fn add(self, a: i64, b: i64) -> Result<i64, CalculatorError> {
        a.checked_add(b).ok_or(CalculatorError::Overflow { a, b })
    }
}

impl From<CalculatorError> for Error {
    fn from(error: CalculatorError) -> Self {
        Error::invalid_request(error.to_string())
    }
}
