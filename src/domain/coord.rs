use std::fmt;

use super::error::DomainError;

/// Fixed-point coordinate using i64 micro-degrees (multiply by 1,000,000)
/// Represents values with 6 decimal places of precision
///
/// Rendering goes through integer arithmetic only, so the decimal separator
/// is always `.` regardless of process locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Coord(i64);

impl Coord {
    const SCALE: i64 = 1_000_000;

    /// Create from raw micro-degree value (for internal use)
    pub fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Get raw micro-degree value
    pub fn raw(&self) -> i64 {
        self.0
    }

    /// Round a degree value to the nearest micro-degree
    ///
    /// Non-finite inputs are rejected: they would otherwise interpolate into
    /// the SQL output as `NaN`/`inf` tokens.
    pub fn from_degrees(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() {
            return Err(DomainError::NonFiniteCoordinate(value));
        }
        Ok(Self((value * Self::SCALE as f64).round() as i64))
    }

    /// Convert back to degrees
    pub fn to_degrees(&self) -> f64 {
        self.0 as f64 / Self::SCALE as f64
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs_value = self.0.unsigned_abs();
        let integer_part = abs_value / Self::SCALE as u64;
        let fractional_part = abs_value % Self::SCALE as u64;

        let sign = if self.0 < 0 { "-" } else { "" };
        if fractional_part == 0 {
            write!(f, "{}{}", sign, integer_part)
        } else {
            let digits = format!("{:06}", fractional_part);
            write!(f, "{}{}.{}", sign, integer_part, digits.trim_end_matches('0'))
        }
    }
}
