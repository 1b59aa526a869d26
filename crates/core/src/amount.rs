//! Numeric amounts (unit costs, stock levels, thresholds, consumed quantities).

use core::ops::Mul;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::{DomainError, DomainResult};

/// Largest magnitude at which every integer is exactly representable as `f64`.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A finite number as it appears in inventory and consumption documents.
///
/// Amounts may be fractional and may be negative (stock is never clamped).
/// Integral amounts are written back as JSON integers, so a stock of `100`
/// reduced by `40` is persisted as `60` rather than `60.0`. `Display` follows
/// the same rule.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Deserialize)]
#[serde(try_from = "f64")]
pub struct Amount(f64);

impl Amount {
    pub const ZERO: Amount = Amount(0.0);

    /// Build an amount, rejecting NaN and infinities.
    pub fn try_new(value: f64) -> DomainResult<Self> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(DomainError::validation(format!(
                "amount must be a finite number, got {value}"
            )))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// `self - rhs`, failing if the result overflows to infinity.
    pub fn checked_sub(self, rhs: Amount) -> DomainResult<Amount> {
        Self::try_new(self.0 - rhs.0)
    }

    /// `Some(i)` when the amount is a whole number that round-trips through `i64`.
    fn as_exact_integer(self) -> Option<i64> {
        if self.0.fract() == 0.0 && self.0.abs() < MAX_EXACT_INTEGER {
            Some(self.0 as i64)
        } else {
            None
        }
    }
}

impl TryFrom<f64> for Amount {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<i32> for Amount {
    fn from(value: i32) -> Self {
        Self(f64::from(value))
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_exact_integer() {
            Some(i) => serializer.serialize_i64(i),
            None => serializer.serialize_f64(self.0),
        }
    }
}

impl core::fmt::Display for Amount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.as_exact_integer() {
            Some(i) => write!(f, "{i}"),
            None => write!(f, "{}", self.0),
        }
    }
}

/// Quantity times unit cost, as a plain `f64` total.
impl Mul for Amount {
    type Output = f64;

    fn mul(self, rhs: Amount) -> f64 {
        self.0 * rhs.0
    }
}
