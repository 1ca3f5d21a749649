//! Unit price.

use core::str::FromStr;
use core::cmp::Ordering;
use serde::Serialize;

use stockview_core::DomainError;

/// Unit price as a decimal number.
///
/// Non-negativity is not checked; the inventory file is trusted on this point.
/// `NaN` and infinities parse like any other decimal.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn as_f64(&self) -> f64 {
        self.0
    }

    /// Ordering used for ranking prices.
    ///
    /// `NaN` compares below every number (and equal to itself), so it sorts
    /// last in a descending ranking. Zeroes of either sign compare equal.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self.0.is_nan(), other.0.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.0.partial_cmp(&other.0).unwrap_or(Ordering::Equal),
        }
    }
}

impl From<f64> for Price {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

/// Shortest decimal form that round-trips: `9.99`, `10`, `12.5`.
impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Price {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<f64>()
            .map_err(|e| DomainError::validation(format!("price {s:?}: {e}")))?;
        Ok(Self(value))
    }
}
