// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};

use crate::{CommonResult, LabelFilterError};

pub const RANGE_MIN: f64 = 0.0;
pub const RANGE_MAX: f64 = 1.0;

/// Two sided confidence range `(low, high)` with `0 <= low <= high <= 1`. Serialized as
/// a two element array `[low, high]`.
///
/// Use [`RangeValue::try_new`] for untrusted numbers and [`RangeValue::new_clamped`] for
/// slider positions, which may overshoot or arrive with the thumbs crossed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct RangeValue {
    low: f64,
    high: f64,
}

impl RangeValue {
    /// The full range `(0, 1)`, which filters nothing out.
    pub const FULL: RangeValue = RangeValue {
        low: RANGE_MIN,
        high: RANGE_MAX,
    };

    /// # Errors
    ///
    /// Returns [`LabelFilterError::RangeOutOfBounds`] if either end is outside of
    /// `[0, 1]` (or NaN), and [`LabelFilterError::RangeInverted`] if `low > high`.
    pub fn try_new(low: f64, high: f64) -> CommonResult<Self> {
        for (name, value) in [("low", low), ("high", high)] {
            if !(RANGE_MIN..=RANGE_MAX).contains(&value) {
                return Err(LabelFilterError::RangeOutOfBounds { name, value }.into());
            }
        }
        if low > high {
            return Err(LabelFilterError::RangeInverted { low, high }.into());
        }
        Ok(Self { low, high })
    }

    /// Clamps both ends into `[0, 1]` and swaps them if they are crossed. NaN is treated
    /// as the nearest bound of its side (low -> 0, high -> 1).
    #[must_use]
    pub fn new_clamped(low: f64, high: f64) -> Self {
        let low = if low.is_nan() { RANGE_MIN } else { low.clamp(RANGE_MIN, RANGE_MAX) };
        let high = if high.is_nan() {
            RANGE_MAX
        } else {
            high.clamp(RANGE_MIN, RANGE_MAX)
        };
        if low <= high {
            Self { low, high }
        } else {
            Self {
                low: high,
                high: low,
            }
        }
    }

    #[must_use]
    pub fn low(&self) -> f64 { self.low }

    #[must_use]
    pub fn high(&self) -> f64 { self.high }

    /// `true` for `(0, 1)`. The view uses this to decide whether to offer a "reset".
    #[must_use]
    pub fn is_default(&self) -> bool { *self == Self::FULL }
}

impl Default for RangeValue {
    fn default() -> Self { Self::FULL }
}

impl TryFrom<[f64; 2]> for RangeValue {
    type Error = LabelFilterError;

    fn try_from([low, high]: [f64; 2]) -> std::result::Result<Self, Self::Error> {
        Self::try_new(low, high).map_err(|report| {
            report
                .downcast::<LabelFilterError>()
                .unwrap_or(LabelFilterError::RangeInverted { low, high })
        })
    }
}

impl From<RangeValue> for [f64; 2] {
    fn from(value: RangeValue) -> Self { [value.low, value.high] }
}

impl Display for RangeValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn default_is_full_range() {
        let it = RangeValue::default();
        assert!(it.is_default());
        assert_eq2!((it.low(), it.high()), (0.0, 1.0));
    }

    #[test_case(-0.1, 0.5 ; "low below zero")]
    #[test_case(0.2, 1.01 ; "high above one")]
    #[test_case(f64::NAN, 0.5 ; "nan")]
    fn try_new_rejects_out_of_bounds(low: f64, high: f64) {
        let report = RangeValue::try_new(low, high).unwrap_err();
        assert!(matches!(
            report.downcast_ref::<LabelFilterError>(),
            Some(LabelFilterError::RangeOutOfBounds { .. })
        ));
    }

    #[test]
    fn try_new_rejects_inverted() {
        let report = RangeValue::try_new(0.7, 0.2).unwrap_err();
        assert!(matches!(
            report.downcast_ref::<LabelFilterError>(),
            Some(LabelFilterError::RangeInverted { .. })
        ));
    }

    #[test]
    fn clamped_swaps_and_clamps() {
        assert_eq2!(
            RangeValue::new_clamped(0.9, -3.0),
            RangeValue::try_new(0.0, 0.9).unwrap()
        );
        assert_eq2!(RangeValue::new_clamped(f64::NAN, f64::NAN), RangeValue::FULL);
    }

    #[test]
    fn serde_as_array() {
        let it = RangeValue::try_new(0.25, 0.5).unwrap();
        let json = serde_json::to_string(&it).unwrap();
        assert_eq2!(json, "[0.25,0.5]");
        let back: RangeValue = serde_json::from_str(&json).unwrap();
        assert_eq2!(back, it);
        assert!(serde_json::from_str::<RangeValue>("[0.9,0.1]").is_err());
    }
}
