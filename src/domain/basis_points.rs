//! Basis-point representation for fee rates.

use core::fmt;

use crate::error::AmmError;

/// Denominator of every basis-point fraction (10 000 bp = 100%).
pub const BPS_DENOMINATOR: u128 = 10_000;

/// A fee rate expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// Rates are exact decimal fractions over [`BPS_DENOMINATOR`]; there is no
/// floating-point representation anywhere in the pricing path.
///
/// # Examples
///
/// ```
/// use hubswap::domain::BasisPoints;
///
/// let bp = BasisPoints::new(30);
/// assert_eq!(bp.get(), 30);
/// assert!(bp.is_valid_percent());
/// assert_eq!(bp.apply(1_000_000).ok(), Some(3_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// 100% expressed in basis points.
    pub const MAX_PERCENT: Self = Self(10_000);

    /// Creates a new `BasisPoints` from a raw `u32` value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns the value widened to `u128` for use in the pricing formulas.
    #[must_use]
    pub const fn as_u128(&self) -> u128 {
        self.0 as u128
    }

    /// Returns `true` if the value is in the valid percentage range (`0..=10_000`).
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        self.0 <= Self::MAX_PERCENT.0
    }

    /// Returns `10 000 − self`, the share of an input that survives the fee.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if the rate exceeds 100%.
    pub const fn complement(&self) -> crate::error::Result<u128> {
        match BPS_DENOMINATOR.checked_sub(self.0 as u128) {
            Some(v) => Ok(v),
            None => Err(AmmError::InvalidFee("fee rate above 100%")),
        }
    }

    /// Half of this rate, rounded down. Used to split one fee across two hops.
    pub const fn half(&self) -> Self {
        Self(self.0 / 2)
    }

    /// Computes `floor(value × self / 10 000)`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the intermediate multiplication overflows.
    pub const fn apply(&self, value: u128) -> crate::error::Result<u128> {
        match value.checked_mul(self.0 as u128) {
            Some(product) => Ok(product / BPS_DENOMINATOR),
            None => Err(AmmError::Overflow("basis points apply overflow")),
        }
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn new_and_get() {
        assert_eq!(BasisPoints::new(30).get(), 30);
    }

    #[test]
    fn constants() {
        assert_eq!(BasisPoints::ZERO.get(), 0);
        assert_eq!(BasisPoints::MAX_PERCENT.get(), 10_000);
    }

    #[test]
    fn is_valid_percent_bounds() {
        assert!(BasisPoints::MAX_PERCENT.is_valid_percent());
        assert!(!BasisPoints::new(10_001).is_valid_percent());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", BasisPoints::new(24)), "24bp");
    }

    // -- complement ---------------------------------------------------------

    #[test]
    fn complement_of_pool_fee() {
        let Ok(c) = BasisPoints::new(24).complement() else {
            panic!("expected Ok");
        };
        assert_eq!(c, 9_976);
    }

    #[test]
    fn complement_above_hundred_percent() {
        let Err(AmmError::InvalidFee(_)) = BasisPoints::new(10_001).complement() else {
            panic!("expected InvalidFee");
        };
    }

    // -- half ---------------------------------------------------------------

    #[test]
    fn half_even() {
        assert_eq!(BasisPoints::new(24).half(), BasisPoints::new(12));
    }

    #[test]
    fn half_odd_rounds_down() {
        assert_eq!(BasisPoints::new(25).half(), BasisPoints::new(12));
    }

    // -- apply --------------------------------------------------------------

    #[test]
    fn apply_protocol_fee() {
        // 6bp of 10_000 = 6
        let Ok(fee) = BasisPoints::new(6).apply(10_000) else {
            panic!("expected Ok");
        };
        assert_eq!(fee, 6);
    }

    #[test]
    fn apply_floors() {
        // 6bp of 9_992 = 5.9952 -> 5
        let Ok(fee) = BasisPoints::new(6).apply(9_992) else {
            panic!("expected Ok");
        };
        assert_eq!(fee, 5);
    }

    #[test]
    fn apply_zero_rate() {
        let Ok(fee) = BasisPoints::ZERO.apply(1_000_000) else {
            panic!("expected Ok");
        };
        assert_eq!(fee, 0);
    }

    #[test]
    fn apply_full_rate() {
        let Ok(fee) = BasisPoints::MAX_PERCENT.apply(1_000) else {
            panic!("expected Ok");
        };
        assert_eq!(fee, 1_000);
    }

    #[test]
    fn apply_overflow() {
        let Err(AmmError::Overflow(_)) = BasisPoints::new(2).apply(u128::MAX) else {
            panic!("expected Overflow");
        };
    }
}
