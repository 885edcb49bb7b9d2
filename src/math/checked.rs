//! Checked arithmetic over non-negative integers.
//!
//! The [`CheckedArithmetic`] trait provides fallible arithmetic operations
//! that return [`Result<Self, AmmError>`](crate::error::AmmError) instead
//! of wrapping, saturating, or panicking.
//!
//! # Implementations
//!
//! - `u128`: raw values inside the pricing formulas
//! - [`Amount`]: asset-tagged values; both operands must carry the same asset
//!
//! # Examples
//!
//! ```
//! use hubswap::math::CheckedArithmetic;
//!
//! let sum = 100u128.safe_add(&200);
//! assert_eq!(sum.ok(), Some(300));
//! assert!(1u128.safe_sub(&2).is_err());
//! ```

use crate::domain::Amount;
use crate::error::AmmError;

/// Fallible arithmetic for non-negative integer values.
///
/// Every method returns [`Result<Self, AmmError>`] with a specific error
/// variant so callers can distinguish overflow from underflow from
/// division by zero.
///
/// # Contract
///
/// - **No panics**: all error conditions produce `Err`.
/// - **No saturation**: errors propagate instead.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result exceeds the
    /// representable range.
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] if `other > self`.
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result exceeds the
    /// representable range.
    fn safe_mul(&self, other: &Self) -> Result<Self, AmmError>;

    /// Checked floor division (truncates toward zero).
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `other` is zero.
    fn safe_div(&self, other: &Self) -> Result<Self, AmmError>;
}

// ---------------------------------------------------------------------------
// u128
// ---------------------------------------------------------------------------

impl CheckedArithmetic for u128 {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_add(*other)
            .ok_or(AmmError::Overflow("addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_sub(*other)
            .ok_or(AmmError::Underflow("subtraction underflow"))
    }

    #[inline]
    fn safe_mul(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_mul(*other)
            .ok_or(AmmError::Overflow("multiplication overflow"))
    }

    #[inline]
    fn safe_div(&self, other: &Self) -> Result<Self, AmmError> {
        self.checked_div(*other).ok_or(AmmError::DivisionByZero)
    }
}

// ---------------------------------------------------------------------------
// Amount
// ---------------------------------------------------------------------------

impl Amount {
    fn same_asset(&self, other: &Self) -> Result<(), AmmError> {
        if self.asset() == other.asset() {
            Ok(())
        } else {
            Err(AmmError::AssetMismatch {
                expected: self.asset(),
                actual: other.asset(),
            })
        }
    }
}

impl CheckedArithmetic for Amount {
    fn safe_add(&self, other: &Self) -> Result<Self, AmmError> {
        self.same_asset(other)?;
        let value = self
            .value()
            .checked_add(other.value())
            .ok_or(AmmError::Overflow("amount addition overflow"))?;
        Ok(self.with_value(value))
    }

    fn safe_sub(&self, other: &Self) -> Result<Self, AmmError> {
        self.same_asset(other)?;
        let value = self
            .value()
            .checked_sub(other.value())
            .ok_or(AmmError::Underflow("amount subtraction underflow"))?;
        Ok(self.with_value(value))
    }

    fn safe_mul(&self, other: &Self) -> Result<Self, AmmError> {
        self.same_asset(other)?;
        let value = self
            .value()
            .checked_mul(other.value())
            .ok_or(AmmError::Overflow("amount multiplication overflow"))?;
        Ok(self.with_value(value))
    }

    fn safe_div(&self, other: &Self) -> Result<Self, AmmError> {
        self.same_asset(other)?;
        let value = self
            .value()
            .checked_div(other.value())
            .ok_or(AmmError::DivisionByZero)?;
        Ok(self.with_value(value))
    }
}
