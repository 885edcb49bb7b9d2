//! Asset-tagged amount.

use core::fmt;

use super::AssetId;

/// A quantity of one specific asset: an [`AssetId`] paired with a raw `u128`
/// value in the asset's smallest unit.
///
/// `Amount` never interprets decimals. Arithmetic between two amounts is
/// only defined when both carry the same asset; see
/// [`CheckedArithmetic`](crate::math::CheckedArithmetic), which reports
/// [`AssetMismatch`](crate::error::AmmError::AssetMismatch) otherwise.
///
/// # Examples
///
/// ```
/// use hubswap::domain::{Amount, AssetId};
///
/// let usd = AssetId::from_bytes([1u8; 32]);
/// let a = Amount::new(usd, 100);
/// assert_eq!(a.asset(), usd);
/// assert_eq!(a.value(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct Amount {
    asset: AssetId,
    value: u128,
}

impl Amount {
    /// Creates a new `Amount` of `asset`.
    pub const fn new(asset: AssetId, value: u128) -> Self {
        Self { asset, value }
    }

    /// Creates a zero amount of `asset`.
    pub const fn zero(asset: AssetId) -> Self {
        Self { asset, value: 0 }
    }

    /// Returns the asset identity.
    #[must_use]
    pub const fn asset(&self) -> AssetId {
        self.asset
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(&self) -> u128 {
        self.value
    }

    /// Returns `true` if the value is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Returns `true` if this amount is denominated in `asset`.
    #[must_use]
    pub fn is_of(&self, asset: &AssetId) -> bool {
        self.asset == *asset
    }

    /// Returns an amount of the same asset carrying `value`.
    pub const fn with_value(&self, value: u128) -> Self {
        Self {
            asset: self.asset,
            value,
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.value, self.asset)
    }
}
