//! Configuration for one constant product pool.

use crate::domain::AssetId;
use crate::error::AmmError;

/// Initial state of the pool for one secondary asset.
///
/// The central asset is not repeated here: it comes from the enclosing
/// [`MarketConfig`](super::MarketConfig).
///
/// # Derived Values
///
/// - Initial invariant: `k = central_reserve × secondary_reserve`
///
/// # Validation
///
/// - Both reserves must be non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolConfig {
    secondary_asset: AssetId,
    central_reserve: u128,
    secondary_reserve: u128,
}

impl PoolConfig {
    /// Creates a new `PoolConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ZeroReserve`] if either reserve is zero.
    pub fn new(
        secondary_asset: AssetId,
        central_reserve: u128,
        secondary_reserve: u128,
    ) -> Result<Self, AmmError> {
        let config = Self {
            secondary_asset,
            central_reserve,
            secondary_reserve,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ZeroReserve`] if either reserve is zero.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.central_reserve == 0 || self.secondary_reserve == 0 {
            return Err(AmmError::ZeroReserve);
        }
        Ok(())
    }

    /// Returns the secondary asset.
    #[must_use]
    pub const fn secondary_asset(&self) -> AssetId {
        self.secondary_asset
    }

    /// Returns the initial central reserve.
    #[must_use]
    pub const fn central_reserve(&self) -> u128 {
        self.central_reserve
    }

    /// Returns the initial secondary reserve.
    #[must_use]
    pub const fn secondary_reserve(&self) -> u128 {
        self.secondary_reserve
    }
}
