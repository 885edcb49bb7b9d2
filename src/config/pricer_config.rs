//! Fee and hub configuration for the pricer.

use crate::domain::{AssetId, BasisPoints};
use crate::error::AmmError;

/// Configuration passed explicitly to [`Pricer::new`](crate::pricer::Pricer::new).
///
/// # Fields
///
/// - `central_asset`: the hub asset all pools pair against.
/// - `pool_fee`: trading fee charged by a pool; the full rate applies to a
///   single hop and half of it to each leg of a double hop.
/// - `protocol_fee`: fee retained by the system, always taken from the
///   central-asset leg.
///
/// # Validation
///
/// - `pool_fee < 10 000` bp: a 100% pool fee leaves nothing to price.
/// - `protocol_fee <= 10 000` bp.
///
/// # Examples
///
/// ```
/// use hubswap::config::PricerConfig;
/// use hubswap::domain::{AssetId, BasisPoints};
///
/// let cfg = PricerConfig::new(
///     AssetId::from_bytes([1u8; 32]),
///     BasisPoints::new(24),
///     BasisPoints::new(6),
/// );
/// assert!(cfg.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricerConfig {
    central_asset: AssetId,
    pool_fee: BasisPoints,
    protocol_fee: BasisPoints,
}

impl PricerConfig {
    /// Creates a new validated `PricerConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if either rate is out of range.
    pub fn new(
        central_asset: AssetId,
        pool_fee: BasisPoints,
        protocol_fee: BasisPoints,
    ) -> Result<Self, AmmError> {
        let config = Self {
            central_asset,
            pool_fee,
            protocol_fee,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if either rate is out of range.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.pool_fee >= BasisPoints::MAX_PERCENT {
            return Err(AmmError::InvalidFee("pool fee must be below 100%"));
        }
        if !self.protocol_fee.is_valid_percent() {
            return Err(AmmError::InvalidFee("protocol fee must not exceed 100%"));
        }
        Ok(())
    }

    /// Returns the central asset.
    #[must_use]
    pub const fn central_asset(&self) -> AssetId {
        self.central_asset
    }

    /// Returns the pool fee rate charged on a single hop.
    #[must_use]
    pub const fn pool_fee(&self) -> BasisPoints {
        self.pool_fee
    }

    /// Returns the pool fee rate charged on each leg of a double hop.
    #[must_use]
    pub const fn per_hop_fee(&self) -> BasisPoints {
        self.pool_fee.half()
    }

    /// Returns the protocol fee rate.
    #[must_use]
    pub const fn protocol_fee(&self) -> BasisPoints {
        self.protocol_fee
    }
}
