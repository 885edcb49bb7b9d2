//! Top-level market configuration.
//!
//! [`MarketConfig`] is the declarative blueprint for a whole hub-and-spoke
//! market: the pricer's fee settings plus one [`PoolConfig`] per secondary
//! asset.
//!
//! # Factory Integration
//!
//! ```text
//! MarketFactory::registry(&config) => PoolRegistry::from_config(&config)
//! MarketFactory::create(&config)   => Pricer::new(config.pricer(), registry)
//! ```

use std::collections::HashSet;

use super::{PoolConfig, PricerConfig};
use crate::error::AmmError;

/// Blueprint for a pricer and its pools.
///
/// # Validation
///
/// Call [`validate()`](MarketConfig::validate) to check all invariants:
///
/// - the pricer config is valid,
/// - every pool config is valid,
/// - no pool is keyed by the central asset,
/// - no secondary asset appears twice.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketConfig {
    pricer: PricerConfig,
    pools: Vec<PoolConfig>,
}

impl MarketConfig {
    /// Creates a new validated `MarketConfig`.
    ///
    /// # Errors
    ///
    /// See [`validate`](Self::validate).
    pub fn new(pricer: PricerConfig, pools: Vec<PoolConfig>) -> Result<Self, AmmError> {
        let config = Self { pricer, pools };
        config.validate()?;
        Ok(config)
    }

    /// Validates the pricer config and every pool config.
    ///
    /// # Errors
    ///
    /// - Any error from [`PricerConfig::validate`] or [`PoolConfig::validate`].
    /// - [`AmmError::InvalidConfiguration`] if a pool is keyed by the central asset.
    /// - [`AmmError::DuplicatePool`] if a secondary asset appears twice.
    pub fn validate(&self) -> Result<(), AmmError> {
        self.pricer.validate()?;
        let central = self.pricer.central_asset();
        let mut seen = HashSet::with_capacity(self.pools.len());
        for pool in &self.pools {
            pool.validate()?;
            if pool.secondary_asset() == central {
                return Err(AmmError::InvalidConfiguration(
                    "pool secondary asset cannot be the central asset",
                ));
            }
            if !seen.insert(pool.secondary_asset()) {
                return Err(AmmError::DuplicatePool(pool.secondary_asset()));
            }
        }
        Ok(())
    }

    /// Returns the pricer configuration.
    #[must_use]
    pub const fn pricer(&self) -> &PricerConfig {
        &self.pricer
    }

    /// Returns the pool configurations.
    #[must_use]
    pub fn pools(&self) -> &[PoolConfig] {
        &self.pools
    }
}
