//! Registry of the pools that pair each secondary asset with the hub.
//!
//! The registry is the authority on asset roles: its central asset is
//! [`AssetRole::Central`], every registered secondary is
//! [`AssetRole::Secondary`], and anything else is unknown.

use std::collections::HashMap;

use tracing::debug;

use super::ConstantProductPool;
use crate::config::MarketConfig;
use crate::domain::{AssetId, AssetRole, SettlementDelta};
use crate::error::AmmError;
use crate::traits::{FromConfig, PoolAdmin, PoolSource, QuotePool};

/// Maps each secondary asset to its pool against one central asset.
///
/// # Thread Safety
///
/// Read access goes through [`PoolSource`], which hands out `Copy`
/// snapshots, so an `Arc<PoolRegistry>` can serve any number of concurrent
/// pricers. [`settle`](Self::settle) takes `&mut self`.
///
/// # Example
///
/// ```rust
/// use hubswap::domain::AssetId;
/// use hubswap::pools::{ConstantProductPool, PoolRegistry};
/// use hubswap::traits::PoolSource;
///
/// let moola = AssetId::from_bytes([1u8; 32]);
/// let bucks = AssetId::from_bytes([2u8; 32]);
///
/// let mut registry = PoolRegistry::new(moola);
/// let pool = ConstantProductPool::new(moola, bucks, 800_000, 300_000).expect("distinct");
/// registry.register(pool).expect("registered");
///
/// assert_eq!(registry.pool(&bucks).expect("present"), pool);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolRegistry {
    central: AssetId,
    pools: HashMap<AssetId, ConstantProductPool>,
}

impl PoolRegistry {
    /// Creates an empty registry for `central`.
    #[must_use]
    pub fn new(central: AssetId) -> Self {
        Self {
            central,
            pools: HashMap::new(),
        }
    }

    /// Adds `pool`, keyed by its secondary asset.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if the pool's central asset is
    ///   not this registry's central asset.
    /// - [`AmmError::DuplicatePool`] if a pool for the same secondary exists.
    pub fn register(&mut self, pool: ConstantProductPool) -> Result<(), AmmError> {
        if pool.central_asset() != self.central {
            return Err(AmmError::InvalidConfiguration(
                "pool central asset does not match registry",
            ));
        }
        let secondary = pool.secondary_asset();
        if self.pools.contains_key(&secondary) {
            return Err(AmmError::DuplicatePool(secondary));
        }
        self.pools.insert(secondary, pool);
        debug!(
            secondary = ?secondary,
            central_reserve = pool.central_reserve(),
            secondary_reserve = pool.secondary_reserve(),
            "pool registered"
        );
        Ok(())
    }

    /// Returns a reference to the pool for `secondary`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolNotFound`] if none is registered.
    pub fn lookup(&self, secondary: &AssetId) -> Result<&ConstantProductPool, AmmError> {
        self.pools
            .get(secondary)
            .ok_or(AmmError::PoolNotFound(*secondary))
    }

    /// Applies a settlement delta to the pool for `secondary`.
    ///
    /// The pool is left untouched if the delta fails.
    ///
    /// # Errors
    ///
    /// - [`AmmError::PoolNotFound`] if none is registered.
    /// - Any error from [`PoolAdmin::apply_settlement`].
    pub fn settle(&mut self, secondary: &AssetId, delta: SettlementDelta) -> Result<(), AmmError> {
        self.pools
            .get_mut(secondary)
            .ok_or(AmmError::PoolNotFound(*secondary))?
            .apply_settlement(delta)
    }

    /// Returns the number of registered pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    /// Returns `true` if no pool is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }
}

impl PoolSource for PoolRegistry {
    fn central_asset(&self) -> AssetId {
        self.central
    }

    fn role_of(&self, asset: &AssetId) -> Result<AssetRole, AmmError> {
        if *asset == self.central {
            Ok(AssetRole::Central)
        } else if self.pools.contains_key(asset) {
            Ok(AssetRole::Secondary)
        } else {
            Err(AmmError::PoolNotFound(*asset))
        }
    }

    fn pool(&self, secondary: &AssetId) -> Result<ConstantProductPool, AmmError> {
        self.lookup(secondary).copied()
    }
}

impl FromConfig<MarketConfig> for PoolRegistry {
    fn from_config(config: &MarketConfig) -> Result<Self, AmmError> {
        config.validate()?;
        let central = config.pricer().central_asset();
        let mut registry = Self::new(central);
        for pool in config.pools() {
            registry.register(ConstantProductPool::new(
                central,
                pool.secondary_asset(),
                pool.central_reserve(),
                pool.secondary_reserve(),
            )?)?;
        }
        Ok(registry)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::config::{PoolConfig, PricerConfig};
    use crate::domain::BasisPoints;

    fn moola() -> AssetId {
        AssetId::from_bytes([1u8; 32])
    }

    fn bucks() -> AssetId {
        AssetId::from_bytes([2u8; 32])
    }

    fn simoleans() -> AssetId {
        AssetId::from_bytes([3u8; 32])
    }

    fn pool(secondary: AssetId, central_reserve: u128, secondary_reserve: u128) -> ConstantProductPool {
        let Ok(pool) = ConstantProductPool::new(moola(), secondary, central_reserve, secondary_reserve)
        else {
            panic!("expected valid pool");
        };
        pool
    }

    fn registry() -> PoolRegistry {
        let mut registry = PoolRegistry::new(moola());
        let Ok(()) = registry.register(pool(bucks(), 800_000, 500_000)) else {
            panic!("expected registration");
        };
        registry
    }

    // -- registration ---------------------------------------------------------

    #[test]
    fn register_and_lookup() {
        let registry = registry();
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());
        let Ok(found) = registry.lookup(&bucks()) else {
            panic!("expected pool");
        };
        assert_eq!(found.reserves(), (800_000, 500_000));
    }

    #[test]
    fn duplicate_rejected() {
        let mut registry = registry();
        let err = registry.register(pool(bucks(), 1, 1));
        assert_eq!(err, Err(AmmError::DuplicatePool(bucks())));
        let Ok(found) = registry.lookup(&bucks()) else {
            panic!("expected pool");
        };
        assert_eq!(found.central_reserve(), 800_000);
    }

    #[test]
    fn foreign_central_rejected() {
        let mut registry = PoolRegistry::new(simoleans());
        let Err(AmmError::InvalidConfiguration(_)) = registry.register(pool(bucks(), 10, 10)) else {
            panic!("expected InvalidConfiguration");
        };
        assert!(registry.is_empty());
    }

    #[test]
    fn missing_pool() {
        let registry = registry();
        assert_eq!(
            registry.lookup(&simoleans()),
            Err(AmmError::PoolNotFound(simoleans()))
        );
        assert_eq!(
            registry.pool(&simoleans()),
            Err(AmmError::PoolNotFound(simoleans()))
        );
    }

    // -- roles ----------------------------------------------------------------

    #[test]
    fn roles_follow_registration() {
        let registry = registry();
        assert_eq!(registry.role_of(&moola()), Ok(AssetRole::Central));
        assert_eq!(registry.role_of(&bucks()), Ok(AssetRole::Secondary));
        assert_eq!(
            registry.role_of(&simoleans()),
            Err(AmmError::PoolNotFound(simoleans()))
        );
    }

    #[test]
    fn empty_registry_still_knows_central() {
        let registry = PoolRegistry::new(moola());
        assert_eq!(registry.role_of(&moola()), Ok(AssetRole::Central));
        assert_eq!(registry.central_asset(), moola());
    }

    // -- settlement -----------------------------------------------------------

    #[test]
    fn settle_updates_pool() {
        let mut registry = registry();
        let Ok(delta) = SettlementDelta::into_central(10_000, 6_000) else {
            panic!("expected delta");
        };
        let Ok(()) = registry.settle(&bucks(), delta) else {
            panic!("expected settlement");
        };
        let Ok(snapshot) = registry.pool(&bucks()) else {
            panic!("expected pool");
        };
        assert_eq!(snapshot.reserves(), (810_000, 494_000));
    }

    #[test]
    fn failed_settlement_leaves_pool_untouched() {
        let mut registry = registry();
        let Ok(delta) = SettlementDelta::into_secondary(1, 800_001) else {
            panic!("expected delta");
        };
        let Err(AmmError::Underflow(_)) = registry.settle(&bucks(), delta) else {
            panic!("expected Underflow");
        };
        let Ok(snapshot) = registry.pool(&bucks()) else {
            panic!("expected pool");
        };
        assert_eq!(snapshot.reserves(), (800_000, 500_000));
    }

    #[test]
    fn settle_unknown_pool() {
        let mut registry = registry();
        let Ok(delta) = SettlementDelta::into_central(1, 1) else {
            panic!("expected delta");
        };
        assert_eq!(
            registry.settle(&simoleans(), delta),
            Err(AmmError::PoolNotFound(simoleans()))
        );
    }

    #[test]
    fn snapshot_is_detached() {
        let mut registry = registry();
        let Ok(before) = registry.pool(&bucks()) else {
            panic!("expected pool");
        };
        let Ok(delta) = SettlementDelta::into_secondary(5_000, 7_000) else {
            panic!("expected delta");
        };
        let Ok(()) = registry.settle(&bucks(), delta) else {
            panic!("expected settlement");
        };
        assert_eq!(before.reserves(), (800_000, 500_000));
        let Ok(after) = registry.pool(&bucks()) else {
            panic!("expected pool");
        };
        assert_eq!(after.reserves(), (793_000, 505_000));
    }

    // -- from_config ----------------------------------------------------------

    #[test]
    fn from_config_builds_all_pools() {
        let Ok(pricer) = PricerConfig::new(moola(), BasisPoints::new(24), BasisPoints::new(6)) else {
            panic!("valid pricer config");
        };
        let (Ok(b), Ok(s)) = (
            PoolConfig::new(bucks(), 800_000, 500_000),
            PoolConfig::new(simoleans(), 800_000, 300_000),
        ) else {
            panic!("valid pool configs");
        };
        let Ok(market) = MarketConfig::new(pricer, vec![b, s]) else {
            panic!("valid market");
        };
        let Ok(registry) = PoolRegistry::from_config(&market) else {
            panic!("expected registry");
        };
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.central_asset(), moola());
        let Ok(sim) = registry.pool(&simoleans()) else {
            panic!("expected pool");
        };
        assert_eq!(sim.reserves(), (800_000, 300_000));
    }
}
