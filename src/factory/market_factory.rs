//! Default market factory implementation.

use crate::config::MarketConfig;
use crate::error::AmmError;
use crate::pools::PoolRegistry;
use crate::pricer::Pricer;
use crate::traits::FromConfig;

/// Stateless factory for building a market from configuration.
///
/// # Thread Safety
///
/// Both constructors are pure functions with no shared mutable state.
///
/// # Example
///
/// ```rust
/// use hubswap::config::{MarketConfig, PoolConfig, PricerConfig};
/// use hubswap::domain::{Amount, AssetId, BasisPoints};
/// use hubswap::factory::MarketFactory;
///
/// let moola = AssetId::from_bytes([1u8; 32]);
/// let bucks = AssetId::from_bytes([2u8; 32]);
///
/// let config = MarketConfig::new(
///     PricerConfig::new(moola, BasisPoints::new(24), BasisPoints::new(6)).expect("valid"),
///     vec![PoolConfig::new(bucks, 800_000, 500_000).expect("valid")],
/// )
/// .expect("valid market");
///
/// let pricer = MarketFactory::create(&config).expect("market created");
/// let quote = pricer
///     .quote_given_input(Amount::new(bucks, 10_000), moola)
///     .expect("quote");
/// assert_eq!(quote.amount_out(), Amount::new(moola, 15_640));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarketFactory;

impl MarketFactory {
    /// Builds the pool registry described by `config`.
    ///
    /// # Flow
    ///
    /// 1. Validate the configuration via [`MarketConfig::validate`].
    /// 2. Delegate to [`PoolRegistry::from_config`].
    ///
    /// # Errors
    ///
    /// Any validation or registration error.
    pub fn registry(config: &MarketConfig) -> Result<PoolRegistry, AmmError> {
        config.validate()?;
        PoolRegistry::from_config(config)
    }

    /// Builds a pricer that owns the registry described by `config`.
    ///
    /// # Errors
    ///
    /// Any error from [`registry`](Self::registry) or [`Pricer::new`].
    pub fn create(config: &MarketConfig) -> Result<Pricer<PoolRegistry>, AmmError> {
        let registry = Self::registry(config)?;
        Pricer::new(*config.pricer(), registry)
    }
}
