//! Market instantiation via the factory pattern.
//!
//! The [`MarketFactory`] builds a [`PoolRegistry`] and a ready-to-use
//! [`Pricer`] from a [`MarketConfig`], validating the configuration first.
//!
//! # Usage
//!
//! ```rust
//! use hubswap::config::{MarketConfig, PoolConfig, PricerConfig};
//! use hubswap::domain::{AssetId, BasisPoints};
//! use hubswap::factory::MarketFactory;
//!
//! let moola = AssetId::from_bytes([1u8; 32]);
//! let bucks = AssetId::from_bytes([2u8; 32]);
//! let config = MarketConfig::new(
//!     PricerConfig::new(moola, BasisPoints::new(24), BasisPoints::new(6)).expect("valid"),
//!     vec![PoolConfig::new(bucks, 800_000, 300_000).expect("valid")],
//! )
//! .expect("valid market");
//!
//! let registry = MarketFactory::registry(&config).expect("registry built");
//! assert_eq!(registry.len(), 1);
//! ```
//!
//! [`MarketConfig`]: crate::config::MarketConfig
//! [`PoolRegistry`]: crate::pools::PoolRegistry
//! [`Pricer`]: crate::pricer::Pricer

mod market_factory;

pub use market_factory::MarketFactory;
