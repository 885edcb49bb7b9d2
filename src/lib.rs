//! # Hubswap
//!
//! Hub-routed constant product pricing: every pool pairs one secondary asset
//! with a single central asset, and any two assets can be traded through at
//! most two pools.
//!
//! This crate provides domain types, checked integer formulas, the pool and
//! registry types, and the [`Pricer`](pricer::Pricer) that turns a trade
//! request into an exact [`Quote`](domain::Quote) including the protocol fee.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | yes | `Serialize`/`Deserialize` for config and identity types |
//!
//! # Quick Start
//!
//! ```rust
//! use hubswap::config::{MarketConfig, PoolConfig, PricerConfig};
//! use hubswap::domain::{Amount, AssetId, BasisPoints};
//! use hubswap::factory::MarketFactory;
//!
//! // 1. Name the assets; moola is the hub
//! let moola = AssetId::from_bytes([1u8; 32]);
//! let bucks = AssetId::from_bytes([2u8; 32]);
//! let simoleans = AssetId::from_bytes([3u8; 32]);
//!
//! // 2. Describe the market: 0.24% pool fee, 0.06% protocol fee
//! let config = MarketConfig::new(
//!     PricerConfig::new(moola, BasisPoints::new(24), BasisPoints::new(6)).expect("valid fees"),
//!     vec![
//!         PoolConfig::new(bucks, 800_000, 500_000).expect("valid pool"),
//!         PoolConfig::new(simoleans, 800_000, 300_000).expect("valid pool"),
//!     ],
//! )
//! .expect("valid market");
//!
//! // 3. Build the pricer
//! let pricer = MarketFactory::create(&config).expect("market created");
//!
//! // 4. Quote a secondary-to-secondary trade through the hub
//! let quote = pricer
//!     .quote_given_input(Amount::new(bucks, 10_000), simoleans)
//!     .expect("quote");
//!
//! assert_eq!(quote.amount_out(), Amount::new(simoleans, 5_752));
//! assert_eq!(quote.protocol_fee(), Amount::new(moola, 9));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Consumer   │  uses MarketConfig + MarketFactory
//! └──────┬──────┘
//!        │ create(&config)
//!        ▼
//! ┌─────────────┐
//! │    Pricer    │  classifies the route, applies fees, reconciles
//! └──────┬──────┘
//!        │ PoolSource (role_of, pool snapshot)
//!        ▼
//! ┌─────────────┐
//! │ PoolRegistry │  secondary asset → ConstantProductPool
//! └──────┬──────┘
//!        │ QuotePool / PoolAdmin traits
//!        ▼
//! ┌─────────────┐
//! │    Math      │  output_given_input, input_given_output
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`AssetId`](domain::AssetId), [`Amount`](domain::Amount), [`Quote`](domain::Quote), etc. |
//! | [`traits`] | Core abstractions: [`QuotePool`](traits::QuotePool), [`PoolAdmin`](traits::PoolAdmin), [`PoolSource`](traits::PoolSource), [`FromConfig`](traits::FromConfig) |
//! | [`config`] | Declarative blueprints: [`MarketConfig`](config::MarketConfig) and its parts |
//! | [`pools`]  | [`ConstantProductPool`](pools::ConstantProductPool) and [`PoolRegistry`](pools::PoolRegistry) |
//! | [`pricer`] | [`Pricer`](pricer::Pricer) and [`Route`](pricer::Route) classification |
//! | [`factory`] | [`MarketFactory`](factory::MarketFactory) for config-driven construction |
//! | [`math`]   | Checked arithmetic and the constant product formulas |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod domain;
pub mod error;
pub mod factory;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod pricer;
pub mod traits;
