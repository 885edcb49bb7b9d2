//! Configuration structs.
//!
//! [`MarketConfig`] is the top-level declarative blueprint for a market: a
//! [`PricerConfig`] with the hub asset and fee rates, plus one
//! [`PoolConfig`] per secondary asset. With the `serde` feature (on by
//! default) all three can be read from any serde format.

mod market_config;
mod pool_config;
mod pricer_config;

pub use market_config::MarketConfig;
pub use pool_config::PoolConfig;
pub use pricer_config::PricerConfig;
