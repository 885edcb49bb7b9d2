//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use hubswap::prelude::*;
//! ```

pub use crate::config::{MarketConfig, PoolConfig, PricerConfig};
pub use crate::domain::{
    Amount, AssetId, AssetRole, BasisPoints, Quote, QuoteRequest, QuoteType, SettlementDelta,
};
pub use crate::error::{AmmError, Result};
pub use crate::factory::MarketFactory;
pub use crate::math::CheckedArithmetic;
pub use crate::pools::{ConstantProductPool, PoolRegistry};
pub use crate::pricer::{Pricer, Route};
pub use crate::traits::{FromConfig, PoolAdmin, PoolSource, QuotePool};
