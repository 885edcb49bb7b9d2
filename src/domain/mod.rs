//! Fundamental domain value types used throughout the pricing core.
//!
//! This module contains the value types that model the hub-and-spoke
//! market: asset identities and roles, asset-tagged amounts, fee rates,
//! quote requests, quotes, and settlement deltas.

mod amount;
mod asset_id;
mod asset_role;
mod basis_points;
mod quote;
mod quote_request;
mod settlement;

pub use amount::Amount;
pub use asset_id::AssetId;
pub use asset_role::AssetRole;
pub use basis_points::{BasisPoints, BPS_DENOMINATOR};
pub use quote::{PoolQuote, Quote};
pub use quote_request::{QuoteRequest, QuoteType};
pub use settlement::{SettlementDelta, SettlementDirection};
