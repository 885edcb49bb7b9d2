//! Core trait abstractions at the seams of the pricing core.
//!
//! - [`QuotePool`]: read-only quoting against one pool's reserves.
//! - [`PoolAdmin`]: settlement capability, never used by the pricer.
//! - [`PoolSource`]: asset role resolution and pool lookup.
//! - [`FromConfig`]: configuration-driven construction.

mod from_config;
mod pool_admin;
mod pool_source;
mod quote_pool;

pub use from_config::FromConfig;
pub use pool_admin::PoolAdmin;
pub use pool_source::PoolSource;
pub use quote_pool::QuotePool;
