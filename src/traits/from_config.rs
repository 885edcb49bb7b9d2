//! Generic construction trait for building values from configuration.
//!
//! [`FromConfig`] provides a uniform interface for creating pool
//! registries from their configuration structs, used by the
//! [`MarketFactory`](crate::factory::MarketFactory).
//!
//! # Validation Contract
//!
//! Implementations **must** validate all configuration invariants during
//! construction. A successfully constructed value is guaranteed to be in a
//! valid initial state:
//!
//! - Secondary asset differs from the central asset
//! - Initial reserves are non-zero
//! - No secondary asset is registered twice
//!
//! ```text
//! MarketConfig => PoolRegistry::from_config(&cfg)
//! ```

use crate::error::AmmError;

/// Fallible construction from a configuration value.
///
/// # Type Parameters
///
/// - `C`: the configuration type describing the value's initial state.
///
/// # Implementors
///
/// - `impl FromConfig<MarketConfig> for PoolRegistry`
///
/// # Errors
///
/// Returns [`AmmError::InvalidConfiguration`] (or a more specific variant)
/// when the configuration is rejected.
pub trait FromConfig<C>: Sized {
    /// Builds `Self` from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` violates any invariant.
    fn from_config(config: &C) -> Result<Self, AmmError>;
}
