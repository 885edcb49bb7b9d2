//! Pool lookup seam between the pricer and whatever owns the pools.
//!
//! The pricer asks a [`PoolSource`] two things: what role an asset plays,
//! and a snapshot of the pool for a secondary asset. Snapshots are returned
//! by value, so every formula pass within one quote sees the same reserves
//! even if settlement runs between quotes.

use std::sync::Arc;

use crate::domain::{AssetId, AssetRole};
use crate::error::AmmError;
use crate::pools::ConstantProductPool;

/// Read-only access to the registered pools.
pub trait PoolSource {
    /// The central asset all pools are paired against.
    #[must_use]
    fn central_asset(&self) -> AssetId;

    /// Resolves the role of `asset`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolNotFound`] if `asset` is neither the central
    /// asset nor a registered secondary.
    fn role_of(&self, asset: &AssetId) -> Result<AssetRole, AmmError>;

    /// Returns a snapshot of the pool for `secondary`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PoolNotFound`] if no pool is registered for it.
    fn pool(&self, secondary: &AssetId) -> Result<ConstantProductPool, AmmError>;
}

impl<S: PoolSource + ?Sized> PoolSource for &S {
    fn central_asset(&self) -> AssetId {
        (**self).central_asset()
    }

    fn role_of(&self, asset: &AssetId) -> Result<AssetRole, AmmError> {
        (**self).role_of(asset)
    }

    fn pool(&self, secondary: &AssetId) -> Result<ConstantProductPool, AmmError> {
        (**self).pool(secondary)
    }
}

impl<S: PoolSource + ?Sized> PoolSource for Arc<S> {
    fn central_asset(&self) -> AssetId {
        (**self).central_asset()
    }

    fn role_of(&self, asset: &AssetId) -> Result<AssetRole, AmmError> {
        (**self).role_of(asset)
    }

    fn pool(&self, secondary: &AssetId) -> Result<ConstantProductPool, AmmError> {
        (**self).pool(secondary)
    }
}
