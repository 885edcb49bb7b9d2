//! Read-only quoting trait for a single pool.
//!
//! [`QuotePool`] is the capability the pricer needs from a pool: evaluate the
//! constant product formulas in either direction against the pool's current
//! reserves, resolving which reserve is the input side from the asset
//! identities of the request. Nothing in this trait can mutate reserves;
//! that capability lives in [`PoolAdmin`](super::PoolAdmin).
//!
//! # Fee Handling
//!
//! The fee rate is supplied per call rather than stored in the pool, because
//! the pricer charges the full pool fee on a single hop and half of it on
//! each leg of a double hop.

use crate::domain::{Amount, AssetId, BasisPoints, PoolQuote};
use crate::error::AmmError;

/// Quoting interface of a pool pairing the central asset with one secondary.
///
/// # Errors
///
/// Methods return [`AmmError::UnknownAsset`] when the supplied identities are
/// not exactly the pool's central and secondary assets (in either order),
/// plus any error from the underlying formula.
pub trait QuotePool {
    /// Returns the central asset of the pool.
    #[must_use]
    fn central_asset(&self) -> AssetId;

    /// Returns the secondary asset of the pool.
    #[must_use]
    fn secondary_asset(&self) -> AssetId;

    /// Returns `(central_reserve, secondary_reserve)`.
    #[must_use]
    fn reserves(&self) -> (u128, u128);

    /// Quotes selling `amount_in` for `asset_out`.
    ///
    /// The returned [`PoolQuote::amount_in`] echoes `amount_in` unchanged.
    ///
    /// # Errors
    ///
    /// - [`AmmError::UnknownAsset`] if the asset pair does not match the pool.
    /// - Any error from [`output_given_input`](crate::math::output_given_input).
    fn quote_given_input(
        &self,
        amount_in: Amount,
        asset_out: AssetId,
        fee: BasisPoints,
    ) -> Result<PoolQuote, AmmError>;

    /// Quotes buying exactly `amount_out` with `asset_in`.
    ///
    /// The returned [`PoolQuote::amount_out`] echoes `amount_out` unchanged.
    ///
    /// # Errors
    ///
    /// - [`AmmError::UnknownAsset`] if the asset pair does not match the pool.
    /// - Any error from [`input_given_output`](crate::math::input_given_output),
    ///   notably [`AmmError::InsufficientReserve`].
    fn quote_given_output(
        &self,
        asset_in: AssetId,
        amount_out: Amount,
        fee: BasisPoints,
    ) -> Result<PoolQuote, AmmError>;
}
