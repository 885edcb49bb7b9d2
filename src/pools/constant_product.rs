//! Constant product pool pairing the central asset with one secondary asset.
//!
//! The pool only holds the two reserves and knows which asset plays which
//! role. Pricing is delegated to [`output_given_input`] and
//! [`input_given_output`]; the fee rate comes from the caller.
//!
//! # Invariant
//!
//! Both reserves stay `>= 0` and change only in matched pairs through
//! [`PoolAdmin::apply_settlement`]. Quoting never mutates the pool.

use tracing::debug;

use crate::domain::{Amount, AssetId, BasisPoints, PoolQuote, SettlementDelta};
use crate::error::AmmError;
use crate::math::{input_given_output, output_given_input, CheckedArithmetic};
use crate::traits::{PoolAdmin, QuotePool};

/// A constant product pool (`x · y = k`) for one (central, secondary) pair.
///
/// The pool is `Copy`: a copy is a consistent snapshot of both reserves,
/// which is how [`PoolSource`](crate::traits::PoolSource) hands pools to the
/// pricer.
///
/// # Example
///
/// ```rust
/// use hubswap::domain::{Amount, AssetId, BasisPoints};
/// use hubswap::pools::ConstantProductPool;
/// use hubswap::traits::QuotePool;
///
/// let moola = AssetId::from_bytes([1u8; 32]);
/// let bucks = AssetId::from_bytes([2u8; 32]);
/// let pool = ConstantProductPool::new(moola, bucks, 800_000, 300_000).expect("distinct assets");
///
/// let quote = pool
///     .quote_given_input(Amount::new(moola, 9_994), bucks, BasisPoints::new(24))
///     .expect("quote ok");
/// assert_eq!(quote.amount_out(), Amount::new(bucks, 3_692));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstantProductPool {
    central_asset: AssetId,
    secondary_asset: AssetId,
    central_reserve: u128,
    secondary_reserve: u128,
}

impl ConstantProductPool {
    /// Creates a pool with the given initial reserves.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::SameAsset`] if `central_asset == secondary_asset`.
    pub fn new(
        central_asset: AssetId,
        secondary_asset: AssetId,
        central_reserve: u128,
        secondary_reserve: u128,
    ) -> Result<Self, AmmError> {
        if central_asset == secondary_asset {
            return Err(AmmError::SameAsset);
        }
        Ok(Self {
            central_asset,
            secondary_asset,
            central_reserve,
            secondary_reserve,
        })
    }

    /// Returns the current central reserve.
    #[must_use]
    pub const fn central_reserve(&self) -> u128 {
        self.central_reserve
    }

    /// Returns the current secondary reserve.
    #[must_use]
    pub const fn secondary_reserve(&self) -> u128 {
        self.secondary_reserve
    }

    /// Returns the product of both reserves.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the product exceeds `u128`.
    pub fn invariant(&self) -> Result<u128, AmmError> {
        self.central_reserve.safe_mul(&self.secondary_reserve)
    }

    /// Resolves `(reserve_in, reserve_out)` for a trade direction.
    fn orient(&self, asset_in: AssetId, asset_out: AssetId) -> Result<(u128, u128), AmmError> {
        if asset_in == self.central_asset && asset_out == self.secondary_asset {
            Ok((self.central_reserve, self.secondary_reserve))
        } else if asset_in == self.secondary_asset && asset_out == self.central_asset {
            Ok((self.secondary_reserve, self.central_reserve))
        } else {
            Err(AmmError::UnknownAsset("asset pair does not match pool"))
        }
    }
}

impl QuotePool for ConstantProductPool {
    fn central_asset(&self) -> AssetId {
        self.central_asset
    }

    fn secondary_asset(&self) -> AssetId {
        self.secondary_asset
    }

    fn reserves(&self) -> (u128, u128) {
        (self.central_reserve, self.secondary_reserve)
    }

    fn quote_given_input(
        &self,
        amount_in: Amount,
        asset_out: AssetId,
        fee: BasisPoints,
    ) -> Result<PoolQuote, AmmError> {
        let (reserve_in, reserve_out) = self.orient(amount_in.asset(), asset_out)?;
        let out = output_given_input(amount_in.value(), reserve_in, reserve_out, fee)?;
        Ok(PoolQuote::new(amount_in, Amount::new(asset_out, out)))
    }

    fn quote_given_output(
        &self,
        asset_in: AssetId,
        amount_out: Amount,
        fee: BasisPoints,
    ) -> Result<PoolQuote, AmmError> {
        let (reserve_in, reserve_out) = self.orient(asset_in, amount_out.asset())?;
        let input = input_given_output(amount_out.value(), reserve_in, reserve_out, fee)?;
        Ok(PoolQuote::new(Amount::new(asset_in, input), amount_out))
    }
}

impl PoolAdmin for ConstantProductPool {
    fn apply_settlement(&mut self, delta: SettlementDelta) -> Result<(), AmmError> {
        let (central, secondary) = match delta {
            SettlementDelta::IntoCentral {
                central_in,
                secondary_out,
            } => (
                self.central_reserve.safe_add(&central_in)?,
                self.secondary_reserve.safe_sub(&secondary_out)?,
            ),
            SettlementDelta::IntoSecondary {
                secondary_in,
                central_out,
            } => (
                self.central_reserve.safe_sub(&central_out)?,
                self.secondary_reserve.safe_add(&secondary_in)?,
            ),
        };

        self.central_reserve = central;
        self.secondary_reserve = secondary;
        debug!(
            secondary = ?self.secondary_asset,
            direction = %delta.direction(),
            central_reserve = central,
            secondary_reserve = secondary,
            "settlement applied"
        );
        Ok(())
    }
}
