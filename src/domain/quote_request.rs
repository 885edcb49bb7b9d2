//! Typed quote requests.

use core::fmt;

use super::{Amount, AssetId};
use crate::error::AmmError;

/// Which side of a trade the caller fixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum QuoteType {
    /// The input amount is fixed; output is computed.
    GivenInput = 0,
    /// The output amount is fixed; input is computed.
    GivenOutput = 1,
}

impl fmt::Display for QuoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GivenInput => write!(f, "GivenInput"),
            Self::GivenOutput => write!(f, "GivenOutput"),
        }
    }
}

/// A request for a price, dispatched by [`Pricer::quote`](crate::pricer::Pricer::quote).
///
/// # Invariants
///
/// The fixed amount is non-zero and its asset differs from the counter asset.
///
/// # Examples
///
/// ```
/// use hubswap::domain::{Amount, AssetId, QuoteRequest};
///
/// let moola = AssetId::from_bytes([1u8; 32]);
/// let bucks = AssetId::from_bytes([2u8; 32]);
/// let req = QuoteRequest::given_input(Amount::new(moola, 10_000), bucks);
/// assert!(req.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteRequest {
    /// Sell exactly `amount_in`, receive as much `asset_out` as possible.
    GivenInput {
        /// The fixed input.
        amount_in: Amount,
        /// The asset wanted in return.
        asset_out: AssetId,
    },
    /// Receive exactly `amount_out`, pay as little `asset_in` as possible.
    GivenOutput {
        /// The asset offered in payment.
        asset_in: AssetId,
        /// The fixed output.
        amount_out: Amount,
    },
}

impl QuoteRequest {
    /// Creates a given-input request.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidQuantity`] if `amount_in` is zero.
    /// - [`AmmError::SameAsset`] if `asset_out` is the input's asset.
    pub fn given_input(amount_in: Amount, asset_out: AssetId) -> crate::error::Result<Self> {
        if amount_in.is_zero() {
            return Err(AmmError::InvalidQuantity("quote amount must be non-zero"));
        }
        if amount_in.is_of(&asset_out) {
            return Err(AmmError::SameAsset);
        }
        Ok(Self::GivenInput {
            amount_in,
            asset_out,
        })
    }

    /// Creates a given-output request.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidQuantity`] if `amount_out` is zero.
    /// - [`AmmError::SameAsset`] if `asset_in` is the output's asset.
    pub fn given_output(asset_in: AssetId, amount_out: Amount) -> crate::error::Result<Self> {
        if amount_out.is_zero() {
            return Err(AmmError::InvalidQuantity("quote amount must be non-zero"));
        }
        if amount_out.is_of(&asset_in) {
            return Err(AmmError::SameAsset);
        }
        Ok(Self::GivenOutput {
            asset_in,
            amount_out,
        })
    }

    /// Returns the asset the trader pays with.
    #[must_use]
    pub const fn asset_in(&self) -> AssetId {
        match self {
            Self::GivenInput { amount_in, .. } => amount_in.asset(),
            Self::GivenOutput { asset_in, .. } => *asset_in,
        }
    }

    /// Returns the asset the trader receives.
    #[must_use]
    pub const fn asset_out(&self) -> AssetId {
        match self {
            Self::GivenInput { asset_out, .. } => *asset_out,
            Self::GivenOutput { amount_out, .. } => amount_out.asset(),
        }
    }

    /// Returns the fixed amount regardless of variant.
    pub const fn amount(&self) -> Amount {
        match self {
            Self::GivenInput { amount_in, .. } => *amount_in,
            Self::GivenOutput { amount_out, .. } => *amount_out,
        }
    }

    /// Returns the [`QuoteType`] descriptor.
    #[must_use]
    pub const fn quote_type(&self) -> QuoteType {
        match self {
            Self::GivenInput { .. } => QuoteType::GivenInput,
            Self::GivenOutput { .. } => QuoteType::GivenOutput,
        }
    }
}
