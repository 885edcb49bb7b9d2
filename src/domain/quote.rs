//! Price quotes produced by pools and by the pricer.

use core::fmt;

use super::Amount;
use crate::error::AmmError;

/// Result of a single pool evaluation: what goes in and what comes out.
///
/// Pools return this from both quote directions so call sites stay uniform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolQuote {
    amount_in: Amount,
    amount_out: Amount,
}

impl PoolQuote {
    /// Creates a new `PoolQuote`.
    pub const fn new(amount_in: Amount, amount_out: Amount) -> Self {
        Self {
            amount_in,
            amount_out,
        }
    }

    /// Returns the input side.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the output side.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }
}

/// A complete, internally consistent price quote.
///
/// # Invariants
///
/// - `amount_in` and `amount_out` are positive and of different assets.
/// - `protocol_fee` is denominated in the central asset: for a single-hop
///   quote that is one of the two endpoints, for a double-hop quote it is
///   the asset of `central_amount`.
/// - `central_amount` is present only for double-hop quotes and is the
///   gross hub amount at the hop boundary, before the protocol fee.
///
/// Quotes are computed fresh per request and never mutated afterwards.
///
/// # Examples
///
/// ```
/// use hubswap::domain::{Amount, AssetId, Quote};
///
/// let central = AssetId::from_bytes([1u8; 32]);
/// let bucks = AssetId::from_bytes([2u8; 32]);
/// let quote = Quote::single_hop(
///     Amount::new(central, 9_997),
///     Amount::new(bucks, 3_692),
///     Amount::new(central, 5),
/// );
/// assert!(quote.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quote {
    amount_in: Amount,
    amount_out: Amount,
    protocol_fee: Amount,
    central_amount: Option<Amount>,
}

impl Quote {
    /// Creates a quote for a trade through one pool.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidQuantity`] if `amount_in` is zero.
    /// - [`AmmError::InsufficientInput`] if `amount_out` is zero.
    /// - [`AmmError::SameAsset`] if both sides carry the same asset.
    /// - [`AmmError::AssetMismatch`] if the fee is in neither endpoint asset.
    pub fn single_hop(
        amount_in: Amount,
        amount_out: Amount,
        protocol_fee: Amount,
    ) -> crate::error::Result<Self> {
        Self::check_sides(&amount_in, &amount_out)?;
        if !protocol_fee.is_of(&amount_in.asset()) && !protocol_fee.is_of(&amount_out.asset()) {
            return Err(AmmError::AssetMismatch {
                expected: amount_in.asset(),
                actual: protocol_fee.asset(),
            });
        }
        Ok(Self {
            amount_in,
            amount_out,
            protocol_fee,
            central_amount: None,
        })
    }

    /// Creates a quote for a trade routed through the central asset.
    ///
    /// # Errors
    ///
    /// Same as [`single_hop`](Self::single_hop), plus
    /// [`AmmError::AssetMismatch`] if `protocol_fee` and `central_amount`
    /// disagree on the asset or if the hub asset equals an endpoint.
    pub fn double_hop(
        amount_in: Amount,
        amount_out: Amount,
        protocol_fee: Amount,
        central_amount: Amount,
    ) -> crate::error::Result<Self> {
        Self::check_sides(&amount_in, &amount_out)?;
        if !protocol_fee.is_of(&central_amount.asset()) {
            return Err(AmmError::AssetMismatch {
                expected: central_amount.asset(),
                actual: protocol_fee.asset(),
            });
        }
        if central_amount.is_of(&amount_in.asset()) || central_amount.is_of(&amount_out.asset()) {
            return Err(AmmError::AssetMismatch {
                expected: central_amount.asset(),
                actual: amount_in.asset(),
            });
        }
        Ok(Self {
            amount_in,
            amount_out,
            protocol_fee,
            central_amount: Some(central_amount),
        })
    }

    fn check_sides(amount_in: &Amount, amount_out: &Amount) -> crate::error::Result<()> {
        if amount_in.is_zero() {
            return Err(AmmError::InvalidQuantity("amount_in must be positive"));
        }
        if amount_out.is_zero() {
            return Err(AmmError::InsufficientInput);
        }
        if amount_in.asset() == amount_out.asset() {
            return Err(AmmError::SameAsset);
        }
        Ok(())
    }

    /// Returns what the trader pays.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns what the trader receives.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns the protocol fee, always in the central asset.
    pub const fn protocol_fee(&self) -> Amount {
        self.protocol_fee
    }

    /// Returns the gross hub amount for double-hop quotes.
    #[must_use]
    pub const fn central_amount(&self) -> Option<Amount> {
        self.central_amount
    }

    /// Returns `true` if the quote routes through two pools.
    #[must_use]
    pub const fn is_double_hop(&self) -> bool {
        self.central_amount.is_some()
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quote(in={}, out={}, protocol_fee={}",
            self.amount_in, self.amount_out, self.protocol_fee
        )?;
        if let Some(central) = self.central_amount {
            write!(f, ", central={central}")?;
        }
        write!(f, ")")
    }
}
