//! Administrative reserve mutation, separate from quoting.
//!
//! [`PoolAdmin`] is held only by the settlement collaborator. The pricer is
//! written against [`QuotePool`] and [`PoolSource`](super::PoolSource) and
//! never sees this trait.
//!
//! # Atomicity Invariant
//!
//! A [`SettlementDelta`] changes both reserves or neither. If either side
//! would overflow or go negative the pool is left untouched and the error is
//! returned.

use super::QuotePool;
use crate::domain::SettlementDelta;
use crate::error::AmmError;

/// Settlement capability for a pool.
pub trait PoolAdmin: QuotePool {
    /// Applies a matched pair of reserve changes.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Underflow`] if a reserve would go below zero.
    /// - [`AmmError::Overflow`] if a reserve would exceed `u128`.
    fn apply_settlement(&mut self, delta: SettlementDelta) -> Result<(), AmmError>;
}
