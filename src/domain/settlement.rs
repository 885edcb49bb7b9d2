//! Matched reserve deltas applied by the settlement collaborator.

use core::fmt;

use crate::error::AmmError;

/// Which reserve grows when a settlement is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SettlementDirection {
    /// Central reserve grows, secondary reserve shrinks.
    IntoCentral = 0,
    /// Secondary reserve grows, central reserve shrinks.
    IntoSecondary = 1,
}

impl fmt::Display for SettlementDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IntoCentral => write!(f, "IntoCentral"),
            Self::IntoSecondary => write!(f, "IntoSecondary"),
        }
    }
}

/// A matched pair of reserve changes for one pool.
///
/// A settled trade always moves one reserve up and the other down. The pair
/// is applied atomically through
/// [`PoolAdmin::apply_settlement`](crate::traits::PoolAdmin::apply_settlement):
/// either both reserves change or neither does.
///
/// # Examples
///
/// ```
/// use hubswap::domain::SettlementDelta;
///
/// let delta = SettlementDelta::into_central(9_992, 3_692);
/// assert!(delta.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettlementDelta {
    /// The pool received central asset and paid out secondary asset.
    IntoCentral {
        /// Central asset added to the pool.
        central_in: u128,
        /// Secondary asset removed from the pool.
        secondary_out: u128,
    },
    /// The pool received secondary asset and paid out central asset.
    IntoSecondary {
        /// Secondary asset added to the pool.
        secondary_in: u128,
        /// Central asset removed from the pool.
        central_out: u128,
    },
}

impl SettlementDelta {
    /// Creates an [`IntoCentral`](Self::IntoCentral) delta.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidQuantity`] if both values are zero.
    pub const fn into_central(central_in: u128, secondary_out: u128) -> crate::error::Result<Self> {
        if central_in == 0 && secondary_out == 0 {
            return Err(AmmError::InvalidQuantity("settlement moves nothing"));
        }
        Ok(Self::IntoCentral {
            central_in,
            secondary_out,
        })
    }

    /// Creates an [`IntoSecondary`](Self::IntoSecondary) delta.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidQuantity`] if both values are zero.
    pub const fn into_secondary(
        secondary_in: u128,
        central_out: u128,
    ) -> crate::error::Result<Self> {
        if secondary_in == 0 && central_out == 0 {
            return Err(AmmError::InvalidQuantity("settlement moves nothing"));
        }
        Ok(Self::IntoSecondary {
            secondary_in,
            central_out,
        })
    }

    /// Returns the [`SettlementDirection`] of this delta.
    #[must_use]
    pub const fn direction(&self) -> SettlementDirection {
        match self {
            Self::IntoCentral { .. } => SettlementDirection::IntoCentral,
            Self::IntoSecondary { .. } => SettlementDirection::IntoSecondary,
        }
    }
}
