//! Route classification for a trade between two assets.

use core::fmt;

use crate::domain::{AssetId, AssetRole};
use crate::error::AmmError;
use crate::traits::PoolSource;

/// The path a trade takes through the hub.
///
/// A route is fixed by the roles of its two endpoints; the pool set is only
/// consulted to resolve those roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Central in, secondary out. One pool, protocol fee on the input side.
    CentralToSecondary {
        /// The secondary asset received.
        secondary: AssetId,
    },
    /// Secondary in, central out. One pool, protocol fee on the output side.
    SecondaryToCentral {
        /// The secondary asset paid.
        secondary: AssetId,
    },
    /// Secondary in, another secondary out, through the central asset.
    SecondaryToSecondary {
        /// The secondary asset paid.
        from: AssetId,
        /// The secondary asset received.
        to: AssetId,
    },
}

impl Route {
    /// Classifies a trade of `asset_in` for `asset_out` against `source`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::SameAsset`] if both identities are equal.
    /// - [`AmmError::PoolNotFound`] if either asset is unknown to `source`.
    pub fn classify<S: PoolSource + ?Sized>(
        source: &S,
        asset_in: AssetId,
        asset_out: AssetId,
    ) -> Result<Self, AmmError> {
        if asset_in == asset_out {
            return Err(AmmError::SameAsset);
        }
        match (source.role_of(&asset_in)?, source.role_of(&asset_out)?) {
            (AssetRole::Central, AssetRole::Secondary) => Ok(Self::CentralToSecondary {
                secondary: asset_out,
            }),
            (AssetRole::Secondary, AssetRole::Central) => Ok(Self::SecondaryToCentral {
                secondary: asset_in,
            }),
            (AssetRole::Secondary, AssetRole::Secondary) => Ok(Self::SecondaryToSecondary {
                from: asset_in,
                to: asset_out,
            }),
            // Only one asset can be central, and the identities differ.
            (AssetRole::Central, AssetRole::Central) => Err(AmmError::SameAsset),
        }
    }

    /// Returns `true` for a route through two pools.
    #[must_use]
    pub const fn is_double_hop(&self) -> bool {
        matches!(self, Self::SecondaryToSecondary { .. })
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CentralToSecondary { .. } => write!(f, "central->secondary"),
            Self::SecondaryToCentral { .. } => write!(f, "secondary->central"),
            Self::SecondaryToSecondary { .. } => write!(f, "secondary->central->secondary"),
        }
    }
}
