//! Role an asset plays in the hub-and-spoke market.

use core::fmt;

/// Whether an asset is the routing hub or one of the spokes.
///
/// Roles are resolved once from registry state (see
/// [`PoolSource::role_of`](crate::traits::PoolSource::role_of)) and the
/// pricer classifies each request from the two endpoint roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetRole {
    /// The single hub asset every pool is paired against.
    Central,
    /// An asset with its own pool against the central asset.
    Secondary,
}

impl AssetRole {
    /// Returns `true` for [`AssetRole::Central`].
    #[must_use]
    pub const fn is_central(&self) -> bool {
        matches!(self, Self::Central)
    }
}

impl fmt::Display for AssetRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Central => write!(f, "Central"),
            Self::Secondary => write!(f, "Secondary"),
        }
    }
}
