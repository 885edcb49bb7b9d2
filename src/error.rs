//! Unified error types for the hubswap pricing core.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type. Every error is terminal for the quote request that raised it:
//! nothing is retried internally and no partial quote escapes.

use crate::domain::AssetId;

/// Crate-wide error enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AmmError {
    /// An addition or multiplication exceeded the `u128` range.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// A subtraction would have produced a negative value.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// An asset identity does not match the roles of the pool it was sent to.
    #[error("unknown asset: {0}")]
    UnknownAsset(&'static str),

    /// No pool is registered for the given secondary asset.
    #[error("no pool registered for asset {0}")]
    PoolNotFound(AssetId),

    /// The requested output is not strictly below the available reserve.
    #[error("insufficient reserve: requested {requested}, available {available}")]
    InsufficientReserve {
        /// Output value that was asked for.
        requested: u128,
        /// Reserve the output would be paid from.
        available: u128,
    },

    /// A pool reserve is zero, so no price exists.
    #[error("pool reserve is zero")]
    ZeroReserve,

    /// A trade amount is not acceptable (for example zero).
    #[error("invalid quantity: {0}")]
    InvalidQuantity(&'static str),

    /// A fee rate is outside its allowed range.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// A configuration value is inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// Two amounts of different assets were combined.
    #[error("asset mismatch: expected {expected}, got {actual}")]
    AssetMismatch {
        /// Asset of the left-hand operand.
        expected: AssetId,
        /// Asset of the right-hand operand.
        actual: AssetId,
    },

    /// Input and output of a trade are the same asset.
    #[error("cannot quote an asset against itself")]
    SameAsset,

    /// A pool for this secondary asset is already registered.
    #[error("pool already registered for asset {0}")]
    DuplicatePool(AssetId),

    /// The trade is too small to produce any output.
    #[error("input too small to produce any output")]
    InsufficientInput,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AmmError>;
