//! Constant product pricing formulas (`x · y = k`).
//!
//! Both functions are pure and operate on raw reserve values. The pool fee
//! is never separated from the input: it is expressed as a reduced
//! effective input and so stays inside the pool, growing `k`.
//!
//! # Forward (given input)
//!
//! ```text
//! effective = input × (10 000 − fee_bps)
//! output    = ⌊ effective × reserve_out / (reserve_in × 10 000 + effective) ⌋
//! ```
//!
//! # Inverse (given output)
//!
//! ```text
//! input = ⌊ output × reserve_in × 10 000 / ((reserve_out − output) × (10 000 − fee_bps)) ⌋ + 1
//! ```
//!
//! The inverse always adds one unit, so feeding its result back through the
//! forward formula yields at least the requested output. Rounding therefore
//! always favours the pool.

use crate::domain::{BasisPoints, BPS_DENOMINATOR};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;

/// Output obtained for selling `input` into a pool.
///
/// # Errors
///
/// - [`AmmError::InvalidQuantity`] if `input` is zero.
/// - [`AmmError::ZeroReserve`] if either reserve is zero.
/// - [`AmmError::InvalidFee`] if `fee` exceeds 100%.
/// - [`AmmError::Overflow`] if an intermediate product exceeds `u128`.
///
/// # Examples
///
/// ```
/// use hubswap::domain::BasisPoints;
/// use hubswap::math::output_given_input;
///
/// let out = output_given_input(9_994, 800_000, 300_000, BasisPoints::new(24));
/// assert_eq!(out.ok(), Some(3_692));
/// ```
pub fn output_given_input(
    input: u128,
    input_reserve: u128,
    output_reserve: u128,
    fee: BasisPoints,
) -> Result<u128, AmmError> {
    if input == 0 {
        return Err(AmmError::InvalidQuantity("input must be positive"));
    }
    if input_reserve == 0 || output_reserve == 0 {
        return Err(AmmError::ZeroReserve);
    }

    let effective = input.safe_mul(&fee.complement()?)?;
    let numerator = effective.safe_mul(&output_reserve)?;
    let denominator = input_reserve.safe_mul(&BPS_DENOMINATOR)?.safe_add(&effective)?;
    numerator.safe_div(&denominator)
}

/// Input required to buy `output` from a pool.
///
/// # Errors
///
/// - [`AmmError::InvalidQuantity`] if `output` is zero.
/// - [`AmmError::InsufficientReserve`] if `output >= output_reserve`.
/// - [`AmmError::ZeroReserve`] if `input_reserve` is zero.
/// - [`AmmError::DivisionByZero`] if `fee` is exactly 100%.
/// - [`AmmError::Overflow`] if an intermediate product exceeds `u128`.
///
/// # Examples
///
/// ```
/// use hubswap::domain::BasisPoints;
/// use hubswap::math::input_given_output;
///
/// let input = input_given_output(3_692, 800_000, 300_000, BasisPoints::new(24));
/// assert_eq!(input.ok(), Some(9_992));
/// ```
pub fn input_given_output(
    output: u128,
    input_reserve: u128,
    output_reserve: u128,
    fee: BasisPoints,
) -> Result<u128, AmmError> {
    if output == 0 {
        return Err(AmmError::InvalidQuantity("output must be positive"));
    }
    if output >= output_reserve {
        return Err(AmmError::InsufficientReserve {
            requested: output,
            available: output_reserve,
        });
    }
    if input_reserve == 0 {
        return Err(AmmError::ZeroReserve);
    }

    let numerator = output
        .safe_mul(&input_reserve)?
        .safe_mul(&BPS_DENOMINATOR)?;
    let denominator = output_reserve
        .safe_sub(&output)?
        .safe_mul(&fee.complement()?)?;
    numerator.safe_div(&denominator)?.safe_add(&1)
}
