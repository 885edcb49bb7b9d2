//! Arithmetic utilities for pricing calculations.
//!
//! This module provides [`CheckedArithmetic`] for overflow-safe operations
//! on raw and asset-tagged values, and the two constant product formulas
//! [`output_given_input`] and [`input_given_output`].
//!
//! Everything here is integer-only. There is no floating-point backend.

mod checked;
mod constant_product;

pub use checked::CheckedArithmetic;
pub use constant_product::{input_given_output, output_given_input};
