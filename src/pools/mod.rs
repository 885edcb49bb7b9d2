//! Pool implementations and the registry that owns them.
//!
//! | Type | Role |
//! |------|------|
//! | [`ConstantProductPool`] | `x · y = k` pool for one (central, secondary) pair |
//! | [`PoolRegistry`] | secondary asset → pool map, implements [`PoolSource`](crate::traits::PoolSource) |

mod constant_product;
mod registry;

pub use constant_product::ConstantProductPool;
pub use registry::PoolRegistry;
