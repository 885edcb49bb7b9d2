//! Hub-routed price quotes.
//!
//! The [`Pricer`] turns a trade request into a [`Quote`] by routing through
//! at most two pools, each pairing a secondary asset with the central asset.
//!
//! # Fee Model
//!
//! | Route | Pool fee | Protocol fee |
//! |-------|----------|--------------|
//! | central → secondary | full rate | on the central input |
//! | secondary → central | full rate | on the central output |
//! | secondary → secondary | half rate per leg | on the central amount between legs |
//!
//! # Reconciliation
//!
//! Single-hop quotes run one forward and one inverse formula pass against
//! the same pool snapshot, so the reported input is the smallest amount that
//! actually buys the reported output. Exactly one round is performed.
//! Double-hop quotes chain the formula in the direction of the known amount
//! and do not reconcile.

mod route;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use route::Route;

use tracing::{debug, trace};

use crate::config::PricerConfig;
use crate::domain::{Amount, AssetId, Quote, QuoteRequest};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;
use crate::pools::ConstantProductPool;
use crate::traits::{PoolSource, QuotePool};

/// Quotes trades between any two assets known to a [`PoolSource`].
///
/// The pricer holds no mutable state. Every call reads fresh pool
/// snapshots, so quotes issued after a settlement see the new reserves.
///
/// # Example
///
/// ```rust
/// use hubswap::config::PricerConfig;
/// use hubswap::domain::{Amount, AssetId, BasisPoints};
/// use hubswap::pools::{ConstantProductPool, PoolRegistry};
/// use hubswap::pricer::Pricer;
///
/// let moola = AssetId::from_bytes([1u8; 32]);
/// let bucks = AssetId::from_bytes([2u8; 32]);
///
/// let mut registry = PoolRegistry::new(moola);
/// registry
///     .register(ConstantProductPool::new(moola, bucks, 800_000, 300_000).expect("distinct"))
///     .expect("registered");
///
/// let config = PricerConfig::new(moola, BasisPoints::new(24), BasisPoints::new(6)).expect("valid");
/// let pricer = Pricer::new(config, registry).expect("matching hub");
///
/// let quote = pricer
///     .quote_given_input(Amount::new(moola, 10_000), bucks)
///     .expect("quote");
/// assert_eq!(quote.amount_in(), Amount::new(moola, 9_997));
/// assert_eq!(quote.amount_out(), Amount::new(bucks, 3_692));
/// assert_eq!(quote.protocol_fee(), Amount::new(moola, 5));
/// ```
#[derive(Debug, Clone)]
pub struct Pricer<S> {
    config: PricerConfig,
    source: S,
}

impl<S: PoolSource> Pricer<S> {
    /// Creates a pricer over `source`.
    ///
    /// # Errors
    ///
    /// - Any error from [`PricerConfig::validate`].
    /// - [`AmmError::InvalidConfiguration`] if the source's central asset
    ///   differs from the configured one.
    pub fn new(config: PricerConfig, source: S) -> Result<Self, AmmError> {
        config.validate()?;
        if source.central_asset() != config.central_asset() {
            return Err(AmmError::InvalidConfiguration(
                "pool source central asset does not match pricer",
            ));
        }
        Ok(Self { config, source })
    }

    /// Returns the pricer configuration.
    #[must_use]
    pub const fn config(&self) -> &PricerConfig {
        &self.config
    }

    /// Returns the pool source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Returns the pool source mutably, e.g. to settle trades.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Consumes the pricer and returns its pool source.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Dispatches `request` to the matching quote operation.
    ///
    /// # Errors
    ///
    /// See [`quote_given_input`](Self::quote_given_input) and
    /// [`quote_given_output`](Self::quote_given_output).
    pub fn quote(&self, request: QuoteRequest) -> Result<Quote, AmmError> {
        match request {
            QuoteRequest::GivenInput {
                amount_in,
                asset_out,
            } => self.quote_given_input(amount_in, asset_out),
            QuoteRequest::GivenOutput {
                asset_in,
                amount_out,
            } => self.quote_given_output(asset_in, amount_out),
        }
    }

    /// Quotes selling `amount_in` for `asset_out`.
    ///
    /// Single-hop quotes report the reconciled input, which may be slightly
    /// less than `amount_in`; double-hop quotes echo `amount_in`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::SameAsset`] if both sides are the same asset.
    /// - [`AmmError::InvalidQuantity`] if `amount_in` is zero.
    /// - [`AmmError::PoolNotFound`] if either asset is unknown.
    /// - [`AmmError::InsufficientInput`] if the trade would yield nothing.
    /// - Any arithmetic error.
    pub fn quote_given_input(&self, amount_in: Amount, asset_out: AssetId) -> Result<Quote, AmmError> {
        let route = Route::classify(&self.source, amount_in.asset(), asset_out)?;
        if amount_in.is_zero() {
            return Err(AmmError::InvalidQuantity("amount_in must be positive"));
        }

        let quote = match route {
            Route::CentralToSecondary { secondary } => {
                self.sell_central(amount_in, &self.source.pool(&secondary)?)?
            }
            Route::SecondaryToCentral { secondary } => {
                self.sell_secondary(amount_in, &self.source.pool(&secondary)?)?
            }
            Route::SecondaryToSecondary { from, to } => {
                let (from, to) = (self.source.pool(&from)?, self.source.pool(&to)?);
                self.sell_through_hub(amount_in, &from, &to)?
            }
        };
        debug!(
            %route,
            amount_in = %quote.amount_in(),
            amount_out = %quote.amount_out(),
            protocol_fee = quote.protocol_fee().value(),
            "quote given input"
        );
        Ok(quote)
    }

    /// Quotes buying exactly `amount_out` with `asset_in`.
    ///
    /// Single-hop quotes report the forward-reconciled output, which is at
    /// least `amount_out` before the protocol fee; double-hop quotes echo
    /// `amount_out`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::SameAsset`] if both sides are the same asset.
    /// - [`AmmError::InvalidQuantity`] if `amount_out` is zero.
    /// - [`AmmError::PoolNotFound`] if either asset is unknown.
    /// - [`AmmError::InsufficientReserve`] if a pool cannot supply the output.
    /// - Any arithmetic error.
    pub fn quote_given_output(&self, asset_in: AssetId, amount_out: Amount) -> Result<Quote, AmmError> {
        let route = Route::classify(&self.source, asset_in, amount_out.asset())?;
        if amount_out.is_zero() {
            return Err(AmmError::InvalidQuantity("amount_out must be positive"));
        }

        let quote = match route {
            Route::CentralToSecondary { secondary } => {
                self.buy_secondary(asset_in, amount_out, &self.source.pool(&secondary)?)?
            }
            Route::SecondaryToCentral { secondary } => {
                self.buy_central(asset_in, amount_out, &self.source.pool(&secondary)?)?
            }
            Route::SecondaryToSecondary { from, to } => {
                let (from, to) = (self.source.pool(&from)?, self.source.pool(&to)?);
                self.buy_through_hub(amount_out, &from, &to)?
            }
        };
        debug!(
            %route,
            amount_in = %quote.amount_in(),
            amount_out = %quote.amount_out(),
            protocol_fee = quote.protocol_fee().value(),
            "quote given output"
        );
        Ok(quote)
    }

    // -- single hop, given input ---------------------------------------------

    /// Central in: the protocol fee comes off the top, the remainder is
    /// priced, and the input is reconciled against the output it buys.
    fn sell_central(&self, amount_in: Amount, pool: &ConstantProductPool) -> Result<Quote, AmmError> {
        let fee = self.config.pool_fee();
        let pre_fee = self.protocol_fee_on(amount_in.value())?;
        let net = amount_in.value().safe_sub(&pre_fee)?;
        if net == 0 {
            return Err(AmmError::InsufficientInput);
        }
        let out = pool
            .quote_given_input(amount_in.with_value(net), pool.secondary_asset(), fee)?
            .amount_out();
        if out.is_zero() {
            return Err(AmmError::InsufficientInput);
        }
        let reconciled = pool
            .quote_given_output(amount_in.asset(), out, fee)?
            .amount_in();
        let protocol_fee = reconciled.with_value(self.protocol_fee_on(reconciled.value())?);
        trace!(net, reconciled = reconciled.value(), "central input reconciled");

        Quote::single_hop(reconciled.safe_add(&protocol_fee)?, out, protocol_fee)
    }

    /// Secondary in: the gross central output is priced, reconciled, and the
    /// protocol fee is taken from it.
    fn sell_secondary(&self, amount_in: Amount, pool: &ConstantProductPool) -> Result<Quote, AmmError> {
        let fee = self.config.pool_fee();
        let gross = pool
            .quote_given_input(amount_in, pool.central_asset(), fee)?
            .amount_out();
        if gross.is_zero() {
            return Err(AmmError::InsufficientInput);
        }
        let protocol_fee = gross.with_value(self.protocol_fee_on(gross.value())?);
        let reconciled = pool
            .quote_given_output(amount_in.asset(), gross, fee)?
            .amount_in();
        trace!(gross = gross.value(), reconciled = reconciled.value(), "secondary input reconciled");

        Quote::single_hop(reconciled, gross.safe_sub(&protocol_fee)?, protocol_fee)
    }

    // -- single hop, given output --------------------------------------------

    /// Central out: the pool must deliver the target plus the protocol fee.
    fn buy_central(
        &self,
        asset_in: AssetId,
        amount_out: Amount,
        pool: &ConstantProductPool,
    ) -> Result<Quote, AmmError> {
        let fee = self.config.pool_fee();
        let target_fee = amount_out.with_value(self.protocol_fee_on(amount_out.value())?);
        let gross_target = amount_out.safe_add(&target_fee)?;
        let required = pool.quote_given_output(asset_in, gross_target, fee)?.amount_in();
        let delivered = pool
            .quote_given_input(required, amount_out.asset(), fee)?
            .amount_out();
        let protocol_fee = delivered.with_value(self.protocol_fee_on(delivered.value())?);
        trace!(
            gross_target = gross_target.value(),
            delivered = delivered.value(),
            "central output reconciled"
        );

        Quote::single_hop(required, delivered.safe_sub(&protocol_fee)?, protocol_fee)
    }

    /// Secondary out: the required central input is priced, reconciled
    /// forward, and the protocol fee is added on top.
    fn buy_secondary(
        &self,
        asset_in: AssetId,
        amount_out: Amount,
        pool: &ConstantProductPool,
    ) -> Result<Quote, AmmError> {
        let fee = self.config.pool_fee();
        let required = pool.quote_given_output(asset_in, amount_out, fee)?.amount_in();
        let delivered = pool
            .quote_given_input(required, amount_out.asset(), fee)?
            .amount_out();
        let protocol_fee = required.with_value(self.protocol_fee_on(required.value())?);
        trace!(
            required = required.value(),
            delivered = delivered.value(),
            "secondary output reconciled"
        );

        Quote::single_hop(required.safe_add(&protocol_fee)?, delivered, protocol_fee)
    }

    // -- double hop ----------------------------------------------------------

    fn sell_through_hub(
        &self,
        amount_in: Amount,
        from: &ConstantProductPool,
        to: &ConstantProductPool,
    ) -> Result<Quote, AmmError> {
        let fee = self.config.per_hop_fee();
        let central = from
            .quote_given_input(amount_in, from.central_asset(), fee)?
            .amount_out();
        let protocol_fee = central.with_value(self.protocol_fee_on(central.value())?);
        let net = central.safe_sub(&protocol_fee)?;
        if net.is_zero() {
            return Err(AmmError::InsufficientInput);
        }
        let out = to
            .quote_given_input(net, to.secondary_asset(), fee)?
            .amount_out();
        trace!(central = central.value(), net = net.value(), "hub leg priced");

        Quote::double_hop(amount_in, out, protocol_fee, central)
    }

    fn buy_through_hub(
        &self,
        amount_out: Amount,
        from: &ConstantProductPool,
        to: &ConstantProductPool,
    ) -> Result<Quote, AmmError> {
        let fee = self.config.per_hop_fee();
        let central = to
            .quote_given_output(to.central_asset(), amount_out, fee)?
            .amount_in();
        let protocol_fee = central.with_value(self.protocol_fee_on(central.value())?);
        let gross = central.safe_add(&protocol_fee)?;
        let amount_in = from
            .quote_given_output(from.secondary_asset(), gross, fee)?
            .amount_in();
        trace!(central = central.value(), gross = gross.value(), "hub leg priced");

        Quote::double_hop(amount_in, amount_out, protocol_fee, central)
    }

    fn protocol_fee_on(&self, value: u128) -> Result<u128, AmmError> {
        self.config.protocol_fee().apply(value)
    }
}
