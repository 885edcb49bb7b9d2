//! Property-based tests for the pricer.
//!
//! 1. **Protocol fee side**: the fee is always denominated in the central asset.
//! 2. **Invariant growth**: settling any single-hop quote strictly grows `k`
//!    when the pool fee is non-zero.
//! 3. **Round trip**: the pool share of a reconciled single-hop input,
//!    priced forward, yields exactly the pool's side of the quote. Exact
//!    whenever each unit of input buys at most one unit of output.
//! 4. **Given output delivers**: buying a secondary never yields less than
//!    requested.
//! 5. **Hop-fee split**: a double hop prices each leg at `pool_fee / 2`.

use proptest::prelude::*;

use super::Pricer;
use crate::config::PricerConfig;
use crate::domain::{Amount, AssetId, BasisPoints, SettlementDelta};
use crate::math::output_given_input;
use crate::pools::{ConstantProductPool, PoolRegistry};
use crate::traits::{PoolAdmin, PoolSource};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn moola() -> AssetId {
    AssetId::from_bytes([1u8; 32])
}

fn bucks() -> AssetId {
    AssetId::from_bytes([2u8; 32])
}

fn simoleans() -> AssetId {
    AssetId::from_bytes([3u8; 32])
}

fn make_pricer(
    pool_fee: u32,
    protocol_fee: u32,
    bucks_reserves: (u128, u128),
    sim_reserves: (u128, u128),
) -> Pricer<PoolRegistry> {
    let mut registry = PoolRegistry::new(moola());
    for (secondary, (central_reserve, secondary_reserve)) in
        [(bucks(), bucks_reserves), (simoleans(), sim_reserves)]
    {
        let Ok(pool) =
            ConstantProductPool::new(moola(), secondary, central_reserve, secondary_reserve)
        else {
            panic!("valid pool");
        };
        let Ok(()) = registry.register(pool) else {
            panic!("registered");
        };
    }
    let Ok(config) = PricerConfig::new(
        moola(),
        BasisPoints::new(pool_fee),
        BasisPoints::new(protocol_fee),
    ) else {
        panic!("valid config");
    };
    let Ok(pricer) = Pricer::new(config, registry) else {
        panic!("valid pricer");
    };
    pricer
}

fn snapshot(pricer: &Pricer<PoolRegistry>, secondary: AssetId) -> ConstantProductPool {
    let Ok(pool) = pricer.source().pool(&secondary) else {
        panic!("registered pool");
    };
    pool
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in range [10_000, 10_000_000] to avoid extremes.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=10_000_000u128
}

/// Pool fee in [1, 100] bp.
fn pool_fee_strategy() -> impl Strategy<Value = u32> {
    1u32..=100u32
}

/// Protocol fee in [0, 50] bp.
fn protocol_fee_strategy() -> impl Strategy<Value = u32> {
    0u32..=50u32
}

/// `(input_reserve, output_reserve)` with the input side at least as deep.
fn ordered_reserves_strategy() -> impl Strategy<Value = (u128, u128)> {
    (reserve_strategy(), 0u128..=10_000_000u128).prop_map(|(out, extra)| (out + extra, out))
}

/// Trade size as a per-mille fraction of the relevant reserve.
fn fraction_strategy() -> impl Strategy<Value = u128> {
    1u128..=500u128
}

// ---------------------------------------------------------------------------
// Property 1: Protocol fee side
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_protocol_fee_in_central_asset(
        rc in reserve_strategy(),
        rs in reserve_strategy(),
        pool_fee in pool_fee_strategy(),
        protocol_fee in protocol_fee_strategy(),
        frac in fraction_strategy(),
    ) {
        let pricer = make_pricer(pool_fee, protocol_fee, (rc, rs), (rc, rs));
        let amount = (rs * frac / 1_000).max(1);

        for (asset_in, asset_out) in [
            (moola(), bucks()),
            (bucks(), moola()),
            (bucks(), simoleans()),
        ] {
            let Ok(quote) = pricer.quote_given_input(Amount::new(asset_in, amount), asset_out) else {
                continue;
            };
            prop_assert_eq!(quote.protocol_fee().asset(), moola());
            prop_assert_eq!(quote.is_double_hop(), asset_in != moola() && asset_out != moola());
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: Invariant growth
// ---------------------------------------------------------------------------

/// Settles `delta` on a snapshot of the `secondary` pool and returns
/// `(k_before, k_after)`.
fn settle_snapshot(
    pricer: &Pricer<PoolRegistry>,
    secondary: AssetId,
    delta: SettlementDelta,
) -> (u128, u128) {
    let mut pool = snapshot(pricer, secondary);
    let Ok(k_before) = pool.invariant() else {
        panic!("invariant fits u128");
    };
    let Ok(()) = pool.apply_settlement(delta) else {
        panic!("settlement applies");
    };
    let Ok(k_after) = pool.invariant() else {
        panic!("invariant fits u128");
    };
    (k_before, k_after)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_settled_central_input_grows_invariant(
        rc in reserve_strategy(),
        rs in reserve_strategy(),
        pool_fee in pool_fee_strategy(),
        protocol_fee in protocol_fee_strategy(),
        frac in fraction_strategy(),
    ) {
        let pricer = make_pricer(pool_fee, protocol_fee, (rc, rs), (rc, rs));
        let amount = (rc * frac / 1_000).max(1);
        let Ok(quote) = pricer.quote_given_input(Amount::new(moola(), amount), bucks()) else {
            return Ok(());
        };

        let pool_share = quote.amount_in().value() - quote.protocol_fee().value();
        let Ok(delta) = SettlementDelta::into_central(pool_share, quote.amount_out().value()) else {
            return Ok(());
        };
        let (k_before, k_after) = settle_snapshot(&pricer, bucks(), delta);
        prop_assert!(k_after > k_before, "k did not grow: {} -> {}", k_before, k_after);
    }

    #[test]
    fn prop_settled_secondary_input_grows_invariant(
        rc in reserve_strategy(),
        rs in reserve_strategy(),
        pool_fee in pool_fee_strategy(),
        protocol_fee in protocol_fee_strategy(),
        frac in fraction_strategy(),
    ) {
        let pricer = make_pricer(pool_fee, protocol_fee, (rc, rs), (rc, rs));
        let amount = (rs * frac / 1_000).max(1);
        let Ok(quote) = pricer.quote_given_input(Amount::new(bucks(), amount), moola()) else {
            return Ok(());
        };

        let central_out = quote.amount_out().value() + quote.protocol_fee().value();
        let Ok(delta) = SettlementDelta::into_secondary(quote.amount_in().value(), central_out) else {
            return Ok(());
        };
        let (k_before, k_after) = settle_snapshot(&pricer, bucks(), delta);
        prop_assert!(k_after > k_before, "k did not grow: {} -> {}", k_before, k_after);
    }

    #[test]
    fn prop_settled_central_output_grows_invariant(
        rc in reserve_strategy(),
        rs in reserve_strategy(),
        pool_fee in pool_fee_strategy(),
        protocol_fee in protocol_fee_strategy(),
        frac in fraction_strategy(),
    ) {
        let pricer = make_pricer(pool_fee, protocol_fee, (rc, rs), (rc, rs));
        let target = (rc * frac / 1_000).max(1);
        let Ok(quote) = pricer.quote_given_output(bucks(), Amount::new(moola(), target)) else {
            return Ok(());
        };

        let central_out = quote.amount_out().value() + quote.protocol_fee().value();
        let Ok(delta) = SettlementDelta::into_secondary(quote.amount_in().value(), central_out) else {
            return Ok(());
        };
        let (k_before, k_after) = settle_snapshot(&pricer, bucks(), delta);
        prop_assert!(k_after > k_before, "k did not grow: {} -> {}", k_before, k_after);
    }

    #[test]
    fn prop_settled_secondary_output_grows_invariant(
        rc in reserve_strategy(),
        rs in reserve_strategy(),
        pool_fee in pool_fee_strategy(),
        protocol_fee in protocol_fee_strategy(),
        frac in fraction_strategy(),
    ) {
        let pricer = make_pricer(pool_fee, protocol_fee, (rc, rs), (rc, rs));
        let target = (rs * frac / 1_000).max(1);
        let Ok(quote) = pricer.quote_given_output(moola(), Amount::new(bucks(), target)) else {
            return Ok(());
        };

        let pool_share = quote.amount_in().value() - quote.protocol_fee().value();
        let Ok(delta) = SettlementDelta::into_central(pool_share, quote.amount_out().value()) else {
            return Ok(());
        };
        let (k_before, k_after) = settle_snapshot(&pricer, bucks(), delta);
        prop_assert!(k_after > k_before, "k did not grow: {} -> {}", k_before, k_after);
    }
}

// ---------------------------------------------------------------------------
// Property 3: Round trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_reconciled_central_input_round_trips(
        (rc, rs) in ordered_reserves_strategy(),
        pool_fee in pool_fee_strategy(),
        protocol_fee in protocol_fee_strategy(),
        frac in fraction_strategy(),
    ) {
        let pricer = make_pricer(pool_fee, protocol_fee, (rc, rs), (rc, rs));
        let amount = (rc * frac / 1_000).max(1);
        let Ok(quote) = pricer.quote_given_input(Amount::new(moola(), amount), bucks()) else {
            return Ok(());
        };

        let pool_share = quote.amount_in().value() - quote.protocol_fee().value();
        let Ok(out) = output_given_input(pool_share, rc, rs, BasisPoints::new(pool_fee)) else {
            panic!("forward pass on a quoted input");
        };
        prop_assert_eq!(out, quote.amount_out().value());
    }

    #[test]
    fn prop_reconciled_secondary_input_round_trips(
        (rs, rc) in ordered_reserves_strategy(),
        pool_fee in pool_fee_strategy(),
        protocol_fee in protocol_fee_strategy(),
        frac in fraction_strategy(),
    ) {
        let pricer = make_pricer(pool_fee, protocol_fee, (rc, rs), (rc, rs));
        let amount = (rs * frac / 1_000).max(1);
        let Ok(quote) = pricer.quote_given_input(Amount::new(bucks(), amount), moola()) else {
            return Ok(());
        };

        let Ok(gross) =
            output_given_input(quote.amount_in().value(), rs, rc, BasisPoints::new(pool_fee))
        else {
            panic!("forward pass on a quoted input");
        };
        prop_assert_eq!(gross, quote.amount_out().value() + quote.protocol_fee().value());
        prop_assert!(quote.amount_in().value() <= amount);
    }
}

// ---------------------------------------------------------------------------
// Property 4: Given output delivers
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_buying_secondary_delivers_requested(
        rc in reserve_strategy(),
        rs in reserve_strategy(),
        pool_fee in pool_fee_strategy(),
        protocol_fee in protocol_fee_strategy(),
        frac in fraction_strategy(),
    ) {
        let pricer = make_pricer(pool_fee, protocol_fee, (rc, rs), (rc, rs));
        let target = (rs * frac / 1_000).max(1);
        let Ok(quote) = pricer.quote_given_output(moola(), Amount::new(bucks(), target)) else {
            return Ok(());
        };
        prop_assert!(quote.amount_out().value() >= target);
        prop_assert!(quote.amount_in().value() > quote.protocol_fee().value());
    }
}

// ---------------------------------------------------------------------------
// Property 5: Hop-fee split
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_double_hop_charges_half_fee_per_leg(
        rc in reserve_strategy(),
        rb in reserve_strategy(),
        rs in reserve_strategy(),
        pool_fee in pool_fee_strategy(),
        protocol_fee in protocol_fee_strategy(),
        frac in fraction_strategy(),
    ) {
        let pricer = make_pricer(pool_fee, protocol_fee, (rc, rb), (rc, rs));
        let amount = (rb * frac / 1_000).max(1);
        let Ok(quote) = pricer.quote_given_input(Amount::new(bucks(), amount), simoleans()) else {
            return Ok(());
        };

        let per_leg = BasisPoints::new(pool_fee / 2);
        let Ok(central) = output_given_input(amount, rb, rc, per_leg) else {
            panic!("first leg priced");
        };
        let fee = central * u128::from(protocol_fee) / 10_000;
        let Ok(out) = output_given_input(central - fee, rc, rs, per_leg) else {
            panic!("second leg priced");
        };
        prop_assert_eq!(quote.central_amount(), Some(Amount::new(moola(), central)));
        prop_assert_eq!(quote.protocol_fee(), Amount::new(moola(), fee));
        prop_assert_eq!(quote.amount_out(), Amount::new(simoleans(), out));
    }
}
