//! Hub-routed pricing example.
//!
//! Demonstrates building a market around a central asset, quoting every
//! route in both directions, and settling a trade before quoting again.
//!
//! # Run
//!
//! ```bash
//! cargo run --example quote_route
//! ```

use hubswap::config::{MarketConfig, PoolConfig, PricerConfig};
use hubswap::domain::{Amount, AssetId, BasisPoints, Quote, SettlementDelta};
use hubswap::factory::MarketFactory;
use hubswap::traits::{PoolSource, QuotePool};

fn print_quote(label: &str, quote: &Quote) {
    println!("{label}");
    println!("  pay:          {}", quote.amount_in().value());
    println!("  receive:      {}", quote.amount_out().value());
    println!("  protocol fee: {}", quote.protocol_fee().value());
    if let Some(central) = quote.central_amount() {
        println!("  via hub:      {}", central.value());
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Hub-Routed Constant Product Pricing ===\n");

    // ── 1. Name the assets ──────────────────────────────────────────────
    let moola = AssetId::from_bytes([1u8; 32]);
    let bucks = AssetId::from_bytes([2u8; 32]);
    let simoleans = AssetId::from_bytes([3u8; 32]);

    // ── 2. Describe the market ──────────────────────────────────────────
    //    Pool fee 0.24% (0.12% per leg on a double hop),
    //    protocol fee 0.06% taken in the central asset.
    let config = MarketConfig::new(
        PricerConfig::new(moola, BasisPoints::new(24), BasisPoints::new(6))?,
        vec![
            PoolConfig::new(bucks, 800_000, 500_000)?,
            PoolConfig::new(simoleans, 800_000, 300_000)?,
        ],
    )?;

    // ── 3. Build the pricer ─────────────────────────────────────────────
    let mut pricer = MarketFactory::create(&config)?;
    println!("Pools registered: {}\n", pricer.source().len());

    // ── 4. Quote every route ────────────────────────────────────────────
    print_quote(
        "Sell 10 000 moola for bucks:",
        &pricer.quote_given_input(Amount::new(moola, 10_000), bucks)?,
    );
    print_quote(
        "Sell 10 000 bucks for moola:",
        &pricer.quote_given_input(Amount::new(bucks, 10_000), moola)?,
    );
    print_quote(
        "Buy 10 000 moola with bucks:",
        &pricer.quote_given_output(bucks, Amount::new(moola, 10_000))?,
    );
    print_quote(
        "Sell 10 000 bucks for simoleans:",
        &pricer.quote_given_input(Amount::new(bucks, 10_000), simoleans)?,
    );
    print_quote(
        "Buy 10 001 bucks with simoleans:",
        &pricer.quote_given_output(simoleans, Amount::new(bucks, 10_001))?,
    );

    // ── 5. Settle a trade and quote again ───────────────────────────────
    let quote = pricer.quote_given_input(Amount::new(moola, 10_000), bucks)?;
    let pool_share = quote.amount_in().value() - quote.protocol_fee().value();
    let delta = SettlementDelta::into_central(pool_share, quote.amount_out().value())?;
    pricer.source_mut().settle(&bucks, delta)?;

    let (central, secondary) = pricer.source().pool(&bucks)?.reserves();
    println!("\nAfter settlement: moola {central}, bucks {secondary}");
    print_quote(
        "Sell 10 000 moola for bucks again:",
        &pricer.quote_given_input(Amount::new(moola, 10_000), bucks)?,
    );

    Ok(())
}
