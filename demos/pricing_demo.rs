//! Pricing demo comparing YieldSpace and Hyperdrive.
//!
//! Prices the same trades against one pool with both models, then derives
//! the pool's spot price and implied rate.  Set `RUST_LOG=yield_amm=debug`
//! to see the engine's per-call events.
//!
//! # Run
//!
//! ```bash
//! cargo run --example pricing_demo --all-features
//! ```

use tracing_subscriber::EnvFilter;
use yield_amm::config::{ModelConfig, ModelKind};
use yield_amm::domain::{MarketState, Quantity};
use yield_amm::factory::DefaultModelFactory;
use yield_amm::traits::PricingModel;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Yield AMM pricing ===\n");

    // ── 1. Describe the pool ────────────────────────────────────────────
    let state = MarketState::new(100_000.0, 100_000.0, 1.0, 1.0, 0.1, 0.0);
    println!("Pool: {state}");

    for kind in ModelKind::ALL {
        // ── 2. Build the model calibrated for 5% APY ────────────────────
        let config = ModelConfig::new(kind, 0.05)?;
        let model = DefaultModelFactory::create(&config)?;
        let time = config.stretched_time(182.5)?;
        println!("\n--- {} ({time}) ---", model.model_name());

        // ── 3. Buy 100 bonds ────────────────────────────────────────────
        let bought = model.calc_in_given_out(Quantity::pt(100.0), &state, time)?;
        println!("  {bought}");
        println!("  Breakdown:   {}", bought.breakdown());
        println!("  Pool after:  {}", bought.post_trade_state());

        // ── 4. Sell 100 base for bonds ──────────────────────────────────
        let sold = model.calc_out_given_in(Quantity::base(100.0), &state, time)?;
        println!("  {sold}");
        println!("  Breakdown:   {}", sold.breakdown());

        // ── 5. Rates implied by the reserves ────────────────────────────
        let spot = model.calc_spot_price_from_reserves(&state, &time)?;
        let apr = model.calc_apr_from_reserves(&state, &time)?;
        println!("  Spot price:  {spot:.6} base per bond");
        println!("  Implied APR: {:.4}%", apr * 100.0);
    }

    // ── 6. A pool this skewed cannot fill the trade ─────────────────────
    let skewed = MarketState::new(30_000_000_000.0, 1.0, 1.0, 1.0, 0.1, 0.0);
    let model = DefaultModelFactory::create_kind(ModelKind::Hyperdrive)?;
    let time = ModelConfig::new(ModelKind::Hyperdrive, 0.05)?.stretched_time(182.5)?;
    match model.calc_in_given_out(Quantity::pt(100.0), &skewed, time) {
        Ok(result) => println!("\nUnexpectedly priced: {result}"),
        Err(err) => println!("\nSkewed pool rejected ({:?}): {err}", err.kind()),
    }

    Ok(())
}
