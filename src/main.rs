// Battery Swap - demo run
// Registers a small fleet, performs a few swaps, prints receipts + final state.

use anyhow::Result;
use battery_swap::{CostCalculator, RegistryConfig, StdoutSink, SwapRegistry};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = RegistryConfig::from_env()?;

    println!("🔋 Battery Swap - demo");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Conversion rate: {}", config.conversion_rate);

    let mut registry = SwapRegistry::with_config(config, StdoutSink);
    registry.register_battery("B1", 100.0);
    registry.register_battery("B2", 60.0);
    registry.register_driver("D1", "Alice");
    registry.register_driver("D2", "Bob");
    registry.register_station("S1", 5.0);
    registry.register_station("S2", 3.0);

    println!("\n🔄 Swaps...");
    registry.swap("B1", "D1", "S1", 20.0, 50.0)?;
    registry.swap("B1", "D1", "S1", 10.0, 5.0)?;
    registry.swap("B2", "D2", "S2", 75.0, 120.0)?;

    // Unknown battery: reported, state untouched
    if let Err(err) = registry.swap("BX", "D1", "S1", 5.0, 5.0) {
        eprintln!("❌ {}", err);
    }

    println!("\n💵 Cost-only quote for 42 units:");
    CostCalculator::new(registry.conversion_rate()).report(42.0, &StdoutSink);

    println!("\n📊 Swaps recorded: {}", registry.events().len());
    println!("📊 Total revenue: ${:.2}", registry.total_revenue());
    println!("📊 Depleted batteries: {}", registry.depleted_batteries().len());

    println!("\n{}", registry.snapshot_json()?);

    Ok(())
}
