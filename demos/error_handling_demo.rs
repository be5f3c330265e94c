// demos/error_handling_demo.rs
use optionlab::backtest::engine::run_backtest_with_config;
use optionlab::lattice::binomial::LatticeParams;
use optionlab::{price_binomial, price_bsm, BacktestConfig, EngineError, PricingInputs};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    println!("Error Handling Demo for optionlab");
    println!("=================================\n");

    // Test 1: Degenerate inputs fall back to intrinsic value
    println!("1. Testing expired option (T = 0)...");
    let expired = PricingInputs::new(120.0, 100.0, 0.0, 0.05, 0.2);
    let result = price_bsm(&expired);
    println!("   ✓ Intrinsic value: call = {}, put = {}", result.call, result.put);

    println!("\n2. Testing zero volatility on the lattice...");
    match price_binomial(&PricingInputs::new(90.0, 100.0, 1.0, 0.05, 0.0)) {
        Ok(result) => println!("   ✓ Intrinsic value: call = {}, put = {}", result.call, result.put),
        Err(e) => println!("   Unexpected error: {}", e),
    }

    // Test 3: Arbitrage guard
    println!("\n3. Testing high rate, low volatility lattice...");
    let guarded = PricingInputs::new(100.0, 100.0, 1.0, 0.5, 0.01).with_steps(50);
    let params = LatticeParams::new(&guarded, 50);
    match price_binomial(&guarded) {
        Ok(result) => println!("   ✓ p = {:.4} outside [0, 1], premiums zeroed: {:?}", params.p, result),
        Err(e) => println!("   Unexpected error: {}", e),
    }

    // Test 4: Hard failures
    println!("\n4. Testing zero lattice steps...");
    match price_binomial(&PricingInputs::default().with_steps(0)) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    println!("\n5. Testing non-finite spot...");
    match price_binomial(&PricingInputs::new(f64::NAN, 100.0, 1.0, 0.05, 0.2)) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(EngineError::InvalidParameter { parameter, .. }) => {
            println!("   ✓ Rejected parameter '{}'", parameter)
        }
        Err(e) => println!("   Other error: {}", e),
    }

    println!("\n6. Testing invalid backtest configurations...");
    let configs = [
        BacktestConfig {
            years: 0,
            ..Default::default()
        },
        BacktestConfig {
            days_per_month: 30,
            ..Default::default()
        },
        BacktestConfig {
            initial_investment: -1.0,
            ..Default::default()
        },
    ];
    for config in &configs {
        match run_backtest_with_config(config) {
            Ok(_) => println!("   Unexpected: Should have failed!"),
            Err(e) => println!("   ✓ Caught error: {}", e),
        }
    }

    println!("\nAll error handling tests completed!");
}
