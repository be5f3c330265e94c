// demos/demo.rs
use optionlab::analytics::parity::parity_residual;
use optionlab::{
    binomial_convergence, greeks, price_binomial, price_bsm, run_backtest, synthetic_parity,
    PricingInputs,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().collect();
    let seed = args
        .iter()
        .position(|a| a == "--seed")
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(42);

    println!("Running optionlab Demo\n");

    let inputs = PricingInputs::new(100.0, 100.0, 1.0, 0.05, 0.2);
    println!("Inputs: S = {}, K = {}, T = {}, r = {}, sigma = {}\n", inputs.s, inputs.k, inputs.t, inputs.r, inputs.sigma);

    let closed_form = price_bsm(&inputs);
    let lattice = price_binomial(&inputs).expect("Valid inputs");
    println!("{:<22} {:>10} {:>10}", "Model", "Call", "Put");
    println!("{:<22} {:>10.4} {:>10.4}", "Black-Scholes-Merton", closed_form.call, closed_form.put);
    println!("{:<22} {:>10.4} {:>10.4}", "Binomial (50 steps)", lattice.call, lattice.put);
    println!("Parity residual: {:.2e}\n", parity_residual(&inputs));

    println!("Lattice convergence:");
    println!("{:>6} {:>10} {:>12}", "Steps", "Call", "Call Error");
    let rows = binomial_convergence(&inputs, &[10, 25, 50, 100, 200, 500, 1000]).expect("Valid inputs");
    for row in &rows {
        println!("{:>6} {:>10.4} {:>12.6}", row.steps, row.call, row.call_error);
    }

    let series = greeks(&inputs);
    if let (Some(first), Some(last)) = (series.delta.first(), series.delta.last()) {
        println!("\nCall delta: {:.4} at S = {:.1}, {:.4} at S = {:.1}", first.call_value, first.x, last.call_value, last.x);
    }
    if let (Some(first), Some(last)) = (series.vega.first(), series.vega.last()) {
        println!("Vega (per 1%): {:.4} at sigma = {:.3}, {:.4} at sigma = {:.3}", first.call_value, first.x, last.call_value, last.x);
    }

    let parity = synthetic_parity(&inputs);
    println!("\nActual call cost:    {:.4}", parity.actual_call_cost);
    println!("Synthetic call cost: {:.4}", parity.synthetic_call_cost);
    println!("Cost difference:     {:.4}", parity.cost_difference());

    println!("\nBacktest (seed {}):", seed);
    println!("{:<16} {:>10} {:>9} {:>10} {:>9}", "Strategy", "Total", "Win Rate", "Drawdown", "Vol");
    match run_backtest(Some(seed)) {
        Ok(results) => {
            for result in &results {
                let m = &result.metrics;
                println!(
                    "{:<16} {:>9.2}% {:>8.1}% {:>9.2}% {:>8.2}%",
                    result.name.display_name(),
                    m.total_return * 100.0,
                    m.win_rate * 100.0,
                    m.max_drawdown * 100.0,
                    m.annualized_volatility * 100.0
                );
            }
        }
        Err(e) => eprintln!("Backtest failed: {}", e),
    }
}
