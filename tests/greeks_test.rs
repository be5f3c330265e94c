// tests/greeks_test.rs
use optionlab::analytics::bs_analytic;
use optionlab::{greeks, PricingInputs};

#[test]
fn test_delta_curve_bounds_and_shape() {
    let inputs = PricingInputs::new(100.0, 100.0, 1.0, 0.05, 0.2);
    let series = greeks(&inputs);

    assert_eq!(series.delta.len(), 101);
    for point in &series.delta {
        assert!((0.0..=1.0).contains(&point.call_value), "Call delta out of range: {:?}", point);
        assert!((-1.0..=0.0).contains(&point.put_value), "Put delta out of range: {:?}", point);
        assert!((point.call_value - point.put_value - 1.0).abs() < 1e-12);
    }

    // call delta rises with spot
    for pair in series.delta.windows(2) {
        assert!(pair[1].call_value >= pair[0].call_value - 1e-12);
    }
}

#[test]
fn test_vega_curve_matches_analytic() {
    let inputs = PricingInputs::new(100.0, 100.0, 1.0, 0.05, 0.2);
    let series = greeks(&inputs);

    assert_eq!(series.vega.len(), 100);
    for point in &series.vega {
        let analytic = bs_analytic::bs_vega(100.0, 100.0, 0.05, point.x, 1.0) / 100.0;
        assert!(point.call_value >= 0.0);
        assert!((point.call_value - analytic).abs() < 1e-12);
        assert_eq!(point.call_value, point.put_value);
    }

    let last = series.vega.last().expect("Non-empty vega curve");
    println!("\nVega at sigma = {}: {}", last.x, last.call_value);
    assert!((last.x - 0.4).abs() < 1e-12);
}

#[test]
fn test_degenerate_inputs_give_empty_curves() {
    let expired = greeks(&PricingInputs::new(100.0, 100.0, 0.0, 0.05, 0.2));
    assert!(expired.delta.is_empty());
    assert!(expired.vega.is_empty());

    let no_vol = greeks(&PricingInputs::new(100.0, 100.0, 1.0, 0.05, 0.0));
    assert!(no_vol.delta.is_empty());
    // every swept volatility is a multiple of σ = 0
    assert!(no_vol.vega.is_empty());
}
