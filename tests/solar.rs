use power_engineering_labs::calc;
use power_engineering_labs::error::CalcError;
use power_engineering_labs::solar::profit::{
    erf, normal_cdf, SolarInput, SolarProfitCalculator, SIGMA_CURRENT, SIGMA_IMPROVED,
};

fn close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() < tol,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn erf_approximation_accuracy() {
    close(erf(0.0), 0.0, 1e-8);
    close(erf(0.5), 0.520_499_877_8, 2e-7);
    close(erf(1.0), 0.842_700_792_9, 2e-7);
    close(erf(-1.0), -0.842_700_792_9, 2e-7);
    close(normal_cdf(0.0, 0.0, 1.0), 0.5, 1e-8);
}

#[test]
fn improved_forecast_turns_profit() {
    let res = calc::run::<SolarProfitCalculator>(SolarInput {
        pc: 5.0,
        delta: 20.0,
    })
    .expect("solar calc");
    assert_eq!(res.current.sigma_mw, SIGMA_CURRENT);
    assert_eq!(res.improved.sigma_mw, SIGMA_IMPROVED);
    assert_eq!(res.forecast_error_pct, 20.0);
    // ±0.25 MW 대역: σ=1 → erf(0.25/√2), σ=0.25 → erf(1/√2)
    close(res.current.energy_share_pct, 19.741, 1e-2);
    close(res.improved.energy_share_pct, 68.269, 1e-2);
    close(res.current.profit + res.current.penalty, 5.0 * 24.0 * 7.0, 1e-9);
    close(res.net_profit, 840.0 * (2.0 * 0.682_689 - 1.0), 1e-2);
}

#[test]
fn solar_requires_positive_power() {
    let err = calc::run::<SolarProfitCalculator>(SolarInput::default()).unwrap_err();
    assert!(matches!(err, CalcError::InvalidInput(_)));
}
