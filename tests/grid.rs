use power_engineering_labs::calc;
use power_engineering_labs::error::CalcError;
use power_engineering_labs::grid::cable::{CableCalculator, CableInput};
use power_engineering_labs::grid::short_circuit::{ShortCircuitCalculator, ShortCircuitInput};

fn close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() < tol,
        "expected {expected}, got {actual}"
    );
}

fn cable_input() -> CableInput {
    CableInput {
        sm: 1.3,
        unom: 10.0,
        ik: 2.5,
        tf: 2.5,
        jek: 1.4,
        ct: 92.0,
    }
}

#[test]
fn cable_section_meets_thermal_requirement() {
    let res = calc::run::<CableCalculator>(cable_input()).expect("cable calc");
    close(res.operating_current_a, 75.0555, 1e-3);
    close(res.emergency_current_a, 2.0 * res.operating_current_a, 1e-12);
    close(res.economic_section_mm2, 75.0555 / 1.4, 1e-3);
    close(res.min_thermal_section_mm2, 2500.0 * 2.5f64.sqrt() / 92.0, 1e-9);
    assert!(res.section_ok);
}

#[test]
fn cable_section_too_small_for_long_fault() {
    let res = calc::run::<CableCalculator>(CableInput {
        tf: 10.0,
        ..cable_input()
    })
    .unwrap();
    assert!(!res.section_ok);
}

#[test]
fn cable_rejects_zero_divisors() {
    for input in [
        CableInput { unom: 0.0, ..cable_input() },
        CableInput { jek: 0.0, ..cable_input() },
        CableInput { ct: 0.0, ..cable_input() },
        CableInput { tf: -1.0, ..cable_input() },
    ] {
        assert!(matches!(
            calc::run::<CableCalculator>(input),
            Err(CalcError::InvalidInput(_))
        ));
    }
}

#[test]
fn short_circuit_currents() {
    let res = calc::run::<ShortCircuitCalculator>(ShortCircuitInput {
        unom: 10.5,
        sk: 200.0,
        xc: 0.55,
        xt: 1.84,
        sb: 100.0,
    })
    .expect("short circuit calc");
    let sqrt3 = 3f64.sqrt();
    close(res.total_reactance_ohm, 2.39, 1e-12);
    close(res.initial_current_a, 10_500.0 / (sqrt3 * 2.39), 1e-9);
    close(res.system_reactance_pu, 0.275, 1e-12);
    close(res.transformer_reactance_pu, 0.92, 1e-12);
    close(res.total_reactance_pu, 1.195, 1e-12);
    close(res.base_current_ka, 100.0 / (sqrt3 * 10.5), 1e-12);
    close(
        res.initial_current_pu,
        res.initial_current_a / res.base_current_ka,
        1e-9,
    );
}

#[test]
fn short_circuit_requires_reactance() {
    let err = calc::run_json::<ShortCircuitCalculator>(
        br#"{"unom": 10.5, "sk": 200, "sb": 100}"#,
    )
    .unwrap_err();
    assert_eq!(err, CalcError::invalid("total reactance must be positive"));
}
