use power_engineering_labs::calc::{self, Calculator};
use power_engineering_labs::error::CalcError;
use power_engineering_labs::form::FormFields;
use power_engineering_labs::reliability::equipment_db;
use power_engineering_labs::reliability::losses::{LossesCalculator, LossesInput};
use power_engineering_labs::reliability::outage::{OutageCalculator, OutageInput};

fn close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() < tol,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn transformer_outage() {
    let res = calc::run::<OutageCalculator>(OutageInput {
        pv: 10.0,
        kp: 0.8,
        t: 100.0,
        equipment: "t-110".into(),
    })
    .expect("outage calc");
    assert_eq!(res.failure_rate_per_year, 0.015);
    assert_eq!(res.mean_outage_h, 100.0);
    close(res.outage_coeff, 1.5 / 8760.0, 1e-15);
    close(res.undelivered_energy_mwh, 800.0, 1e-9);
}

#[test]
fn unknown_equipment_is_rejected() {
    let err = calc::run::<OutageCalculator>(OutageInput {
        equipment: "cable-10".into(),
        ..OutageInput::default()
    })
    .unwrap_err();
    assert!(matches!(err, CalcError::InvalidInput(_)));
    assert!(equipment_db::find_equipment("Overhead line 35 kV").is_some());
    assert_eq!(equipment_db::equipment().len(), 4);
}

#[test]
fn losses_with_form_defaults() {
    let form = FormFields::from_pairs(LossesCalculator::form_defaults().iter().copied());
    let input = LossesCalculator::from_form(&form);
    assert_eq!(
        input,
        LossesInput {
            pwt: 23.6,
            kp: 0.7,
            t: 51200,
            wvt: 6451.0,
        }
    );
    let res = calc::run::<LossesCalculator>(input).unwrap();
    close(res.autotransformer_kwh, 845_824.0, 1e-6);
    let mwvt = 0.7 * 51200.0 * 2.048 * 6451.0;
    close(res.transmission_expected_kwh, mwvt, 1e-3);
    close(
        res.total_kwh,
        23.6 * 845_824.0 + 17.6 * mwvt - 2_682_000.0,
        1e-1,
    );
}

#[test]
fn losses_integer_hours_from_form() {
    let form = FormFields::from_pairs([("pwt", "1"), ("kp", "1"), ("t", "12.5"), ("wvt", "0")]);
    let input = LossesCalculator::from_form(&form);
    assert_eq!(input.t, 0);
}
