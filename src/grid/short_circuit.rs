use serde::{Deserialize, Serialize};

use crate::calc::{self, Calculator, ResultRow};
use crate::error::CalcError;
use crate::form::{FieldSpec, FormFields};

/// 계통 + 변압기 직렬 리액턴스로 3상 단락 전류를 구하기 위한 입력.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortCircuitInput {
    /// 공칭 전압 [kV]
    pub unom: f64,
    /// 계통 단락 용량 [MVA]
    pub sk: f64,
    /// 계통 리액턴스 [Ω]
    pub xc: f64,
    /// 변압기 리액턴스 [Ω]
    pub xt: f64,
    /// 기준 용량 [MVA]
    pub sb: f64,
}

/// 단락 계산 결과. `_pu` 접미사는 기준 용량 대비 단위법 값이다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShortCircuitResult {
    pub total_reactance_ohm: f64,
    /// 초기 대칭 단락 전류 [A]
    pub initial_current_a: f64,
    pub system_reactance_pu: f64,
    pub transformer_reactance_pu: f64,
    pub total_reactance_pu: f64,
    /// 기준 전류 [kA]
    pub base_current_ka: f64,
    pub initial_current_pu: f64,
}

pub fn compute_short_circuit(input: &ShortCircuitInput) -> ShortCircuitResult {
    let sqrt3 = 3f64.sqrt();
    let x_sum = input.xc + input.xt;
    let ik0 = input.unom * 1000.0 / (sqrt3 * x_sum);
    let xc_pu = input.xc * (input.sb / input.sk);
    let xt_pu = input.xt * (input.sb / input.sk);
    let base_current = input.sb / (sqrt3 * input.unom);
    ShortCircuitResult {
        total_reactance_ohm: x_sum,
        initial_current_a: ik0,
        system_reactance_pu: xc_pu,
        transformer_reactance_pu: xt_pu,
        total_reactance_pu: xc_pu + xt_pu,
        base_current_ka: base_current,
        initial_current_pu: ik0 / base_current,
    }
}

pub struct ShortCircuitCalculator;

static FIELDS: [FieldSpec; 5] = [
    FieldSpec::number("unom", "Unom (kV)"),
    FieldSpec::number("sk", "Sk (MVA)"),
    FieldSpec::number("xc", "Xc (Ohm)"),
    FieldSpec::number("xt", "Xt (Ohm)"),
    FieldSpec::number("sb", "Sb (MVA)"),
];

impl Calculator for ShortCircuitCalculator {
    const SLUG: &'static str = "short-circuit";
    const TITLE: &'static str = "Short Circuit Calculation";

    type Input = ShortCircuitInput;
    type Valid = ShortCircuitInput;
    type Output = ShortCircuitResult;

    fn validate(input: ShortCircuitInput) -> Result<ShortCircuitInput, CalcError> {
        if input.unom <= 0.0 || input.sk <= 0.0 || input.sb <= 0.0 {
            return Err(CalcError::invalid(
                "voltage, short-circuit power and base power must be positive",
            ));
        }
        if input.xc + input.xt <= 0.0 {
            return Err(CalcError::invalid("total reactance must be positive"));
        }
        Ok(input)
    }

    fn compute(valid: &ShortCircuitInput) -> ShortCircuitResult {
        compute_short_circuit(valid)
    }

    fn is_finite(out: &ShortCircuitResult) -> bool {
        calc::all_finite(&[
            out.total_reactance_ohm,
            out.initial_current_a,
            out.system_reactance_pu,
            out.transformer_reactance_pu,
            out.total_reactance_pu,
            out.base_current_ka,
            out.initial_current_pu,
        ])
    }

    fn from_form(form: &FormFields) -> ShortCircuitInput {
        ShortCircuitInput {
            unom: form.number("unom"),
            sk: form.number("sk"),
            xc: form.number("xc"),
            xt: form.number("xt"),
            sb: form.number("sb"),
        }
    }

    fn form_fields() -> &'static [FieldSpec] {
        &FIELDS
    }

    fn result_rows(out: &ShortCircuitResult) -> Vec<ResultRow> {
        vec![
            ResultRow::fixed2("Σ impedance at K1", out.total_reactance_ohm, "Ω"),
            ResultRow::fixed2("Initial short-circuit current", out.initial_current_a, "A"),
            ResultRow::fixed2("Xc in PU", out.system_reactance_pu, ""),
            ResultRow::fixed2("Xt in PU", out.transformer_reactance_pu, ""),
            ResultRow::fixed2("Σ impedance in PU", out.total_reactance_pu, ""),
            ResultRow::fixed2("Initial short-circuit current in PU", out.initial_current_pu, ""),
        ]
    }
}
