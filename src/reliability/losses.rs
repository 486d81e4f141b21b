use serde::{Deserialize, Serialize};

use crate::calc::{self, Calculator, ResultRow};
use crate::error::CalcError;
use crate::form::{FieldSpec, FormFields};

/// 단위 전력당 자동변압기 손실 계수
const AUTOTRANSFORMER_LOSS_WEIGHT: f64 = 23.6;
/// 송전 손실 기대값 가중치
const TRANSMISSION_LOSS_WEIGHT: f64 = 17.6;
/// 연간 손실 보정 상수 [kWh]
const LOSS_OFFSET_KWH: f64 = 2_682_000.0;

/// 연간 전력 손실 계산 입력.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LossesInput {
    /// 부하 [MW]
    pub pwt: f64,
    /// 이용 계수
    pub kp: f64,
    /// 연간 운전 시간 [h]
    pub t: i64,
    /// 송전 손실 파라미터 W
    pub wvt: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LossesResult {
    /// 자동변압기 손실 [kWh]
    pub autotransformer_kwh: f64,
    /// 송전 손실 기대값 [kWh]
    pub transmission_expected_kwh: f64,
    /// 총 손실 [kWh]
    pub total_kwh: f64,
}

pub fn compute_losses(input: &LossesInput) -> LossesResult {
    let hours = input.t as f64;
    let mav = input.kp * input.pwt * hours;
    let mwvt = input.kp * hours * 4e-3 * 5.12e2 * input.wvt;
    LossesResult {
        autotransformer_kwh: mav,
        transmission_expected_kwh: mwvt,
        total_kwh: AUTOTRANSFORMER_LOSS_WEIGHT * mav + TRANSMISSION_LOSS_WEIGHT * mwvt
            - LOSS_OFFSET_KWH,
    }
}

pub struct LossesCalculator;

static FIELDS: [FieldSpec; 4] = [
    FieldSpec::number("pwt", "Load (MW)"),
    FieldSpec::number("kp", "Utilization coefficient"),
    FieldSpec::number("t", "Operating hours per year"),
    FieldSpec::number("wvt", "Parameter W"),
];

impl Calculator for LossesCalculator {
    const SLUG: &'static str = "energy-losses";
    const TITLE: &'static str = "Energy Losses Calculation";

    type Input = LossesInput;
    type Valid = LossesInput;
    type Output = LossesResult;

    /// 손실식은 모든 실수 입력에서 정의되므로 그대로 통과시킨다.
    fn validate(input: LossesInput) -> Result<LossesInput, CalcError> {
        Ok(input)
    }

    fn compute(valid: &LossesInput) -> LossesResult {
        compute_losses(valid)
    }

    fn is_finite(out: &LossesResult) -> bool {
        calc::all_finite(&[
            out.autotransformer_kwh,
            out.transmission_expected_kwh,
            out.total_kwh,
        ])
    }

    fn from_form(form: &FormFields) -> LossesInput {
        LossesInput {
            pwt: form.number("pwt"),
            kp: form.number("kp"),
            t: form.integer("t"),
            wvt: form.number("wvt"),
        }
    }

    fn form_fields() -> &'static [FieldSpec] {
        &FIELDS
    }

    fn form_defaults() -> &'static [(&'static str, &'static str)] {
        &[("pwt", "23.6"), ("kp", "0.7"), ("t", "51200"), ("wvt", "6451")]
    }

    fn result_rows(out: &LossesResult) -> Vec<ResultRow> {
        vec![
            ResultRow::fixed2("Autotransformer energy losses", out.autotransformer_kwh, "kWh"),
            ResultRow::fixed2(
                "Expected transmission losses",
                out.transmission_expected_kwh,
                "kWh",
            ),
            ResultRow::fixed2("Total energy losses", out.total_kwh, "kWh"),
        ]
    }
}
