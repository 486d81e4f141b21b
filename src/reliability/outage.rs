use serde::{Deserialize, Serialize};

use crate::calc::{self, Calculator, ResultRow};
use crate::error::CalcError;
use crate::form::{FieldSpec, FormFields};
use crate::reliability::equipment_db::{self, Equipment};

/// 연간 시간 [h]
pub const HOURS_PER_YEAR: f64 = 8760.0;

/// 단일 설비 정전 신뢰도 계산 입력.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutageInput {
    /// 부하 Pv [MW]
    pub pv: f64,
    /// 이용 계수 Kp
    pub kp: f64,
    /// 운전 시간 [h]
    pub t: f64,
    /// 설비 코드 또는 이름
    pub equipment: String,
}

#[derive(Debug)]
pub struct ValidOutageInput {
    pub pv: f64,
    pub kp: f64,
    pub t: f64,
    pub equipment: &'static Equipment,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutageResult {
    /// 고장률 [1/년]
    pub failure_rate_per_year: f64,
    /// 평균 고장 지속 시간 [h]
    pub mean_outage_h: f64,
    /// 비상 정지 계수 Ka
    pub outage_coeff: f64,
    /// 기대 미공급 전력량 [MWh]
    pub undelivered_energy_mwh: f64,
}

pub fn compute_outage(input: &ValidOutageInput) -> OutageResult {
    let omega = input.equipment.failure_rate_per_year;
    let tv = input.equipment.repair_time_h;
    OutageResult {
        failure_rate_per_year: omega,
        mean_outage_h: tv,
        outage_coeff: omega * tv / HOURS_PER_YEAR,
        undelivered_energy_mwh: input.kp * input.pv * input.t,
    }
}

pub struct OutageCalculator;

static FIELDS: [FieldSpec; 4] = [
    FieldSpec::number("pv", "Load (MW)"),
    FieldSpec::number("kp", "Utilization coefficient"),
    FieldSpec::number("t", "Operating time (h)"),
    FieldSpec::select("equipment", "Equipment", equipment_db::select_options),
];

impl Calculator for OutageCalculator {
    const SLUG: &'static str = "reliability";
    const TITLE: &'static str = "Reliability Calculation";

    type Input = OutageInput;
    type Valid = ValidOutageInput;
    type Output = OutageResult;

    fn validate(input: OutageInput) -> Result<ValidOutageInput, CalcError> {
        let equipment = equipment_db::find_equipment(&input.equipment).ok_or_else(|| {
            CalcError::invalid(format!("unknown equipment: {}", input.equipment))
        })?;
        Ok(ValidOutageInput {
            pv: input.pv,
            kp: input.kp,
            t: input.t,
            equipment,
        })
    }

    fn compute(valid: &ValidOutageInput) -> OutageResult {
        compute_outage(valid)
    }

    fn is_finite(out: &OutageResult) -> bool {
        calc::all_finite(&[
            out.failure_rate_per_year,
            out.mean_outage_h,
            out.outage_coeff,
            out.undelivered_energy_mwh,
        ])
    }

    fn from_form(form: &FormFields) -> OutageInput {
        OutageInput {
            pv: form.number("pv"),
            kp: form.number("kp"),
            t: form.number("t"),
            equipment: form.text("equipment").to_string(),
        }
    }

    fn form_fields() -> &'static [FieldSpec] {
        &FIELDS
    }

    fn result_rows(out: &OutageResult) -> Vec<ResultRow> {
        vec![
            ResultRow::new("Failure rate", format!("{} 1/yr", out.failure_rate_per_year)),
            ResultRow::new("Mean outage duration", format!("{} h", out.mean_outage_h)),
            ResultRow::scientific("Outage coefficient", out.outage_coeff, ""),
            ResultRow::fixed2("Energy losses", out.undelivered_energy_mwh, "MWh"),
        ]
    }
}
