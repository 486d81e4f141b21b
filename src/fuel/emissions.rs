use serde::{Deserialize, Serialize};

use crate::calc::{self, Calculator, ResultRow};
use crate::error::CalcError;
use crate::form::{FieldSpec, FormFields};
use crate::fuel::fuel_db::{self, FuelData, FuelKind};

/// 회(灰) 중 비산재 비율
const FLY_ASH_SHARE: f64 = 0.8;
/// 전기집진기 포집 효율
const COLLECTOR_EFFICIENCY: f64 = 0.985;
/// 비산재 중 가연분 함량 [%]
const FLY_ASH_COMBUSTIBLES_PCT: f64 = 1.5;

/// 입자상 물질 배출량 계산 입력.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmissionInput {
    /// 연료 코드 또는 이름
    pub fuel: String,
    /// 연료 소비량 [t], 가스는 [천 Nm³]
    pub amount: f64,
}

#[derive(Debug)]
pub struct ValidEmissionInput {
    pub fuel: &'static FuelData,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionResult {
    pub fuel: String,
    /// 배출 계수 k [g/GJ]
    pub emission_factor_g_per_gj: f64,
    /// 총 배출량 [t]
    pub total_emission_t: f64,
    /// 가스 연료의 밀도 [kg/Nm³]
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub density_kg_per_nm3: Option<f64>,
}

/// 연료 종류별 배출 계수 k [g/GJ]와 계산에 쓰인 발열량 [MJ/kg]을 구한다.
fn emission_factor(fuel: &FuelData) -> (f64, f64) {
    match fuel.kind {
        FuelKind::Coal => {
            let qr = fuel.heating_value_mj * (1.0 - (fuel.moisture_pct + fuel.ash_pct) / 100.0);
            let ash_part = (1_000_000.0 / qr) * FLY_ASH_SHARE;
            let capture = (fuel.ash_pct / (100.0 - FLY_ASH_COMBUSTIBLES_PCT))
                * (1.0 - COLLECTOR_EFFICIENCY);
            (ash_part * capture, qr)
        }
        FuelKind::FuelOil => {
            let ash_part = 1_000_000.0 / fuel.heating_value_mj;
            let capture = (fuel.ash_pct / 100.0) * (1.0 - COLLECTOR_EFFICIENCY);
            (ash_part * capture, fuel.heating_value_mj)
        }
        FuelKind::Gas => (
            (1_000_000.0 / fuel.heating_value_mj) * FLY_ASH_SHARE,
            fuel.heating_value_mj,
        ),
    }
}

pub fn compute_emission(input: &ValidEmissionInput) -> EmissionResult {
    let (k, q) = emission_factor(input.fuel);
    EmissionResult {
        fuel: input.fuel.name.to_string(),
        emission_factor_g_per_gj: k,
        total_emission_t: 1e-6 * k * q * input.amount,
        density_kg_per_nm3: input.fuel.density_kg_per_nm3,
    }
}

pub struct EmissionCalculator;

static FIELDS: [FieldSpec; 2] = [
    FieldSpec::select("fuel", "Fuel type", fuel_db::select_options),
    FieldSpec::number("amount", "Amount (t / thousand m³)"),
];

impl Calculator for EmissionCalculator {
    const SLUG: &'static str = "emissions";
    const TITLE: &'static str = "Emissions Calculator";

    type Input = EmissionInput;
    type Valid = ValidEmissionInput;
    type Output = EmissionResult;

    fn validate(input: EmissionInput) -> Result<ValidEmissionInput, CalcError> {
        let fuel = fuel_db::find_fuel(&input.fuel)
            .ok_or_else(|| CalcError::invalid(format!("unknown fuel type: {}", input.fuel)))?;
        if input.amount < 0.0 {
            return Err(CalcError::invalid("fuel amount must not be negative"));
        }
        Ok(ValidEmissionInput {
            fuel,
            amount: input.amount,
        })
    }

    fn compute(valid: &ValidEmissionInput) -> EmissionResult {
        compute_emission(valid)
    }

    fn is_finite(out: &EmissionResult) -> bool {
        calc::all_finite(&[out.emission_factor_g_per_gj, out.total_emission_t])
    }

    fn from_form(form: &FormFields) -> EmissionInput {
        EmissionInput {
            fuel: form.text("fuel").to_string(),
            amount: form.number("amount"),
        }
    }

    fn form_fields() -> &'static [FieldSpec] {
        &FIELDS
    }

    fn result_rows(out: &EmissionResult) -> Vec<ResultRow> {
        let mut rows = vec![
            ResultRow::new(
                format!("Emissions from {}", out.fuel),
                format!("{:.4} t", out.total_emission_t),
            ),
            ResultRow::fixed2("Emission factor", out.emission_factor_g_per_gj, "g/GJ"),
        ];
        if let Some(density) = out.density_kg_per_nm3 {
            rows.push(ResultRow::new("Gas density", format!("{density:.3} kg/Nm³")));
        }
        rows
    }
}
