use serde::{Deserialize, Serialize};

use crate::calc::{self, Calculator, ResultRow};
use crate::error::CalcError;
use crate::form::{FieldSpec, FormFields};

/// 중유(마주트) 가연 기준 조성과 사용 기준 수분/회분.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuelOilInput {
    /// 가연 기준 H, C, S, O [%]
    pub h: f64,
    pub c: f64,
    pub s: f64,
    pub o: f64,
    /// 가연 기준 저위 발열량 [MJ/kg]
    pub q: f64,
    /// 사용 기준 수분 [%]
    pub w: f64,
    /// 건조 기준 회분 [%]
    pub a: f64,
    /// 건조 기준 바나듐 함량 [mg/kg]
    pub v: f64,
}

/// 사용 기준으로 환산한 중유 조성.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelOilResult {
    pub c: f64,
    pub h: f64,
    pub o: f64,
    pub s: f64,
    pub a: f64,
    pub lower_heating_value_mj_per_kg: f64,
    pub vanadium_mg_per_kg: f64,
}

pub fn compute_fuel_oil(input: &FuelOilInput) -> FuelOilResult {
    let combustible = (100.0 - input.w - input.a) / 100.0;
    let dry = (100.0 - input.w) / 100.0;
    FuelOilResult {
        c: input.c * combustible,
        h: input.h * combustible,
        o: input.o * combustible,
        s: input.s * combustible,
        a: input.a * dry,
        lower_heating_value_mj_per_kg: input.q * combustible,
        vanadium_mg_per_kg: input.v * dry,
    }
}

pub struct FuelOilCalculator;

static FIELDS: [FieldSpec; 8] = [
    FieldSpec::number("h", "H (%)"),
    FieldSpec::number("c", "C (%)"),
    FieldSpec::number("s", "S (%)"),
    FieldSpec::number("q", "Q (MJ/kg)"),
    FieldSpec::number("o", "O (%)"),
    FieldSpec::number("w", "W (%)"),
    FieldSpec::number("a", "A (%)"),
    FieldSpec::number("v", "V (mg/kg)"),
];

impl Calculator for FuelOilCalculator {
    const SLUG: &'static str = "fuel-oil";
    const TITLE: &'static str = "Fuel Oil Working Mass Calculator";

    type Input = FuelOilInput;
    type Valid = FuelOilInput;
    type Output = FuelOilResult;

    fn validate(input: FuelOilInput) -> Result<FuelOilInput, CalcError> {
        let values = [
            input.h, input.c, input.s, input.q, input.o, input.w, input.a, input.v,
        ];
        if values.iter().any(|v| *v < 0.0) {
            return Err(CalcError::invalid("composition values must not be negative"));
        }
        Ok(input)
    }

    fn compute(valid: &FuelOilInput) -> FuelOilResult {
        compute_fuel_oil(valid)
    }

    fn is_finite(out: &FuelOilResult) -> bool {
        calc::all_finite(&[
            out.c,
            out.h,
            out.o,
            out.s,
            out.a,
            out.lower_heating_value_mj_per_kg,
            out.vanadium_mg_per_kg,
        ])
    }

    fn from_form(form: &FormFields) -> FuelOilInput {
        FuelOilInput {
            h: form.number("h"),
            c: form.number("c"),
            s: form.number("s"),
            o: form.number("o"),
            q: form.number("q"),
            w: form.number("w"),
            a: form.number("a"),
            v: form.number("v"),
        }
    }

    fn form_fields() -> &'static [FieldSpec] {
        &FIELDS
    }

    fn result_rows(out: &FuelOilResult) -> Vec<ResultRow> {
        vec![
            ResultRow::fixed2("Carbon", out.c, "%"),
            ResultRow::fixed2("Hydrogen", out.h, "%"),
            ResultRow::fixed2("Oxygen", out.o, "%"),
            ResultRow::fixed2("Sulfur", out.s, "%"),
            ResultRow::fixed2("Ash", out.a, "%"),
            ResultRow::fixed2("Lower heating value", out.lower_heating_value_mj_per_kg, "MJ/kg"),
            ResultRow::fixed2("Vanadium content", out.vanadium_mg_per_kg, "mg/kg"),
        ]
    }
}
