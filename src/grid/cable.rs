use serde::{Deserialize, Serialize};

use crate::calc::{self, Calculator, ResultRow};
use crate::error::CalcError;
use crate::form::{FieldSpec, FormFields};

/// 경제 전류 밀도와 열적 안정도로 케이블 단면을 고르기 위한 입력.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CableInput {
    /// 설계 피상 전력 [MVA]
    pub sm: f64,
    /// 공칭 전압 [kV]
    pub unom: f64,
    /// 단락 전류 [kA]
    pub ik: f64,
    /// 단락 지속 시간 [s]
    pub tf: f64,
    /// 경제 전류 밀도 [A/mm²]
    pub jek: f64,
    /// 열적 안정 계수 C_t [A·√s/mm²]
    pub ct: f64,
}

/// 케이블 선정 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CableResult {
    /// 정상 운전 전류 [A]
    pub operating_current_a: f64,
    /// 비상(2배) 운전 전류 [A]
    pub emergency_current_a: f64,
    /// 경제 단면 [mm²]
    pub economic_section_mm2: f64,
    /// 열적 안정 최소 단면 [mm²]
    pub min_thermal_section_mm2: f64,
    /// 경제 단면이 최소 단면 이상이면 true
    pub section_ok: bool,
}

pub fn compute_cable(input: &CableInput) -> CableResult {
    let current = input.sm / (3f64.sqrt() * input.unom) * 1000.0;
    let economic = current / input.jek;
    let min_thermal = input.ik * 1000.0 * input.tf.sqrt() / input.ct;
    CableResult {
        operating_current_a: current,
        emergency_current_a: 2.0 * current,
        economic_section_mm2: economic,
        min_thermal_section_mm2: min_thermal,
        section_ok: economic >= min_thermal,
    }
}

pub struct CableCalculator;

static FIELDS: [FieldSpec; 6] = [
    FieldSpec::number("sm", "Sm (MVA)"),
    FieldSpec::number("unom", "Unom (kV)"),
    FieldSpec::number("ik", "Ik (kA)"),
    FieldSpec::number("tf", "t_f (s)"),
    FieldSpec::number("jek", "j_ek (A/mm²)"),
    FieldSpec::number("ct", "C_t (A·√s/mm²)"),
];

impl Calculator for CableCalculator {
    const SLUG: &'static str = "cable";
    const TITLE: &'static str = "Cable Section Selection";

    type Input = CableInput;
    type Valid = CableInput;
    type Output = CableResult;

    fn validate(input: CableInput) -> Result<CableInput, CalcError> {
        if input.unom <= 0.0 || input.jek <= 0.0 || input.ct <= 0.0 {
            return Err(CalcError::invalid(
                "voltage, economic current density and C_t must be positive",
            ));
        }
        if input.tf < 0.0 {
            return Err(CalcError::invalid("fault duration must not be negative"));
        }
        Ok(input)
    }

    fn compute(valid: &CableInput) -> CableResult {
        compute_cable(valid)
    }

    fn is_finite(out: &CableResult) -> bool {
        calc::all_finite(&[
            out.operating_current_a,
            out.emergency_current_a,
            out.economic_section_mm2,
            out.min_thermal_section_mm2,
        ])
    }

    fn from_form(form: &FormFields) -> CableInput {
        CableInput {
            sm: form.number("sm"),
            unom: form.number("unom"),
            ik: form.number("ik"),
            tf: form.number("tf"),
            jek: form.number("jek"),
            ct: form.number("ct"),
        }
    }

    fn form_fields() -> &'static [FieldSpec] {
        &FIELDS
    }

    fn result_rows(out: &CableResult) -> Vec<ResultRow> {
        let verdict = if out.section_ok {
            "Selected cable section meets requirements."
        } else {
            "Cable section needs to be increased!"
        };
        vec![
            ResultRow::fixed2("Operational current", out.operating_current_a, "A"),
            ResultRow::fixed2("Emergency current", out.emergency_current_a, "A"),
            ResultRow::fixed2("Economic cable section", out.economic_section_mm2, "mm²"),
            ResultRow::fixed2(
                "Min cable section (thermal stability)",
                out.min_thermal_section_mm2,
                "mm²",
            ),
            ResultRow::new("Verdict", verdict),
        ]
    }
}
