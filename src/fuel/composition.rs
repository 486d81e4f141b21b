use serde::{Deserialize, Serialize};

use crate::calc::{self, Calculator, ResultRow};
use crate::error::CalcError;
use crate::form::{FieldSpec, FormFields};

/// 고체 연료 사용 기준(working mass) 원소 조성 [%].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuelComposition {
    pub h: f64,
    pub c: f64,
    pub s: f64,
    pub n: f64,
    pub o: f64,
    /// 수분 W
    pub w: f64,
    /// 회분 A
    pub a: f64,
}

/// 특정 질량 기준으로 환산한 원소 조성 [%].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MassBasis {
    pub h: f64,
    pub c: f64,
    pub s: f64,
    pub n: f64,
    pub o: f64,
    /// 가연 기준에는 회분이 없으므로 None
    pub a: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositionResult {
    /// 사용 → 건조 기준 환산 계수
    pub dry_factor: f64,
    /// 사용 → 가연 기준 환산 계수
    pub combustible_factor: f64,
    pub dry: MassBasis,
    pub combustible: MassBasis,
    /// 사용 기준 저위 발열량 (멘델레예프 식) [kJ/kg]
    pub lower_heating_value_kj_per_kg: f64,
}

/// 사용 기준 조성을 건조/가연 기준으로 환산하고 저위 발열량을 구한다.
pub fn compute_composition(fc: &FuelComposition) -> CompositionResult {
    let krs = 100.0 / (100.0 - fc.w);
    let krg = 100.0 / (100.0 - fc.w - fc.a);
    let lhv = 339.0 * fc.c + 1030.0 * fc.h - 108.8 * (fc.o - fc.s) - 25.0 * fc.w;
    CompositionResult {
        dry_factor: krs,
        combustible_factor: krg,
        dry: MassBasis {
            h: fc.h * krs,
            c: fc.c * krs,
            s: fc.s * krs,
            n: fc.n * krs,
            o: fc.o * krs,
            a: Some(fc.a * krs),
        },
        combustible: MassBasis {
            h: fc.h * krg,
            c: fc.c * krg,
            s: fc.s * krg,
            n: fc.n * krg,
            o: fc.o * krg,
            a: None,
        },
        lower_heating_value_kj_per_kg: lhv,
    }
}

pub struct CompositionCalculator;

static FIELDS: [FieldSpec; 7] = [
    FieldSpec::number("h", "H (%)"),
    FieldSpec::number("c", "C (%)"),
    FieldSpec::number("s", "S (%)"),
    FieldSpec::number("n", "N (%)"),
    FieldSpec::number("o", "O (%)"),
    FieldSpec::number("w", "W (%)"),
    FieldSpec::number("a", "A (%)"),
];

impl Calculator for CompositionCalculator {
    const SLUG: &'static str = "fuel-composition";
    const TITLE: &'static str = "Fuel Composition Calculator";

    type Input = FuelComposition;
    type Valid = FuelComposition;
    type Output = CompositionResult;

    fn validate(input: FuelComposition) -> Result<FuelComposition, CalcError> {
        if input.w >= 100.0 || input.w + input.a >= 100.0 {
            return Err(CalcError::invalid(
                "moisture and ash together must stay below 100 %",
            ));
        }
        Ok(input)
    }

    fn compute(valid: &FuelComposition) -> CompositionResult {
        compute_composition(valid)
    }

    fn is_finite(out: &CompositionResult) -> bool {
        let basis = |m: &MassBasis| {
            calc::all_finite(&[m.h, m.c, m.s, m.n, m.o, m.a.unwrap_or_default()])
        };
        let factors = [
            out.dry_factor,
            out.combustible_factor,
            out.lower_heating_value_kj_per_kg,
        ];
        calc::all_finite(&factors) && basis(&out.dry) && basis(&out.combustible)
    }

    fn from_form(form: &FormFields) -> FuelComposition {
        FuelComposition {
            h: form.number("h"),
            c: form.number("c"),
            s: form.number("s"),
            n: form.number("n"),
            o: form.number("o"),
            w: form.number("w"),
            a: form.number("a"),
        }
    }

    fn form_fields() -> &'static [FieldSpec] {
        &FIELDS
    }

    fn result_rows(out: &CompositionResult) -> Vec<ResultRow> {
        let dry = &out.dry;
        let comb = &out.combustible;
        vec![
            ResultRow::fixed2("KRS (working → dry)", out.dry_factor, ""),
            ResultRow::fixed2("KRG (working → combustible)", out.combustible_factor, ""),
            ResultRow::new(
                "Dry mass",
                format!(
                    "H {:.2}, C {:.2}, S {:.2}, N {:.2}, O {:.2}, A {:.2}",
                    dry.h,
                    dry.c,
                    dry.s,
                    dry.n,
                    dry.o,
                    dry.a.unwrap_or_default()
                ),
            ),
            ResultRow::new(
                "Combustible mass",
                format!(
                    "H {:.2}, C {:.2}, S {:.2}, N {:.2}, O {:.2}",
                    comb.h, comb.c, comb.s, comb.n, comb.o
                ),
            ),
            ResultRow::fixed2(
                "Lower heating value",
                out.lower_heating_value_kj_per_kg,
                "kJ/kg",
            ),
        ]
    }
}
