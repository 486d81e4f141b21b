use serde::{Deserialize, Serialize};

use crate::calc::{self, Calculator, ResultRow};
use crate::error::CalcError;
use crate::form::{FieldSpec, FormFields};

/// 전력 판매 단가 [천 UAH/MWh]
pub const ENERGY_PRICE: f64 = 7.0;
/// 현재 예측 시스템의 표준편차 [MW]
pub const SIGMA_CURRENT: f64 = 1.0;
/// 개선된 예측 시스템의 표준편차 [MW]
pub const SIGMA_IMPROVED: f64 = 0.25;
/// 벌금 없이 인정되는 예측 허용 대역 ±[MW]
pub const BAND_HALF_WIDTH: f64 = 0.25;

/// 태양광 발전소 수익 계산 입력.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolarInput {
    /// 일평균 출력 Pc [MW]
    pub pc: f64,
    /// 예측 오차 [%]. 결과에 그대로 표시된다.
    pub delta: f64,
}

/// 한 가지 예측 정확도에서의 수익/벌금.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastScenario {
    pub sigma_mw: f64,
    /// 허용 대역 안에 드는 에너지 비율 [%]
    pub energy_share_pct: f64,
    /// [천 UAH]
    pub profit: f64,
    /// [천 UAH]
    pub penalty: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarResult {
    pub daily_power_mw: f64,
    pub forecast_error_pct: f64,
    pub current: ForecastScenario,
    pub improved: ForecastScenario,
    /// 개선 후 순이익 [천 UAH]
    pub net_profit: f64,
}

/// 오차 함수의 Abramowitz–Stegun 7.1.26 근사 (최대 오차 1.5e-7).
pub fn erf(x: f64) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();
    let t = 1.0 / (1.0 + 0.327_591_1 * x);
    let poly = ((((1.061_405_429 * t - 1.453_152_027) * t + 1.421_413_741) * t - 0.284_496_736)
        * t
        + 0.254_829_592)
        * t;
    sign * (1.0 - poly * (-x * x).exp())
}

pub fn normal_cdf(x: f64, mean: f64, std_dev: f64) -> f64 {
    0.5 * (1.0 + erf((x - mean) / (std_dev * std::f64::consts::SQRT_2)))
}

fn scenario(pc: f64, sigma: f64) -> ForecastScenario {
    let lower = pc - BAND_HALF_WIDTH;
    let upper = pc + BAND_HALF_WIDTH;
    let share_pct = (normal_cdf(upper, pc, sigma) - normal_cdf(lower, pc, sigma)) * 100.0;
    let revenue = pc * 24.0 * ENERGY_PRICE;
    ForecastScenario {
        sigma_mw: sigma,
        energy_share_pct: share_pct,
        profit: revenue * (share_pct / 100.0),
        penalty: revenue * ((100.0 - share_pct) / 100.0),
    }
}

pub fn compute_solar(input: &SolarInput) -> SolarResult {
    let current = scenario(input.pc, SIGMA_CURRENT);
    let improved = scenario(input.pc, SIGMA_IMPROVED);
    SolarResult {
        daily_power_mw: input.pc,
        forecast_error_pct: input.delta,
        current,
        improved,
        net_profit: improved.profit - improved.penalty,
    }
}

pub struct SolarProfitCalculator;

static FIELDS: [FieldSpec; 2] = [
    FieldSpec::number("pc", "Average daily power Pc (MW)"),
    FieldSpec::number("delta", "Forecast error (%)"),
];

impl Calculator for SolarProfitCalculator {
    const SLUG: &'static str = "solar-profit";
    const TITLE: &'static str = "Solar Plant Profit";

    type Input = SolarInput;
    type Valid = SolarInput;
    type Output = SolarResult;

    fn validate(input: SolarInput) -> Result<SolarInput, CalcError> {
        if input.pc <= 0.0 {
            return Err(CalcError::invalid("average daily power must be positive"));
        }
        Ok(input)
    }

    fn compute(valid: &SolarInput) -> SolarResult {
        compute_solar(valid)
    }

    fn is_finite(out: &SolarResult) -> bool {
        calc::all_finite(&[
            out.current.profit,
            out.current.penalty,
            out.improved.profit,
            out.improved.penalty,
            out.net_profit,
        ])
    }

    fn from_form(form: &FormFields) -> SolarInput {
        SolarInput {
            pc: form.number("pc"),
            delta: form.number("delta"),
        }
    }

    fn form_fields() -> &'static [FieldSpec] {
        &FIELDS
    }

    fn result_rows(out: &SolarResult) -> Vec<ResultRow> {
        let cur = &out.current;
        let imp = &out.improved;
        vec![
            ResultRow::fixed2("Average daily power", out.daily_power_mw, "MW"),
            ResultRow::fixed2("Forecast error", out.forecast_error_pct, "%"),
            ResultRow::fixed2("Energy share in band", cur.energy_share_pct, "%"),
            ResultRow::fixed2("Profit", cur.profit, "thousand UAH"),
            ResultRow::fixed2("Penalty", cur.penalty, "thousand UAH"),
            ResultRow::fixed2("Energy share in band (improved σ)", imp.energy_share_pct, "%"),
            ResultRow::fixed2("Profit (improved σ)", imp.profit, "thousand UAH"),
            ResultRow::fixed2("Penalty (improved σ)", imp.penalty, "thousand UAH"),
            ResultRow::fixed2("Achievable net profit", out.net_profit, "thousand UAH"),
        ]
    }
}
