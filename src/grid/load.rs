use serde::{Deserialize, Serialize};

use crate::calc::{self, Calculator, ResultRow};
use crate::error::CalcError;
use crate::form::{FieldSpec, FormFields};

/// 설계 전력 계수 Kr. 입력과 무관한 고정값이다.
pub const CALCULATED_POWER_COEFF: f64 = 1.25;

/// 전기 부하 계산 요청.
///
/// 빠진 필드는 0으로 채워지며, 필수 값이 0이면 검증 단계에서 거부된다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadInput {
    /// 수용가(장비군) 이름. 계산에는 쓰이지 않는다.
    pub name: String,
    /// 효율 η
    pub eta: f64,
    /// 역률 cosφ
    pub cos_phi: f64,
    /// 선간 전압 [V]
    pub voltage: f64,
    /// 장비 대수
    pub count: i64,
    /// 장비 1대 정격 출력 [kW]
    pub power: f64,
    /// 이용 계수. 계산에는 쓰이지 않는다.
    pub util_coeff: f64,
    /// 무효/유효 전력비 tgφ
    pub tg_phi: f64,
    /// 그룹 이용 계수 Kv
    pub kv: f64,
}

/// 검증을 통과한 부하 입력. [`validate_load`]로만 만들 수 있다.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidLoadInput(LoadInput);

impl ValidLoadInput {
    pub fn get(&self) -> &LoadInput {
        &self.0
    }
}

/// 부하 계산 결과. JSON 키는 고정 약어를 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadResult {
    /// 운전 전류 [A]
    #[serde(rename = "Ip")]
    pub operating_current_a: f64,
    /// 그룹 이용 계수 (입력 그대로)
    #[serde(rename = "Kv")]
    pub group_usage_coeff: f64,
    /// 유효 수용가 수
    #[serde(rename = "Ne")]
    pub effective_count: f64,
    /// 설계 전력 계수
    #[serde(rename = "Kr")]
    pub power_coeff: f64,
    /// 설계 유효 부하 [kW]
    #[serde(rename = "Pp")]
    pub active_load_kw: f64,
    /// 설계 무효 부하 [kVAr]
    #[serde(rename = "Qp")]
    pub reactive_load_kvar: f64,
    /// 피상 부하 [kVA]
    #[serde(rename = "Sp")]
    pub apparent_load_kva: f64,
    /// 그룹 전류 [A]
    #[serde(rename = "Ig")]
    pub group_current_a: f64,
}

/// 전압, 역률, 효율, 출력, 대수가 모두 양수인지 확인한다.
///
/// 어느 조건이 실패했는지 구분하지 않고 하나의 오류로 보고한다.
pub fn validate_load(input: LoadInput) -> Result<ValidLoadInput, CalcError> {
    if input.voltage <= 0.0
        || input.cos_phi <= 0.0
        || input.eta <= 0.0
        || input.power <= 0.0
        || input.count <= 0
    {
        return Err(CalcError::invalid(
            "invalid input values, all numeric values must be positive",
        ));
    }
    Ok(ValidLoadInput(input))
}

/// 검증된 입력으로 부하 값을 계산한다.
///
/// 유효 수용가 수 Ne = (n·P)² / (n·P²) 는 장비가 한 종류뿐인 이 입력에서는
/// 항상 n과 같다. 이종 장비 공식을 단일 장비형에 적용한 형태 그대로 둔다.
pub fn compute_load(valid: &ValidLoadInput) -> LoadResult {
    let input = valid.get();
    let sqrt3 = 3f64.sqrt();
    let count = input.count as f64;
    let total_power = count * input.power;

    let operating_current =
        1000.0 * total_power / (sqrt3 * input.voltage * input.cos_phi * input.eta);
    let effective_count = total_power.powi(2) / (count * input.power.powi(2));
    let active = CALCULATED_POWER_COEFF * input.kv * total_power;
    let reactive = active * input.tg_phi;
    let apparent = (active * active + reactive * reactive).sqrt();
    let group_current = 1000.0 * active / (sqrt3 * input.voltage);

    LoadResult {
        operating_current_a: operating_current,
        group_usage_coeff: input.kv,
        effective_count,
        power_coeff: CALCULATED_POWER_COEFF,
        active_load_kw: active,
        reactive_load_kvar: reactive,
        apparent_load_kva: apparent,
        group_current_a: group_current,
    }
}

/// 전기 부하 계산기.
pub struct LoadCalculator;

static FIELDS: [FieldSpec; 8] = [
    FieldSpec::number("count", "Count"),
    FieldSpec::number("power", "Power (kW)"),
    FieldSpec::number("voltage", "Voltage (V)"),
    FieldSpec::number("cos_phi", "CosPhi"),
    FieldSpec::number("eta", "Eta"),
    FieldSpec::number("util_coeff", "Utilization coeff."),
    FieldSpec::number("tg_phi", "TgPhi"),
    FieldSpec::number("kv", "Kv"),
];

impl Calculator for LoadCalculator {
    const SLUG: &'static str = "load";
    const TITLE: &'static str = "Electrical Load Calculator";

    type Input = LoadInput;
    type Valid = ValidLoadInput;
    type Output = LoadResult;

    fn validate(input: LoadInput) -> Result<ValidLoadInput, CalcError> {
        validate_load(input)
    }

    fn compute(valid: &ValidLoadInput) -> LoadResult {
        compute_load(valid)
    }

    fn is_finite(out: &LoadResult) -> bool {
        calc::all_finite(&[
            out.operating_current_a,
            out.group_usage_coeff,
            out.effective_count,
            out.power_coeff,
            out.active_load_kw,
            out.reactive_load_kvar,
            out.apparent_load_kva,
            out.group_current_a,
        ])
    }

    fn from_form(form: &FormFields) -> LoadInput {
        LoadInput {
            name: form.text("name").to_string(),
            eta: form.number("eta"),
            cos_phi: form.number("cos_phi"),
            voltage: form.number("voltage"),
            count: form.integer("count"),
            power: form.number("power"),
            util_coeff: form.number("util_coeff"),
            tg_phi: form.number("tg_phi"),
            kv: form.number("kv"),
        }
    }

    fn form_fields() -> &'static [FieldSpec] {
        &FIELDS
    }

    fn result_rows(out: &LoadResult) -> Vec<ResultRow> {
        vec![
            ResultRow::fixed2("Ip (calculation current)", out.operating_current_a, "A"),
            ResultRow::fixed2("Kv (group usage coefficient)", out.group_usage_coeff, ""),
            ResultRow::fixed2("Ne (effective number of consumers)", out.effective_count, ""),
            ResultRow::fixed2("Kr (calculated power coefficient)", out.power_coeff, ""),
            ResultRow::fixed2("Pp (calculated active load)", out.active_load_kw, "kW"),
            ResultRow::fixed2("Qp (calculated reactive load)", out.reactive_load_kvar, "kVAr"),
            ResultRow::fixed2("Sp (total power)", out.apparent_load_kva, "kVA"),
            ResultRow::fixed2("Ig (calculated group current)", out.group_current_a, "A"),
        ]
    }
}
