//! 해석 → 검증 → 계산 → 출력으로 이어지는 공통 계산 파이프라인.
//!
//! 각 계산기는 입력 스키마와 공식만 정의하고, JSON API·HTML 폼·CLI는
//! 모두 이 모듈의 함수를 통해 같은 경로로 계산을 수행한다.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::CalcError;
use crate::form::{FieldSpec, FormFields};

/// 결과 표의 한 줄.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub label: String,
    pub value: String,
}

impl ResultRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// 소수점 둘째 자리까지 표시하고 단위를 붙인다.
    pub fn fixed2(label: impl Into<String>, value: f64, unit: &str) -> Self {
        Self::new(label, with_unit(format!("{value:.2}"), unit))
    }

    /// 아주 작은 값(고장률, 가동 중단 계수 등)을 지수 표기로 표시한다.
    pub fn scientific(label: impl Into<String>, value: f64, unit: &str) -> Self {
        Self::new(label, with_unit(format!("{value:.4e}"), unit))
    }
}

fn with_unit(value: String, unit: &str) -> String {
    if unit.is_empty() {
        value
    } else {
        format!("{value} {unit}")
    }
}

/// 단일 페이지 계산기 하나를 정의한다.
pub trait Calculator {
    /// URL 경로와 CLI에서 쓰는 식별자
    const SLUG: &'static str;
    const TITLE: &'static str;

    /// 요청 스키마. 빠진 필드는 0으로 채워진다.
    type Input: DeserializeOwned + Default;
    /// 검증을 통과한 입력. `validate`로만 만들어진다.
    type Valid;
    type Output: Serialize;

    fn validate(input: Self::Input) -> Result<Self::Valid, CalcError>;

    /// 부수효과 없는 순수 계산.
    fn compute(valid: &Self::Valid) -> Self::Output;

    /// url-encoded 폼에서 입력을 만든다. 숫자 해석 실패는 0으로 취급한다.
    fn from_form(form: &FormFields) -> Self::Input;

    fn form_fields() -> &'static [FieldSpec];

    /// 빈 폼에 미리 채워 둘 값.
    fn form_defaults() -> &'static [(&'static str, &'static str)] {
        &[]
    }

    fn result_rows(output: &Self::Output) -> Vec<ResultRow>;

    /// 결과의 모든 실수 값이 유한한지. JSON은 NaN/inf를 표현하지 못한다.
    fn is_finite(_output: &Self::Output) -> bool {
        true
    }
}

pub fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

/// 입력을 검증하고 계산한다. 검증에 실패하면 계산은 수행되지 않는다.
pub fn run<C: Calculator>(input: C::Input) -> Result<C::Output, CalcError> {
    let valid = C::validate(input).inspect_err(|err| {
        warn!(lab = C::SLUG, error = %err, "input rejected");
    })?;
    let output = C::compute(&valid);
    debug!(lab = C::SLUG, "calculation finished");
    Ok(output)
}

/// JSON 본문을 받아 JSON 결과를 돌려준다.
pub fn run_json<C: Calculator>(body: &[u8]) -> Result<Vec<u8>, CalcError> {
    let input: C::Input = serde_json::from_slice(body).map_err(|e| {
        warn!(lab = C::SLUG, error = %e, "malformed JSON body");
        CalcError::MalformedInput(e.to_string())
    })?;
    let output = run::<C>(input)?;
    if !C::is_finite(&output) {
        warn!(lab = C::SLUG, "result contains non-finite values");
        return Err(CalcError::Encode("result is not a finite number".to_string()));
    }
    serde_json::to_vec(&output).map_err(|e| CalcError::Encode(e.to_string()))
}
