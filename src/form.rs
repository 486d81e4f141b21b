//! `application/x-www-form-urlencoded` 입력과 폼 스키마 정의.

use crate::error::CalcError;

/// 선택형 입력의 항목 하나.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
    /// `<optgroup>` 이름. 비어 있으면 그룹 없이 표시한다.
    pub group: &'static str,
}

/// 폼 입력 종류.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    Number,
    /// 정적 조회 테이블에서 항목을 뽑아오는 선택 목록
    Select(fn() -> Vec<SelectOption>),
}

/// 폼 필드 하나의 스키마.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn number(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Number,
        }
    }

    pub const fn select(
        name: &'static str,
        label: &'static str,
        options: fn() -> Vec<SelectOption>,
    ) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Select(options),
        }
    }
}

/// 제출된 폼 값. 같은 이름이 여러 번 오면 첫 값을 쓴다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pairs: Vec<(String, String)>,
}

impl FormFields {
    /// url-encoded 본문을 해석한다. 인코딩 자체가 깨진 경우에만 실패한다.
    pub fn parse(body: &[u8]) -> Result<Self, CalcError> {
        serde_urlencoded::from_bytes::<Vec<(String, String)>>(body)
            .map(|pairs| Self { pairs })
            .map_err(|e| CalcError::MalformedInput(e.to_string()))
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// 필드의 원문(앞뒤 공백 제거). 없으면 빈 문자열.
    pub fn text(&self, name: &str) -> &str {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.trim())
            .unwrap_or_default()
    }

    pub fn has(&self, name: &str) -> bool {
        !self.text(name).is_empty()
    }

    /// 실수 필드를 읽는다.
    ///
    /// 비어 있거나 숫자로 해석되지 않는 값, 그리고 `NaN`/`inf` 같은 비유한 값은
    /// 모두 0으로 취급한다. 폼 기반 계산기 전체가 따르는 규칙이다.
    pub fn number(&self, name: &str) -> f64 {
        self.text(name)
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }

    /// 정수 필드를 읽는다. 해석 실패 시 0.
    pub fn integer(&self, name: &str) -> i64 {
        self.text(name).parse::<i64>().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparsable_numbers_default_to_zero() {
        let form = FormFields::from_pairs([("a", "abc"), ("b", ""), ("c", "NaN"), ("d", " 2.5 ")]);
        assert_eq!(form.number("a"), 0.0);
        assert_eq!(form.number("b"), 0.0);
        assert_eq!(form.number("c"), 0.0);
        assert_eq!(form.number("d"), 2.5);
        assert_eq!(form.number("missing"), 0.0);
        assert_eq!(form.integer("d"), 0);
    }

    #[test]
    fn parse_decodes_urlencoded_body() {
        let form = FormFields::parse(b"fuel=gas-urengoy-uzhhorod&amount=1e3&name=a+b%21").unwrap();
        assert_eq!(form.text("fuel"), "gas-urengoy-uzhhorod");
        assert_eq!(form.number("amount"), 1000.0);
        assert_eq!(form.text("name"), "a b!");
        assert!(!form.has("clear"));
    }
}
