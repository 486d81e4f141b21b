use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// 요청 한 건을 계산하면서 발생할 수 있는 오류.
///
/// 세 경우 모두 해당 요청에 대해 종결적이다. 재시도나 부분 계산은 없다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// 본문이 기대한 스키마로 해석되지 않음
    #[error("malformed input: {0}")]
    MalformedInput(String),
    /// 스키마는 맞지만 값이 허용 범위를 벗어남
    #[error("{0}")]
    InvalidInput(String),
    /// 결과 직렬화 실패
    #[error("failed to encode response: {0}")]
    Encode(String),
}

impl CalcError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        CalcError::InvalidInput(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            CalcError::MalformedInput(_) | CalcError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            CalcError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CalcError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
