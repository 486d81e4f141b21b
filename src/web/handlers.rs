use axum::body::Bytes;
use axum::extract::Path;
use axum::http::{header, HeaderMap, Method, StatusCode};
use axum::response::{Html, IntoResponse, Response};

use super::page;
use crate::calc;
use crate::error::CalcError;
use crate::form::FormFields;
use crate::grid::LoadCalculator;
use crate::labs;

/// htmx가 부분 갱신 요청에 붙이는 헤더
const HX_REQUEST: &str = "hx-request";

pub(super) async fn index() -> Html<String> {
    Html(page::index(labs::all()))
}

pub(super) async fn load_page() -> Html<&'static str> {
    Html(page::LOAD_PAGE)
}

pub(super) async fn load_calculate(body: Bytes) -> Response {
    json_response(calc::run_json::<LoadCalculator>(&body))
}

pub(super) async fn api_calculate(Path(slug): Path<String>, body: Bytes) -> Response {
    match labs::find(&slug) {
        Some(lab) => json_response((lab.run_json)(&body)),
        None => unknown_lab(&slug),
    }
}

pub(super) async fn lab_form(Path(slug): Path<String>) -> Response {
    match labs::find(&slug) {
        Some(lab) => Html((lab.blank_page)()).into_response(),
        None => unknown_lab(&slug),
    }
}

/// 폼 제출. 검증 오류는 페이지 안에 표시하므로 상태 코드는 200이다.
pub(super) async fn lab_submit(
    Path(slug): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let Some(lab) = labs::find(&slug) else {
        return unknown_lab(&slug);
    };
    let form = match FormFields::parse(&body) {
        Ok(form) => form,
        Err(err) => return err.into_response(),
    };
    let partial = headers.contains_key(HX_REQUEST);
    Html((lab.submit)(&form, partial)).into_response()
}

pub(super) async fn method_not_allowed(method: Method) -> (StatusCode, String) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        format!("method {method} is not supported on this endpoint"),
    )
}

pub(super) async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "not found")
}

fn unknown_lab(slug: &str) -> Response {
    (StatusCode::NOT_FOUND, format!("unknown calculator: {slug}")).into_response()
}

fn json_response(result: Result<Vec<u8>, CalcError>) -> Response {
    match result {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(err) => err.into_response(),
    }
}
