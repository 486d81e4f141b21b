//! 라우터 단위 HTTP 동작 테스트.
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use power_engineering_labs::web;
use serde_json::Value;
use tower::ServiceExt as _;

async fn send(request: Request<Body>) -> Response {
    web::router().oneshot(request).await.unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn post(uri: &str, content_type: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

const LOAD_BODY: &str = r#"{"name":"shop","count":10,"power":5,"voltage":380,"cos_phi":0.8,"eta":0.9,"util_coeff":0.75,"tg_phi":0.6,"kv":0.75}"#;

#[tokio::test]
async fn calculate_returns_json_result() {
    let response = send(post("/calculate", "application/json", LOAD_BODY)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert!((json["Pp"].as_f64().unwrap() - 46.875).abs() < 1e-9);
    assert!((json["Qp"].as_f64().unwrap() - 28.125).abs() < 1e-9);
    assert_eq!(json["Kr"], 1.25);
}

#[tokio::test]
async fn calculate_ignores_content_type() {
    let response = send(post("/calculate", "text/plain", LOAD_BODY)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let response = send(post("/calculate", "application/json", "{\"count\":")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.starts_with("malformed input"));
}

#[tokio::test]
async fn invalid_values_are_bad_request() {
    let response = send(post(
        "/calculate",
        "application/json",
        r#"{"count":10,"power":5,"voltage":0,"cos_phi":0.8,"eta":0.9}"#,
    ))
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_text(response).await,
        "invalid input values, all numeric values must be positive"
    );
}

#[tokio::test]
async fn non_finite_result_is_server_error() {
    let response = send(post(
        "/calculate",
        "application/json",
        r#"{"count":10,"power":1e200,"voltage":380,"cos_phi":0.8,"eta":0.9,"tg_phi":0.6,"kv":0.75}"#,
    ))
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_text(response).await.starts_with("failed to encode response"));
}

#[tokio::test]
async fn unsupported_method_is_rejected() {
    let request = Request::builder()
        .method("PUT")
        .uri("/calculate")
        .body(Body::empty())
        .unwrap();
    let response = send(request).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let response = send(get("/api/load")).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn load_page_is_served() {
    let response = send(get("/calculate")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Electrical Load Calculator"));
}

#[tokio::test]
async fn api_routes_every_lab() {
    let response = send(post(
        "/api/short-circuit",
        "application/json",
        r#"{"unom":10.5,"sk":200,"xc":0.55,"xt":1.84,"sb":100}"#,
    ))
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert!((json["total_reactance_ohm"].as_f64().unwrap() - 2.39).abs() < 1e-12);

    let response = send(post("/api/no-such-lab", "application/json", "{}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn index_lists_labs() {
    let html = body_text(send(get("/")).await).await;
    for slug in ["fuel-composition", "emissions", "reliability", "load"] {
        assert!(html.contains(&format!("/labs/{slug}")), "missing {slug}");
    }
}

#[tokio::test]
async fn form_submission_renders_results_and_keeps_inputs() {
    let response = send(post(
        "/labs/fuel-composition",
        "application/x-www-form-urlencoded",
        "h=1.9&c=21.1&s=2.6&n=0.2&o=7.1&w=53&a=14.1",
    ))
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("7295.30 kJ/kg"));
    assert!(html.contains(r#"name="w" value="53""#));
}

#[tokio::test]
async fn form_unparsable_numbers_count_as_zero() {
    let response = send(post(
        "/labs/energy-losses",
        "application/x-www-form-urlencoded",
        "pwt=abc&kp=0.7&t=100&wvt=0",
    ))
    .await;
    let html = body_text(response).await;
    assert!(html.contains("0.00 kWh"));
}

#[tokio::test]
async fn form_validation_error_is_shown_inline() {
    let response = send(post(
        "/labs/emissions",
        "application/x-www-form-urlencoded",
        "fuel=%3Cscript%3E&amount=10",
    ))
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("unknown fuel type: &lt;script&gt;"));
    assert!(!html.contains("<script>&"));
}

#[tokio::test]
async fn clear_button_resets_form() {
    let response = send(post(
        "/labs/energy-losses",
        "application/x-www-form-urlencoded",
        "pwt=1&kp=1&t=1&wvt=1&clear=true",
    ))
    .await;
    let html = body_text(response).await;
    assert!(html.contains(r#"name="pwt" value="23.6""#));
    assert!(!html.contains("<h2>Results</h2>"));
}

#[tokio::test]
async fn htmx_request_gets_fragment_only() {
    let request = Request::builder()
        .method("POST")
        .uri("/labs/reliability")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header("HX-Request", "true")
        .body(Body::from("pv=10&kp=0.8&t=100&equipment=t-110"))
        .unwrap();
    let html = body_text(send(request).await).await;
    assert!(html.starts_with("<h2>Results</h2>"));
    assert!(!html.contains("<form"));
    assert!(html.contains("800.00 MWh"));
}

#[tokio::test]
async fn select_keeps_chosen_option() {
    let response = send(post(
        "/labs/emissions",
        "application/x-www-form-urlencoded",
        "fuel=central-asia&amount=100",
    ))
    .await;
    let html = body_text(response).await;
    assert!(html.contains(r#"<option value="central-asia" selected>"#));
    assert!(html.contains("<optgroup label=\"Natural gas\">"));
}

#[tokio::test]
async fn unknown_lab_page_is_not_found() {
    let response = send(get("/labs/steam-tables")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
