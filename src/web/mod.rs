//! HTTP 어댑터. 요청을 계산 파이프라인으로 넘기고 결과를 응답으로 바꾼다.

mod handlers;
pub mod page;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::ServerConfig;

pub fn router() -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/calculate",
            get(handlers::load_page)
                .post(handlers::load_calculate)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/labs/{slug}",
            get(handlers::lab_form)
                .post(handlers::lab_submit)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/{slug}",
            post(handlers::api_calculate).fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
}

/// 설정된 주소에 바인딩하고 종료 신호를 받을 때까지 요청을 처리한다.
pub async fn serve(cfg: &ServerConfig) -> std::io::Result<()> {
    let listener = TcpListener::bind(cfg.bind_addr()).await?;
    info!(addr = %listener.local_addr()?, "server started");
    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(err) => {
            warn!(error = %err, "cannot listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
