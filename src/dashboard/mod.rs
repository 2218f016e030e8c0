//! Internship Dashboard
//!
//! HTTP layer for the dashboard, built with Axum. The page and all chart
//! data are computed once when `AppState` is built; handlers only read it.
//!
//! # Endpoints
//!
//! ## Page
//! - `GET /` - Dashboard page with both charts
//!
//! ## Data
//! - `GET /api/v1/popularity` - Applications per domain
//! - `GET /api/v1/trends` - Applications per year and domain
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use internship_insights::config::DashboardConfig;
//! use internship_insights::dashboard::{serve, AppState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DashboardConfig::default();
//!     let state = AppState::load(config.clone())?;
//!     serve(state, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod chart;
pub mod dto;
pub mod error;
pub mod page;
pub mod routes;
pub mod state;

pub use chart::{Bar, BarChart, Chart, LineChart, LineSeries};
pub use error::{DashboardError, DashboardResult};
pub use page::{build_page, ChartSection, DashboardPage};
pub use state::AppState;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::DashboardConfig;

/// Build the dashboard router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/popularity", get(routes::aggregates::popularity))
        .route("/trends", get(routes::aggregates::trends));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::page::dashboard))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .fallback(routes::page::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}

/// Start the dashboard server; returns after a shutdown signal
pub async fn serve(state: AppState, config: &DashboardConfig) -> DashboardResult<()> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| DashboardError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Dashboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::read_records;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let csv_data = "application_id,domain,application_date,status
10000,Data Science,2021-03-04,Applied
10001,Data Science,2022-07-19,Completed Internship
10002,Cybersecurity,2022-01-28,Applied";
        let records = read_records(csv_data.as_bytes()).unwrap();
        build_router(AppState::from_records(&records, DashboardConfig::default()))
    }

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_page() {
        let app = create_test_app();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("Overall Domain Popularity"));
        assert!(html.contains("Emerging and Declining Trends"));
    }

    #[tokio::test]
    async fn test_health_live() {
        let (status, _) = get_body(create_test_app(), "/health/live").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (status, body) = get_body(create_test_app(), "/health").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["records"], 3);
    }

    #[tokio::test]
    async fn test_popularity_json() {
        let (status, body) = get_body(create_test_app(), "/api/v1/popularity").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["label"], "Number of Applications");
        assert_eq!(json["total"], 3);
        assert_eq!(json["rows"][0]["domain"], "Cybersecurity");
        assert_eq!(json["rows"][0]["count"], 1);
        assert_eq!(json["rows"][1]["domain"], "Data Science");
        assert_eq!(json["rows"][1]["count"], 2);
    }

    #[tokio::test]
    async fn test_trends_json() {
        let (status, body) = get_body(create_test_app(), "/api/v1/trends").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["years"], serde_json::json!([2021, 2022]));
        assert_eq!(json["rows"].as_array().unwrap().len(), 3);
        assert_eq!(json["series"].as_array().unwrap().len(), 2);
        assert_eq!(json["total"], 3);
    }

    #[tokio::test]
    async fn test_unknown_path() {
        let (status, body) = get_body(create_test_app(), "/callbacks").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("NOT_FOUND"));
    }
}
