#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use car_comparison::clients::{OfflineBackend, RecalculationBackend};
use car_comparison::config::environment::EnvironmentConfig;
use car_comparison::create_app;
use car_comparison::services::comparison_model::ComparisonModel;
use car_comparison::state::AppState;

pub fn test_state(backend: Arc<dyn RecalculationBackend>) -> AppState {
    AppState::new(
        EnvironmentConfig::default(),
        ComparisonModel::with_default_catalog(),
        backend,
    )
}

pub fn offline_state_with(config: EnvironmentConfig) -> AppState {
    AppState::new(config, ComparisonModel::with_default_catalog(), Arc::new(OfflineBackend))
}

pub fn offline_state() -> AppState {
    test_state(Arc::new(OfflineBackend))
}

pub async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn get_from_origin(app: Router, uri: &str, origin: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("origin", origin)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Router sobre un clon de `state`, así varias peticiones comparten el modelo
pub fn app(state: &AppState) -> Router {
    create_app(state.clone())
}
