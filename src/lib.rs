//! Servicio de comparación de coste de propiedad de coches
//!
//! Mantiene el modelo de la tabla (registros, indicadores de columna, estado
//! de secciones), deriva costes, ahorros y puntuación de emisiones a partir de
//! las entradas editables y lo expone por HTTP. El recálculo puede delegarse
//! en un backend externo con alternativa local.

pub mod clients;
pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_for;
use crate::routes::comparison_routes::create_comparison_router;
use crate::state::AppState;

/// Router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    let cors = cors_for(&state.config);

    Router::new()
        .route("/health", get(health))
        .nest("/api/comparison", create_comparison_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({
        "service": "car-comparison",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
