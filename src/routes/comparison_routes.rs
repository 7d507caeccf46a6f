use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};

use crate::controllers::comparison_controller::ComparisonController;
use crate::dto::comparison_dto::{
    AddVehicleResponse, ApiResponse, ComparisonView, SetFieldRequest, SetFieldResponse,
    SetLockRequest, SetSectionRequest, SetVisibilityRequest,
};
use crate::services::recalculation_service::RecalculationOutcome;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Rutas de la comparación, montadas en `/api/comparison`
pub fn create_comparison_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_comparison))
        .route("/vehicles", post(add_vehicle))
        .route("/vehicles/:index/fields/:field", put(set_field))
        .route("/reset", post(reset_all))
        .route("/columns/:index/visibility", put(set_visibility))
        .route("/columns/:index/visibility/toggle", post(toggle_visibility))
        .route("/columns/:index/lock", put(set_lock))
        .route("/sections/:key", put(set_section))
        .route("/sections/:key/toggle", post(toggle_section))
        .route("/recalculate", post(recalculate))
}

fn controller(state: &AppState) -> ComparisonController {
    ComparisonController::new(state.model.clone(), state.backend.clone())
}

async fn get_comparison(State(state): State<AppState>) -> Json<ApiResponse<ComparisonView>> {
    Json(ApiResponse::success(controller(&state).view().await))
}

async fn add_vehicle(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<AddVehicleResponse>>, AppError> {
    let response = controller(&state).add_vehicle().await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn set_field(
    State(state): State<AppState>,
    Path((index, field)): Path<(usize, String)>,
    Json(request): Json<SetFieldRequest>,
) -> Result<Json<ApiResponse<SetFieldResponse>>, AppError> {
    let response = controller(&state).set_field(index, &field, request).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn reset_all(State(state): State<AppState>) -> Json<ApiResponse<ComparisonView>> {
    let view = controller(&state).reset().await;
    Json(ApiResponse::success_with_message(view, "Comparison reset".to_string()))
}

async fn set_visibility(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(request): Json<SetVisibilityRequest>,
) -> Json<ApiResponse<Vec<bool>>> {
    Json(ApiResponse::success(
        controller(&state).set_visible(index, request.visible).await,
    ))
}

async fn toggle_visibility(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Json<ApiResponse<Vec<bool>>> {
    Json(ApiResponse::success(controller(&state).toggle_visible(index).await))
}

async fn set_lock(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(request): Json<SetLockRequest>,
) -> Json<ApiResponse<Vec<bool>>> {
    Json(ApiResponse::success(
        controller(&state).set_locked(index, request.locked).await,
    ))
}

async fn set_section(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(request): Json<SetSectionRequest>,
) -> Result<Json<ApiResponse<bool>>, AppError> {
    let expanded = controller(&state).set_section(&key, request.expanded).await?;
    Ok(Json(ApiResponse::success(expanded)))
}

async fn toggle_section(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<ApiResponse<bool>>, AppError> {
    let expanded = controller(&state).toggle_section(&key).await?;
    Ok(Json(ApiResponse::success(expanded)))
}

async fn recalculate(State(state): State<AppState>) -> Json<ApiResponse<RecalculationOutcome>> {
    let outcome = controller(&state).recalculate().await;
    let message = outcome.message.clone();
    Json(ApiResponse::success_with_message(outcome, message))
}
