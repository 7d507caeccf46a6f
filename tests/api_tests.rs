mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use car_comparison::config::environment::EnvironmentConfig;

use common::{app, body_json, get_from_origin, offline_state, offline_state_with, send};

#[tokio::test]
async fn test_health_check() {
    let state = offline_state();
    let response = send(app(&state), Method::GET, "/health", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_get_comparison_masks_locked_columns() {
    let state = offline_state();
    let response = send(app(&state), Method::GET, "/api/comparison", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);

    let columns = body["data"]["columns"].as_array().unwrap();
    assert_eq!(columns.len(), 6);
    assert_eq!(columns[0]["title"], "Current Vehicle");
    assert_eq!(columns[1]["title"], "Option 1");
    assert_eq!(body["data"]["lockedColumns"], 3);
    for column in columns {
        let locked = column["locked"].as_bool().unwrap();
        assert_eq!(column["vehicle"].is_null(), locked);
    }
}

#[tokio::test]
async fn test_set_field_recomputes_that_vehicle() {
    let state = offline_state();
    let response = send(
        app(&state),
        Method::PUT,
        "/api/comparison/vehicles/1/fields/insuranceCosts",
        Some(json!({ "value": "2000" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["result"], "applied");

    let vehicle = &body["data"]["vehicle"];
    assert_eq!(vehicle["insuranceCosts"], 2000.0);
    let expected = 250.0 + 650.0 + 900.0 + 2000.0;
    assert_eq!(vehicle["costPerYear"], expected);
    assert_eq!(vehicle["totalCOO"], expected * 5.0 + 1200.0);
}

#[tokio::test]
async fn test_set_field_rejects_unreadable_text() {
    let state = offline_state();
    let response = send(
        app(&state),
        Method::PUT,
        "/api/comparison/vehicles/0/fields/driveAwayPrice",
        Some(json!({ "value": "abc" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["result"], "rejected");
    assert_eq!(body["data"]["vehicle"]["driveAwayPrice"], 30000.0);
}

#[tokio::test]
async fn test_long_unreadable_text_is_rejected_not_an_error() {
    let state = offline_state();
    let response = send(
        app(&state),
        Method::PUT,
        "/api/comparison/vehicles/0/fields/tyres",
        Some(json!({ "value": "not a number ".repeat(5) })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["result"], "rejected");
    assert_eq!(body["data"]["vehicle"]["tyres"], 800.0);
}

#[tokio::test]
async fn test_set_percent_field() {
    let state = offline_state();
    let response = send(
        app(&state),
        Method::PUT,
        "/api/comparison/vehicles/0/fields/depreciationPercent",
        Some(json!({ "value": "50%" })),
    )
    .await;

    let body = body_json(response).await;
    assert_eq!(body["data"]["vehicle"]["depreciationPercent"], 50.0);
    assert_eq!(body["data"]["vehicle"]["depreciationDollars"], 15000.0);
    assert_eq!(body["data"]["vehicle"]["tradeInValue"], 15000.0);
}

#[tokio::test]
async fn test_set_field_errors() {
    let state = offline_state();

    let unknown_field = send(
        app(&state),
        Method::PUT,
        "/api/comparison/vehicles/0/fields/carbScore",
        Some(json!({ "value": "5" })),
    )
    .await;
    assert_eq!(unknown_field.status(), StatusCode::BAD_REQUEST);

    let out_of_range = send(
        app(&state),
        Method::PUT,
        "/api/comparison/vehicles/42/fields/tyres",
        Some(json!({ "value": "5" })),
    )
    .await;
    assert_eq!(out_of_range.status(), StatusCode::NOT_FOUND);

    let too_long = send(
        app(&state),
        Method::PUT,
        "/api/comparison/vehicles/0/fields/tyres",
        Some(json!({ "value": "1".repeat(300) })),
    )
    .await;
    assert_eq!(too_long.status(), StatusCode::BAD_REQUEST);
    let body = body_json(too_long).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_add_vehicle_then_reset() {
    let state = offline_state();

    let response = send(app(&state), Method::POST, "/api/comparison/vehicles", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["index"], 6);
    assert_eq!(body["data"]["id"], "car-7");

    {
        let model = state.model.read().await;
        assert_eq!(model.len(), 7);
        assert!(model.locked()[6]);
        assert!(model.visibility()[6]);
    }

    let response = send(app(&state), Method::POST, "/api/comparison/reset", None).await;
    let body = body_json(response).await;
    assert_eq!(body["message"], "Comparison reset");
    assert_eq!(body["data"]["columns"].as_array().unwrap().len(), 6);

    let model = state.model.read().await;
    assert_eq!(model.vehicles(), model.defaults());
    assert_eq!(model.locked(), &[false, false, false, true, true, true]);
}

#[tokio::test]
async fn test_column_flags() {
    let state = offline_state();

    let response = send(
        app(&state),
        Method::PUT,
        "/api/comparison/columns/2/visibility",
        Some(json!({ "visible": false })),
    )
    .await;
    let body = body_json(response).await;
    assert_eq!(body["data"], json!([true, true, false, true, true, true]));

    let response = send(
        app(&state),
        Method::POST,
        "/api/comparison/columns/2/visibility/toggle",
        None,
    )
    .await;
    let body = body_json(response).await;
    assert_eq!(body["data"][2], true);

    let response = send(
        app(&state),
        Method::PUT,
        "/api/comparison/columns/5/lock",
        Some(json!({ "locked": false })),
    )
    .await;
    let body = body_json(response).await;
    assert_eq!(body["data"], json!([false, false, false, true, true, false]));

    // Fuera de rango no hace nada, no es un error
    let response = send(
        app(&state),
        Method::PUT,
        "/api/comparison/columns/99/lock",
        Some(json!({ "locked": true })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_sections() {
    let state = offline_state();

    let response = send(
        app(&state),
        Method::PUT,
        "/api/comparison/sections/roadCost",
        Some(json!({ "expanded": true })),
    )
    .await;
    assert_eq!(body_json(response).await["data"], true);

    let response = send(
        app(&state),
        Method::POST,
        "/api/comparison/sections/roadCost/toggle",
        None,
    )
    .await;
    assert_eq!(body_json(response).await["data"], false);

    let response = send(
        app(&state),
        Method::PUT,
        "/api/comparison/sections/nowhere",
        Some(json!({ "expanded": true })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_recalculate_offline_succeeds_locally() {
    let state = offline_state();
    state.model.write().await.set_field(
        5,
        car_comparison::models::vehicle::EditableField::Tyres,
        "4000",
    );

    let response = send(app(&state), Method::POST, "/api/comparison/recalculate", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["source"], "local");
    assert_eq!(body["data"]["recomputed"], 6);
    assert_eq!(
        body["message"],
        "Recalculation completed locally (no backend connection)"
    );

    let model = state.model.read().await;
    let locked_car = model.vehicle(5).unwrap();
    assert_eq!(locked_car.total_coo, locked_car.cost_per_year * 5.0 + 4000.0);
}

#[tokio::test]
async fn test_cors_depends_on_environment() {
    let origin = "https://dealer.example";

    let development = offline_state();
    let response = get_from_origin(app(&development), "/health", origin).await;
    assert_eq!(response.headers()["access-control-allow-origin"], origin);

    let production = offline_state_with(EnvironmentConfig {
        environment: "production".to_string(),
        ..EnvironmentConfig::default()
    });
    let response = get_from_origin(app(&production), "/health", origin).await;
    assert!(response.headers().get("access-control-allow-origin").is_none());

    let listed = offline_state_with(EnvironmentConfig {
        environment: "production".to_string(),
        cors_origins: vec![origin.to_string()],
        ..EnvironmentConfig::default()
    });
    let response = get_from_origin(app(&listed), "/health", origin).await;
    assert_eq!(response.headers()["access-control-allow-origin"], origin);
}
