//! Tests de integración del contrato HTTP
//!
//! Levantan el router real con un pool lazy (sin conexión): cubren los
//! caminos de validación y enrutamiento que se rechazan antes de tocar
//! la base de datos, exactamente donde el contrato exige no mutar nada.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use fleet_repair::config::environment::EnvironmentConfig;
use fleet_repair::routes::create_app_router;
use fleet_repair::state::AppState;

fn test_app() -> Router {
    // Pool lazy: nunca conecta en estos tests
    let pool = PgPool::connect_lazy("postgres://localhost/fleet_repair_test")
        .expect("lazy pool construction cannot fail");
    let state = AppState::new(pool, EnvironmentConfig::default());
    create_app_router().with_state(state)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body");
    serde_json::from_slice(&bytes).expect("response body is JSON")
}

fn json_request(method: &str, uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_api_info_endpoint() {
    let app = test_app();
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["version"], "1.0.0");
}

#[tokio::test]
async fn test_unknown_route_returns_error_envelope() {
    let app = test_app();
    let response = app
        .oneshot(Request::builder().uri("/api/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("/api/nope"));
}

#[tokio::test]
async fn test_create_repair_rejects_missing_fields() {
    let app = test_app();
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/repairs",
            &json!({ "vehicle_id": Uuid::new_v4() }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Vehicle ID, engineer ID, and repair details are required");
}

#[tokio::test]
async fn test_create_repair_rejects_blank_details() {
    let app = test_app();
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/repairs",
            &json!({
                "vehicle_id": Uuid::new_v4(),
                "engineer_id": Uuid::new_v4(),
                "repair_details": "   "
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_transition_rejects_status_outside_allow_list() {
    let app = test_app();
    let uri = format!("/api/repairs/{}/status", Uuid::new_v4());
    let response = app
        .oneshot(json_request(
            "PUT",
            &uri,
            &json!({ "status": "cancelled", "officer_id": Uuid::new_v4() }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Invalid status value");
}

#[tokio::test]
async fn test_transition_rejects_missing_officer() {
    let app = test_app();
    let uri = format!("/api/repairs/{}/status", Uuid::new_v4());
    let response = app
        .oneshot(json_request("PUT", &uri, &json!({ "status": "approved" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Status and officer ID are required");
}

#[tokio::test]
async fn test_create_vehicle_rejects_missing_fields() {
    let app = test_app();
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/vehicles",
            &json!({ "registration_number": "CAB-1234" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Registration number and vehicle type are required");
}

#[tokio::test]
async fn test_login_rejects_missing_password() {
    let app = test_app();
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            &json!({ "email": "engineer@hospital.com" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Email and password are required");
}

#[tokio::test]
async fn test_register_rejects_unknown_role() {
    let app = test_app();
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/register",
            &json!({
                "name": "Engineer John",
                "email": "engineer@hospital.com",
                "password": "password123",
                "role": "driver"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid role value");
}

#[tokio::test]
async fn test_profile_requires_user_id() {
    let app = test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/auth/profile")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "User ID is required");
}

#[tokio::test]
async fn test_logout_acknowledges() {
    let app = test_app();
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/logout")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Logout successful");
}
