use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::controllers::auth_controller::AuthController;
use crate::controllers::officer_controller::OfficerController;
use crate::dto::auth_dto::{
    LoginRequest, LoginResponse, ProfileQuery, ProfileResponse, RegisterOfficerRequest,
};
use crate::dto::vehicle_dto::{ApiResponse, ListResponse};
use crate::models::officer::OfficerPublic;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::JwtConfig;

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/register", post(register))
        .route("/logout", post(logout))
        .route("/profile", get(profile))
        .route("/officers", get(list_officers))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let controller = AuthController::new(state.pool.clone());
    let jwt_config = JwtConfig::from(&state.config);
    let response = controller.login(request, &jwt_config).await?;
    Ok(Json(response))
}

async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterOfficerRequest>,
) -> Result<(StatusCode, Json<ApiResponse<OfficerPublic>>), AppError> {
    let controller = AuthController::new(state.pool.clone());
    let response = controller.register(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Logout de cortesía: los tokens son stateless, no hay sesión que cerrar
async fn logout() -> Json<Value> {
    Json(json!({
        "success": true,
        "message": "Logout successful",
    }))
}

async fn profile(
    State(state): State<AppState>,
    Query(query): Query<ProfileQuery>,
) -> Result<Json<ProfileResponse>, AppError> {
    let user_id = query
        .user_id
        .ok_or_else(|| AppError::Validation("User ID is required".to_string()))?;

    let controller = OfficerController::new(state.pool.clone());
    Ok(Json(controller.profile(user_id).await?))
}

async fn list_officers(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<OfficerPublic>>, AppError> {
    let controller = OfficerController::new(state.pool.clone());
    Ok(Json(controller.list_all().await?))
}
