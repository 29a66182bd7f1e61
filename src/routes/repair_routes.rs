use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::controllers::repair_controller::RepairController;
use crate::dto::repair_dto::{
    CreateRepairRequest, RepairCreatedResponse, RepairDetail, StatsSummary, UpdateStatusRequest,
};
use crate::dto::vehicle_dto::{ApiResponse, ListResponse};
use crate::models::repair_request::RepairWithContext;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_repair_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_repairs).post(create_repair))
        .route("/stats/summary", get(stats_summary))
        .route("/status/:status", get(list_by_status))
        .route("/engineer/:engineer_id", get(list_by_engineer))
        .route("/:id", get(get_repair))
        .route("/:id/status", put(update_status))
}

async fn create_repair(
    State(state): State<AppState>,
    Json(request): Json<CreateRepairRequest>,
) -> Result<(StatusCode, Json<RepairCreatedResponse>), AppError> {
    let controller = RepairController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<Value>, AppError> {
    let controller = RepairController::new(state.pool.clone());
    let message = controller.transition(id, request).await?;
    Ok(Json(json!({
        "success": true,
        "message": message,
    })))
}

async fn get_repair(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<RepairDetail>>, AppError> {
    let controller = RepairController::new(state.pool.clone());
    let detail = controller.detail(id).await?;
    Ok(Json(ApiResponse::success(detail)))
}

async fn list_repairs(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<RepairWithContext>>, AppError> {
    let controller = RepairController::new(state.pool.clone());
    Ok(Json(controller.list_all().await?))
}

async fn list_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> Result<Json<ListResponse<RepairWithContext>>, AppError> {
    let controller = RepairController::new(state.pool.clone());
    Ok(Json(controller.list_by_status(&status).await?))
}

async fn list_by_engineer(
    State(state): State<AppState>,
    Path(engineer_id): Path<Uuid>,
) -> Result<Json<ListResponse<RepairWithContext>>, AppError> {
    let controller = RepairController::new(state.pool.clone());
    Ok(Json(controller.list_by_engineer(engineer_id).await?))
}

async fn stats_summary(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<StatsSummary>>, AppError> {
    let controller = RepairController::new(state.pool.clone());
    Ok(Json(controller.stats().await?))
}
