//! Rutas de la API
//!
//! Routers por recurso más el router principal de la aplicación.

pub mod auth_routes;
pub mod repair_routes;
pub mod vehicle_routes;

use axum::{
    http::{StatusCode, Uri},
    response::Json,
    routing::get,
    Router,
};
use serde_json::{json, Value};

use crate::state::AppState;

/// Router principal: recursos bajo /api más la raíz informativa y el
/// fallback con envelope de error.
pub fn create_app_router() -> Router<AppState> {
    Router::new()
        .route("/", get(api_info))
        .nest("/api/auth", auth_routes::create_auth_router())
        .nest("/api/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/api/repairs", repair_routes::create_repair_router())
        .fallback(route_not_found)
}

/// Índice de la API
async fn api_info() -> Json<Value> {
    Json(json!({
        "message": "✅ Vehicle Repair System API is running!",
        "version": "1.0.0",
        "endpoints": {
            "auth": ["POST /api/auth/login", "POST /api/auth/register", "GET /api/auth/profile", "GET /api/auth/officers"],
            "vehicles": ["GET /api/vehicles", "GET /api/vehicles/search/:fragment", "POST /api/vehicles"],
            "repairs": ["GET /api/repairs", "POST /api/repairs", "PUT /api/repairs/:id/status", "GET /api/repairs/stats/summary"]
        }
    }))
}

async fn route_not_found(uri: Uri) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "error": format!("Route not found: {}", uri),
        })),
    )
}
