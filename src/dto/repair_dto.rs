//! DTOs del workflow de reparaciones

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::repair_request::RepairWithContext;
use crate::models::status_update::HistoryEntry;

/// Request para crear una solicitud de reparación
#[derive(Debug, Deserialize)]
pub struct CreateRepairRequest {
    pub vehicle_id: Option<Uuid>,
    pub engineer_id: Option<Uuid>,
    pub repair_details: Option<String>,
    pub engineer_signature: Option<String>,
}

/// Request para transicionar el estado de una solicitud
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
    pub officer_id: Option<Uuid>,
    pub comments: Option<String>,
}

/// Response de creación: `{ success, message, repairId }`
#[derive(Debug, Serialize)]
pub struct RepairCreatedResponse {
    pub success: bool,
    pub message: String,
    #[serde(rename = "repairId")]
    pub repair_id: Uuid,
}

/// Detalle de solicitud con el historial completo de transiciones,
/// ordenado de más reciente a más antiguo.
#[derive(Debug, Serialize)]
pub struct RepairDetail {
    #[serde(flatten)]
    pub repair: RepairWithContext,
    pub history: Vec<HistoryEntry>,
}

/// Fila del conteo por estado
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct StatusCountRow {
    pub status: String,
    pub count: i64,
}

/// Fila de estadísticas mensuales (últimos 6 meses, descendente)
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct MonthlyStatsRow {
    pub month: String,
    pub count: i64,
    pub approved_count: i64,
}

/// Response del resumen: `{ success, data: { statusCount, monthlyStats } }`
#[derive(Debug, Serialize)]
pub struct StatsSummary {
    #[serde(rename = "statusCount")]
    pub status_count: Vec<StatusCountRow>,
    #[serde(rename = "monthlyStats")]
    pub monthly_stats: Vec<MonthlyStatsRow>,
}
