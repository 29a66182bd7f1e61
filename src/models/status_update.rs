//! Modelo de StatusUpdate
//!
//! Registro de auditoría append-only: una fila por transición de estado
//! de una solicitud de reparación. Las filas nunca se mutan ni se borran;
//! el historial es la única fuente de verdad histórica.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// StatusUpdate - mapea exactamente a la tabla status_updates
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StatusUpdate {
    pub id: Uuid,
    pub repair_request_id: Uuid,
    pub officer_id: Uuid,
    pub status: String,
    pub comments: String,
    pub updated_at: DateTime<Utc>,
}

/// Entrada del historial enriquecida con nombre y rol del oficial actuante.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub repair_request_id: Uuid,
    pub officer_id: Uuid,
    pub status: String,
    pub comments: String,
    pub updated_at: DateTime<Utc>,
    pub officer_name: Option<String>,
    pub officer_role: Option<String>,
}
