//! Modelo de RepairRequest
//!
//! Este módulo contiene el struct RepairRequest y el estado del workflow
//! de reparación. Mapea exactamente a la tabla repair_requests.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::vehicle::VehicleStatus;

/// Estado del workflow de una solicitud de reparación.
///
/// Progresión: pending -> sent_to_rdhs -> {approved | rejected}.
/// La transición se valida contra la lista fija de cuatro valores sin
/// restringir por el estado actual.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RepairStatus {
    Pending,
    SentToRdhs,
    Approved,
    Rejected,
}

/// Lista fija de estados aceptados por el endpoint de transición.
pub const ALLOWED_STATUSES: [RepairStatus; 4] = [
    RepairStatus::Pending,
    RepairStatus::SentToRdhs,
    RepairStatus::Approved,
    RepairStatus::Rejected,
];

impl RepairStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepairStatus::Pending => "pending",
            RepairStatus::SentToRdhs => "sent_to_rdhs",
            RepairStatus::Approved => "approved",
            RepairStatus::Rejected => "rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(RepairStatus::Pending),
            "sent_to_rdhs" => Some(RepairStatus::SentToRdhs),
            "approved" => Some(RepairStatus::Approved),
            "rejected" => Some(RepairStatus::Rejected),
            _ => None,
        }
    }

    /// Efecto colateral sobre el vehículo asociado: solo la aprobación
    /// mueve el vehículo a 'repaired'; el resto de transiciones no lo toca.
    pub fn vehicle_side_effect(&self) -> Option<VehicleStatus> {
        match self {
            RepairStatus::Approved => Some(VehicleStatus::Repaired),
            _ => None,
        }
    }
}

impl std::fmt::Display for RepairStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// RepairRequest principal - mapea exactamente a la tabla repair_requests.
/// vehicle_id y engineer_id son inmutables una vez creada la solicitud;
/// status solo lo muta el motor de workflow.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RepairRequest {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub engineer_id: Uuid,
    pub repair_details: String,
    pub engineer_signature: Option<String>,
    pub inspection_date: NaiveDate,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Solicitud enriquecida con los campos de vehículo e ingeniero para
/// listados y detalle (LEFT JOIN, de ahí los Option).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RepairWithContext {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub engineer_id: Uuid,
    pub repair_details: String,
    pub engineer_signature: Option<String>,
    pub inspection_date: NaiveDate,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub registration_number: Option<String>,
    pub vehicle_type: Option<String>,
    pub hospital_name: Option<String>,
    pub vehicle_status: Option<String>,
    pub engineer_name: Option<String>,
    pub engineer_email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repair_status_round_trip() {
        for status in ALLOWED_STATUSES {
            assert_eq!(RepairStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn test_repair_status_rejects_values_outside_allow_list() {
        assert_eq!(RepairStatus::parse("cancelled"), None);
        assert_eq!(RepairStatus::parse("PENDING"), None);
        assert_eq!(RepairStatus::parse(""), None);
    }

    #[test]
    fn test_only_approval_touches_the_vehicle() {
        assert_eq!(
            RepairStatus::Approved.vehicle_side_effect(),
            Some(VehicleStatus::Repaired)
        );
        assert_eq!(RepairStatus::Pending.vehicle_side_effect(), None);
        assert_eq!(RepairStatus::SentToRdhs.vehicle_side_effect(), None);
        assert_eq!(RepairStatus::Rejected.vehicle_side_effect(), None);
    }

    #[test]
    fn test_display_matches_wire_format() {
        assert_eq!(RepairStatus::SentToRdhs.to_string(), "sent_to_rdhs");
    }
}
