//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle de la flota hospitalaria y su
//! estado de ciclo de vida. Mapea exactamente a la tabla vehicles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado del vehículo. Solo el motor de workflow lo modifica
/// (creación de solicitud → under_repair, aprobación → repaired);
/// la edición administrativa directa es la única excepción.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    Operational,
    UnderRepair,
    Repaired,
    Approved,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Operational => "operational",
            VehicleStatus::UnderRepair => "under_repair",
            VehicleStatus::Repaired => "repaired",
            VehicleStatus::Approved => "approved",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "operational" => Some(VehicleStatus::Operational),
            "under_repair" => Some(VehicleStatus::UnderRepair),
            "repaired" => Some(VehicleStatus::Repaired),
            "approved" => Some(VehicleStatus::Approved),
            _ => None,
        }
    }
}

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub registration_number: String,
    pub vehicle_type: String,
    pub hospital_name: Option<String>,
    pub current_status: String,
    pub created_at: DateTime<Utc>,
}

/// Normalizar matrícula: sin espacios en los extremos y en mayúsculas,
/// la convención de entrada manual de la flota.
pub fn normalize_registration(value: &str) -> String {
    value.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_status_round_trip() {
        for status in [
            VehicleStatus::Operational,
            VehicleStatus::UnderRepair,
            VehicleStatus::Repaired,
            VehicleStatus::Approved,
        ] {
            assert_eq!(VehicleStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn test_vehicle_status_rejects_unknown() {
        assert_eq!(VehicleStatus::parse("scrapped"), None);
        assert_eq!(VehicleStatus::parse(""), None);
    }

    #[test]
    fn test_normalize_registration() {
        assert_eq!(normalize_registration(" cab-1234 "), "CAB-1234");
        assert_eq!(normalize_registration("wp-ab-9012"), "WP-AB-9012");
    }
}
