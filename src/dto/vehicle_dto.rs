//! DTOs de Vehicle y envelopes genéricos de la API

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Response genérica con mensaje opcional
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data,
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data,
        }
    }
}

/// Response de listados: `{ success, count, data }`
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub success: bool,
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

/// Request para registrar un vehículo. Los campos requeridos se validan en
/// el controller para devolver el envelope de error del contrato.
#[derive(Debug, Deserialize)]
pub struct CreateVehicleRequest {
    pub registration_number: Option<String>,
    pub vehicle_type: Option<String>,
    pub hospital_name: Option<String>,
}

/// Request para actualizar un vehículo. current_status es la puerta de
/// escape administrativa: edita el estado sin pasar por el workflow.
#[derive(Debug, Deserialize)]
pub struct UpdateVehicleRequest {
    pub registration_number: Option<String>,
    pub vehicle_type: Option<String>,
    pub hospital_name: Option<String>,
    pub current_status: Option<String>,
}

/// Response de creación: `{ success, message, vehicleId }`
#[derive(Debug, Serialize)]
pub struct VehicleCreatedResponse {
    pub success: bool,
    pub message: String,
    #[serde(rename = "vehicleId")]
    pub vehicle_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_response_counts_data() {
        let response = ListResponse::new(vec!["CAB-1234", "CAB-5678"]);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["count"], 2);
    }

    #[test]
    fn test_created_response_uses_camel_case_id() {
        let response = VehicleCreatedResponse {
            success: true,
            message: "Vehicle added successfully".to_string(),
            vehicle_id: Uuid::new_v4(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("vehicleId").is_some());
        assert!(json.get("vehicle_id").is_none());
    }
}
