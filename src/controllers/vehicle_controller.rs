//! Controller del registro de vehículos
//!
//! CRUD del registro más la búsqueda por matrícula. La actualización
//! directa de current_status es la puerta de escape administrativa que
//! no pasa por el motor de workflow.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::dto::vehicle_dto::{
    ApiResponse, CreateVehicleRequest, ListResponse, UpdateVehicleRequest, VehicleCreatedResponse,
};
use crate::models::vehicle::{normalize_registration, Vehicle};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_registration_number;

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> Result<VehicleCreatedResponse, AppError> {
        let (registration_number, vehicle_type) = validate_create(&request)?;

        if self.repository.registration_exists(&registration_number).await? {
            return Err(AppError::Duplicate(
                "Vehicle registration number already exists".to_string(),
            ));
        }

        let vehicle = self
            .repository
            .create(registration_number, vehicle_type, request.hospital_name)
            .await?;

        info!("🚗 Vehículo {} registrado ({})", vehicle.registration_number, vehicle.id);

        Ok(VehicleCreatedResponse {
            success: true,
            message: "Vehicle added successfully".to_string(),
            vehicle_id: vehicle.id,
        })
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ApiResponse<Vehicle>, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        Ok(ApiResponse::success(vehicle))
    }

    pub async fn list_all(&self) -> Result<ListResponse<Vehicle>, AppError> {
        Ok(ListResponse::new(self.repository.find_all().await?))
    }

    pub async fn list_by_status(&self, status: &str) -> Result<ListResponse<Vehicle>, AppError> {
        Ok(ListResponse::new(self.repository.find_by_status(status).await?))
    }

    pub async fn search(&self, fragment: &str) -> Result<ListResponse<Vehicle>, AppError> {
        Ok(ListResponse::new(
            self.repository.search_by_registration(fragment).await?,
        ))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<Vehicle>, AppError> {
        let registration_number = request
            .registration_number
            .as_deref()
            .map(normalize_registration);

        let vehicle = self
            .repository
            .update(
                id,
                registration_number,
                request.vehicle_type,
                request.hospital_name,
                request.current_status,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            vehicle,
            "Vehicle updated successfully".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}

/// Matrícula y tipo son obligatorios; la matrícula se normaliza a
/// mayúsculas antes de cualquier consulta.
fn validate_create(request: &CreateVehicleRequest) -> Result<(String, String), AppError> {
    let missing =
        || AppError::Validation("Registration number and vehicle type are required".to_string());

    let registration_raw = request.registration_number.as_deref().ok_or_else(missing)?;
    let vehicle_type = request.vehicle_type.as_deref().ok_or_else(missing)?;

    if vehicle_type.trim().is_empty() {
        return Err(missing());
    }

    let registration_number = normalize_registration(registration_raw);
    validate_registration_number(&registration_number)
        .map_err(|_| AppError::Validation("Invalid registration number".to_string()))?;

    Ok((registration_number, vehicle_type.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_create_normalizes_registration() {
        let request = CreateVehicleRequest {
            registration_number: Some(" cab-1234 ".to_string()),
            vehicle_type: Some("Ambulance".to_string()),
            hospital_name: None,
        };
        let (registration, vehicle_type) = validate_create(&request).unwrap();
        assert_eq!(registration, "CAB-1234");
        assert_eq!(vehicle_type, "Ambulance");
    }

    #[test]
    fn test_validate_create_rejects_missing_fields() {
        let request = CreateVehicleRequest {
            registration_number: Some("CAB-1234".to_string()),
            vehicle_type: None,
            hospital_name: None,
        };
        match validate_create(&request) {
            Err(AppError::Validation(msg)) => {
                assert_eq!(msg, "Registration number and vehicle type are required")
            }
            other => panic!("expected validation error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_validate_create_rejects_malformed_registration() {
        let request = CreateVehicleRequest {
            registration_number: Some("!!".to_string()),
            vehicle_type: Some("Van".to_string()),
            hospital_name: None,
        };
        assert!(matches!(
            validate_create(&request),
            Err(AppError::Validation(_))
        ));
    }
}
