//! Motor de workflow de reparaciones
//!
//! Aplica las reglas de la máquina de estados: valida la transición
//! pedida contra la lista fija, delega la escritura atómica al
//! repositorio y arma las respuestas del contrato.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::dto::repair_dto::{
    CreateRepairRequest, RepairCreatedResponse, RepairDetail, StatsSummary, UpdateStatusRequest,
};
use crate::dto::vehicle_dto::{ApiResponse, ListResponse};
use crate::models::repair_request::{RepairStatus, RepairWithContext};
use crate::repositories::officer_repository::OfficerRepository;
use crate::repositories::repair_repository::RepairRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_not_empty;

pub struct RepairController {
    repairs: RepairRepository,
    vehicles: VehicleRepository,
    officers: OfficerRepository,
}

impl RepairController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repairs: RepairRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            officers: OfficerRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateRepairRequest,
    ) -> Result<RepairCreatedResponse, AppError> {
        let (vehicle_id, engineer_id, repair_details, engineer_signature) =
            validate_create(request)?;

        if self.vehicles.find_by_id(vehicle_id).await?.is_none() {
            return Err(AppError::NotFound("Vehicle not found".to_string()));
        }
        if !self.officers.exists(engineer_id).await? {
            return Err(AppError::NotFound("Engineer not found".to_string()));
        }

        let repair_id = self
            .repairs
            .create_request(vehicle_id, engineer_id, repair_details, engineer_signature)
            .await?;

        info!("🔧 Solicitud de reparación {} creada para vehículo {}", repair_id, vehicle_id);

        Ok(RepairCreatedResponse {
            success: true,
            message: "Repair request created successfully".to_string(),
            repair_id,
        })
    }

    /// Aplica una transición y devuelve el mensaje de confirmación con el
    /// estado aplicado.
    pub async fn transition(
        &self,
        id: Uuid,
        request: UpdateStatusRequest,
    ) -> Result<String, AppError> {
        let (new_status, officer_id, comments) = validate_transition(request)?;

        self.repairs
            .transition_status(id, new_status, officer_id, comments)
            .await?;

        info!("🔁 Solicitud {} transicionada a '{}' por oficial {}", id, new_status, officer_id);

        Ok(format!("Repair request {} successfully", new_status))
    }

    pub async fn detail(&self, id: Uuid) -> Result<RepairDetail, AppError> {
        let repair = self
            .repairs
            .find_detail(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Repair request not found".to_string()))?;

        let history = self.repairs.find_history(id).await?;

        Ok(RepairDetail { repair, history })
    }

    pub async fn list_all(&self) -> Result<ListResponse<RepairWithContext>, AppError> {
        Ok(ListResponse::new(self.repairs.find_all().await?))
    }

    pub async fn list_by_status(
        &self,
        status: &str,
    ) -> Result<ListResponse<RepairWithContext>, AppError> {
        Ok(ListResponse::new(self.repairs.find_by_status(status).await?))
    }

    pub async fn list_by_engineer(
        &self,
        engineer_id: Uuid,
    ) -> Result<ListResponse<RepairWithContext>, AppError> {
        Ok(ListResponse::new(self.repairs.find_by_engineer(engineer_id).await?))
    }

    pub async fn stats(&self) -> Result<ApiResponse<StatsSummary>, AppError> {
        let status_count = self.repairs.status_summary().await?;
        let monthly_stats = self.repairs.monthly_summary().await?;

        Ok(ApiResponse::success(StatsSummary {
            status_count,
            monthly_stats,
        }))
    }
}

/// Validación de alta: los tres campos obligatorios deben venir y los
/// detalles no pueden ser vacíos. Nada se escribe si falla.
fn validate_create(
    request: CreateRepairRequest,
) -> Result<(Uuid, Uuid, String, Option<String>), AppError> {
    let missing = || {
        AppError::Validation("Vehicle ID, engineer ID, and repair details are required".to_string())
    };

    let vehicle_id = request.vehicle_id.ok_or_else(missing)?;
    let engineer_id = request.engineer_id.ok_or_else(missing)?;
    let repair_details = request.repair_details.ok_or_else(missing)?;

    validate_not_empty(&repair_details).map_err(|_| missing())?;

    Ok((vehicle_id, engineer_id, repair_details, request.engineer_signature))
}

/// Validación de transición: estado y oficial obligatorios, estado dentro
/// de la lista fija. Se rechaza antes de cualquier escritura.
fn validate_transition(
    request: UpdateStatusRequest,
) -> Result<(RepairStatus, Uuid, String), AppError> {
    let missing =
        || AppError::Validation("Status and officer ID are required".to_string());

    let status_raw = request.status.ok_or_else(missing)?;
    let officer_id = request.officer_id.ok_or_else(missing)?;

    let new_status = RepairStatus::parse(&status_raw)
        .ok_or_else(|| AppError::Validation("Invalid status value".to_string()))?;

    Ok((new_status, officer_id, request.comments.unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request(
        vehicle_id: Option<Uuid>,
        engineer_id: Option<Uuid>,
        repair_details: Option<&str>,
    ) -> CreateRepairRequest {
        CreateRepairRequest {
            vehicle_id,
            engineer_id,
            repair_details: repair_details.map(str::to_string),
            engineer_signature: None,
        }
    }

    #[test]
    fn test_validate_create_accepts_complete_request() {
        let vehicle_id = Uuid::new_v4();
        let engineer_id = Uuid::new_v4();
        let request = create_request(Some(vehicle_id), Some(engineer_id), Some("Engine overheating"));

        let (v, e, details, signature) = validate_create(request).unwrap();
        assert_eq!(v, vehicle_id);
        assert_eq!(e, engineer_id);
        assert_eq!(details, "Engine overheating");
        assert!(signature.is_none());
    }

    #[test]
    fn test_validate_create_rejects_missing_fields() {
        let cases = [
            create_request(None, Some(Uuid::new_v4()), Some("x")),
            create_request(Some(Uuid::new_v4()), None, Some("x")),
            create_request(Some(Uuid::new_v4()), Some(Uuid::new_v4()), None),
        ];
        for request in cases {
            match validate_create(request) {
                Err(AppError::Validation(msg)) => {
                    assert_eq!(msg, "Vehicle ID, engineer ID, and repair details are required")
                }
                other => panic!("expected validation error, got {:?}", other.map(|_| ())),
            }
        }
    }

    #[test]
    fn test_validate_create_rejects_blank_details() {
        let request = create_request(Some(Uuid::new_v4()), Some(Uuid::new_v4()), Some("   "));
        assert!(matches!(validate_create(request), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_validate_transition_accepts_allowed_statuses() {
        for status in ["pending", "sent_to_rdhs", "approved", "rejected"] {
            let request = UpdateStatusRequest {
                status: Some(status.to_string()),
                officer_id: Some(Uuid::new_v4()),
                comments: None,
            };
            let (parsed, _, comments) = validate_transition(request).unwrap();
            assert_eq!(parsed.as_str(), status);
            assert_eq!(comments, "");
        }
    }

    #[test]
    fn test_validate_transition_rejects_status_outside_allow_list() {
        let request = UpdateStatusRequest {
            status: Some("cancelled".to_string()),
            officer_id: Some(Uuid::new_v4()),
            comments: None,
        };
        match validate_transition(request) {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "Invalid status value"),
            other => panic!("expected validation error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_validate_transition_rejects_missing_officer() {
        let request = UpdateStatusRequest {
            status: Some("approved".to_string()),
            officer_id: None,
            comments: None,
        };
        match validate_transition(request) {
            Err(AppError::Validation(msg)) => {
                assert_eq!(msg, "Status and officer ID are required")
            }
            other => panic!("expected validation error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_validate_transition_keeps_comments() {
        let request = UpdateStatusRequest {
            status: Some("rejected".to_string()),
            officer_id: Some(Uuid::new_v4()),
            comments: Some("Estimate too high".to_string()),
        };
        let (_, _, comments) = validate_transition(request).unwrap();
        assert_eq!(comments, "Estimate too high");
    }
}
