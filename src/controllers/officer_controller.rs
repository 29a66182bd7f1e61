//! Controller del directorio de oficiales
//!
//! Listado y perfiles con estadísticas por rol. La agregación se elige
//! con un despacho por rol; un rol sin vista de estadísticas (admin)
//! recibe un objeto vacío.

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::auth_dto::{ProfileResponse, ProfileStats};
use crate::dto::vehicle_dto::ListResponse;
use crate::models::officer::{OfficerPublic, OfficerRole};
use crate::repositories::officer_repository::OfficerRepository;
use crate::utils::errors::AppError;

pub struct OfficerController {
    repository: OfficerRepository,
}

impl OfficerController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: OfficerRepository::new(pool),
        }
    }

    pub async fn profile(&self, user_id: Uuid) -> Result<ProfileResponse, AppError> {
        let officer = self
            .repository
            .find_public_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let stats = self.stats_for(&officer).await?;

        Ok(ProfileResponse {
            success: true,
            user: officer,
            stats,
        })
    }

    pub async fn list_all(&self) -> Result<ListResponse<OfficerPublic>, AppError> {
        Ok(ListResponse::new(self.repository.find_all_public().await?))
    }

    /// Despacho de agregación por rol
    async fn stats_for(&self, officer: &OfficerPublic) -> Result<ProfileStats, AppError> {
        let stats = match OfficerRole::parse(&officer.role) {
            Some(OfficerRole::Engineer) => {
                let (total, pending, approved) =
                    self.repository.engineer_stats(officer.id).await?;
                ProfileStats::Engineer {
                    total_requests: total,
                    pending_requests: pending,
                    approved_requests: approved,
                }
            }
            Some(OfficerRole::SubjectOfficer) => {
                let (reviewed, forwarded) =
                    self.repository.subject_officer_stats(officer.id).await?;
                ProfileStats::SubjectOfficer {
                    reviewed_requests: reviewed,
                    forwarded_requests: forwarded,
                }
            }
            Some(OfficerRole::Rdhs) => {
                let (decisions, approved, rejected) = self.repository.rdhs_stats().await?;
                ProfileStats::Rdhs {
                    total_decisions: decisions,
                    approved_requests: approved,
                    rejected_requests: rejected,
                }
            }
            // admin y roles desconocidos no tienen vista de estadísticas
            _ => ProfileStats::None {},
        };

        Ok(stats)
    }
}
