//! Repositorio del workflow de reparaciones
//!
//! Las operaciones de escritura (alta y transición) agrupan sus efectos en
//! una transacción: fila de solicitud, fila de auditoría y efecto sobre el
//! vehículo se aplican todos o ninguno.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::repair_dto::{MonthlyStatsRow, StatusCountRow};
use crate::models::repair_request::{RepairStatus, RepairWithContext};
use crate::models::status_update::HistoryEntry;
use crate::models::vehicle::VehicleStatus;
use crate::utils::errors::AppError;

/// Proyección común de solicitudes con vehículo e ingeniero
const REPAIR_SELECT: &str = r#"
    SELECT
        r.id, r.vehicle_id, r.engineer_id, r.repair_details, r.engineer_signature,
        r.inspection_date, r.status, r.created_at,
        v.registration_number, v.vehicle_type, v.hospital_name,
        v.current_status AS vehicle_status,
        o.name AS engineer_name, o.email AS engineer_email
    FROM repair_requests r
    LEFT JOIN vehicles v ON r.vehicle_id = v.id
    LEFT JOIN officers o ON r.engineer_id = o.id
"#;

pub struct RepairRepository {
    pool: PgPool,
}

impl RepairRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Alta de solicitud: inserta la solicitud en 'pending', mueve el
    /// vehículo a 'under_repair' y registra la fila inicial de auditoría,
    /// todo en una transacción.
    pub async fn create_request(
        &self,
        vehicle_id: Uuid,
        engineer_id: Uuid,
        repair_details: String,
        engineer_signature: Option<String>,
    ) -> Result<Uuid, AppError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO repair_requests
                (id, vehicle_id, engineer_id, repair_details, engineer_signature, inspection_date, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(id)
        .bind(vehicle_id)
        .bind(engineer_id)
        .bind(repair_details)
        .bind(engineer_signature)
        .bind(now.date_naive())
        .bind(RepairStatus::Pending.as_str())
        .bind(now)
        .execute(&mut *tx)
        .await?;

        sqlx::query("UPDATE vehicles SET current_status = $2 WHERE id = $1")
            .bind(vehicle_id)
            .bind(VehicleStatus::UnderRepair.as_str())
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            r#"
            INSERT INTO status_updates (id, repair_request_id, officer_id, status, comments, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(id)
        .bind(engineer_id)
        .bind(RepairStatus::Pending.as_str())
        .bind("Repair request created by engineer")
        .bind(now)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(id)
    }

    /// Transición de estado: actualiza la solicitud, añade la fila de
    /// auditoría y, si el nuevo estado lo exige, actualiza el vehículo
    /// (releyendo vehicle_id dentro de la misma transacción). Si la
    /// solicitud no existe no se escribe nada, tampoco auditoría.
    pub async fn transition_status(
        &self,
        id: Uuid,
        new_status: RepairStatus,
        officer_id: Uuid,
        comments: String,
    ) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query("UPDATE repair_requests SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(new_status.as_str())
            .execute(&mut *tx)
            .await?;

        if updated.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(AppError::NotFound("Repair request not found".to_string()));
        }

        sqlx::query(
            r#"
            INSERT INTO status_updates (id, repair_request_id, officer_id, status, comments, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(id)
        .bind(officer_id)
        .bind(new_status.as_str())
        .bind(comments)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        if let Some(vehicle_status) = new_status.vehicle_side_effect() {
            let vehicle_id: Option<Uuid> =
                sqlx::query_scalar("SELECT vehicle_id FROM repair_requests WHERE id = $1")
                    .bind(id)
                    .fetch_optional(&mut *tx)
                    .await?;

            if let Some(vehicle_id) = vehicle_id {
                sqlx::query("UPDATE vehicles SET current_status = $2 WHERE id = $1")
                    .bind(vehicle_id)
                    .bind(vehicle_status.as_str())
                    .execute(&mut *tx)
                    .await?;
            }
        }

        tx.commit().await?;

        Ok(())
    }

    pub async fn find_all(&self) -> Result<Vec<RepairWithContext>, AppError> {
        let repairs = sqlx::query_as::<_, RepairWithContext>(&format!(
            "{REPAIR_SELECT} ORDER BY r.created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(repairs)
    }

    /// Un estado fuera del conjunto conocido no matchea filas; el listado
    /// nunca falla.
    pub async fn find_by_status(&self, status: &str) -> Result<Vec<RepairWithContext>, AppError> {
        let repairs = sqlx::query_as::<_, RepairWithContext>(&format!(
            "{REPAIR_SELECT} WHERE r.status = $1 ORDER BY r.created_at DESC"
        ))
        .bind(status)
        .fetch_all(&self.pool)
        .await?;

        Ok(repairs)
    }

    pub async fn find_by_engineer(
        &self,
        engineer_id: Uuid,
    ) -> Result<Vec<RepairWithContext>, AppError> {
        let repairs = sqlx::query_as::<_, RepairWithContext>(&format!(
            "{REPAIR_SELECT} WHERE r.engineer_id = $1 ORDER BY r.created_at DESC"
        ))
        .bind(engineer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(repairs)
    }

    pub async fn find_detail(&self, id: Uuid) -> Result<Option<RepairWithContext>, AppError> {
        let repair = sqlx::query_as::<_, RepairWithContext>(&format!(
            "{REPAIR_SELECT} WHERE r.id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(repair)
    }

    /// Historial de transiciones, más reciente primero
    pub async fn find_history(&self, id: Uuid) -> Result<Vec<HistoryEntry>, AppError> {
        let history = sqlx::query_as::<_, HistoryEntry>(
            r#"
            SELECT
                s.id, s.repair_request_id, s.officer_id, s.status, s.comments, s.updated_at,
                o.name AS officer_name, o.role AS officer_role
            FROM status_updates s
            LEFT JOIN officers o ON s.officer_id = o.id
            WHERE s.repair_request_id = $1
            ORDER BY s.updated_at DESC
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(history)
    }

    pub async fn status_summary(&self) -> Result<Vec<StatusCountRow>, AppError> {
        let rows = sqlx::query_as::<_, StatusCountRow>(
            "SELECT status, COUNT(*) AS count FROM repair_requests GROUP BY status",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Solicitudes y aprobaciones por mes de creación, últimos 6 meses
    pub async fn monthly_summary(&self) -> Result<Vec<MonthlyStatsRow>, AppError> {
        let rows = sqlx::query_as::<_, MonthlyStatsRow>(
            r#"
            SELECT
                to_char(created_at, 'YYYY-MM') AS month,
                COUNT(*) AS count,
                COALESCE(SUM(CASE WHEN status = 'approved' THEN 1 ELSE 0 END), 0)::bigint AS approved_count
            FROM repair_requests
            GROUP BY to_char(created_at, 'YYYY-MM')
            ORDER BY month DESC
            LIMIT 6
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
