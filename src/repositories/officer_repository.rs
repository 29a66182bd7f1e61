use sqlx::PgPool;
use uuid::Uuid;

use crate::models::officer::{Officer, OfficerPublic};
use crate::utils::errors::AppError;

pub struct OfficerRepository {
    pool: PgPool,
}

impl OfficerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: String,
        email: String,
        password_hash: String,
        role: String,
    ) -> Result<OfficerPublic, AppError> {
        let id = Uuid::new_v4();

        let officer = sqlx::query_as::<_, OfficerPublic>(
            r#"
            INSERT INTO officers (id, name, email, password_hash, role, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, email, role, created_at
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(role)
        .bind(chrono::Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(officer)
    }

    /// Única consulta que materializa el hash de contraseña (login)
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Officer>, AppError> {
        let officer = sqlx::query_as::<_, Officer>(
            "SELECT id, name, email, password_hash, role, created_at FROM officers WHERE lower(email) = lower($1)",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(officer)
    }

    pub async fn find_public_by_id(&self, id: Uuid) -> Result<Option<OfficerPublic>, AppError> {
        let officer = sqlx::query_as::<_, OfficerPublic>(
            "SELECT id, name, email, role, created_at FROM officers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(officer)
    }

    pub async fn find_all_public(&self) -> Result<Vec<OfficerPublic>, AppError> {
        let officers = sqlx::query_as::<_, OfficerPublic>(
            "SELECT id, name, email, role, created_at FROM officers ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(officers)
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM officers WHERE lower(email) = lower($1))",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn exists(&self, id: Uuid) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM officers WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    /// Estadísticas de perfil de un ingeniero: sus propias solicitudes
    pub async fn engineer_stats(&self, engineer_id: Uuid) -> Result<(i64, i64, i64), AppError> {
        let row: (i64, i64, i64) = sqlx::query_as(
            r#"
            SELECT
                COUNT(*),
                COALESCE(SUM(CASE WHEN status = 'pending' THEN 1 ELSE 0 END), 0)::bigint,
                COALESCE(SUM(CASE WHEN status = 'approved' THEN 1 ELSE 0 END), 0)::bigint
            FROM repair_requests
            WHERE engineer_id = $1
            "#,
        )
        .bind(engineer_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Estadísticas de un subject officer: solicitudes en las que actuó
    /// (vía el log de auditoría) y cuántas reenvió al RDHS
    pub async fn subject_officer_stats(&self, officer_id: Uuid) -> Result<(i64, i64), AppError> {
        let row: (i64, i64) = sqlx::query_as(
            r#"
            SELECT
                COUNT(DISTINCT r.id),
                COALESCE(SUM(CASE WHEN r.status = 'sent_to_rdhs' THEN 1 ELSE 0 END), 0)::bigint
            FROM repair_requests r
            JOIN status_updates s ON r.id = s.repair_request_id
            WHERE s.officer_id = $1
            "#,
        )
        .bind(officer_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Estadísticas del RDHS: decisiones terminales de todo el sistema
    pub async fn rdhs_stats(&self) -> Result<(i64, i64, i64), AppError> {
        let row: (i64, i64, i64) = sqlx::query_as(
            r#"
            SELECT
                COUNT(DISTINCT id),
                COALESCE(SUM(CASE WHEN status = 'approved' THEN 1 ELSE 0 END), 0)::bigint,
                COALESCE(SUM(CASE WHEN status = 'rejected' THEN 1 ELSE 0 END), 0)::bigint
            FROM repair_requests
            WHERE status IN ('approved', 'rejected')
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }
}
