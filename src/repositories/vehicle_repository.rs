use sqlx::PgPool;
use uuid::Uuid;

use crate::models::vehicle::{Vehicle, VehicleStatus};
use crate::utils::errors::AppError;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        registration_number: String,
        vehicle_type: String,
        hospital_name: Option<String>,
    ) -> Result<Vehicle, AppError> {
        let id = Uuid::new_v4();

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (id, registration_number, vehicle_type, hospital_name, current_status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(registration_number)
        .bind(vehicle_type)
        .bind(hospital_name)
        .bind(VehicleStatus::Operational.as_str())
        .bind(chrono::Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    pub async fn find_all(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles =
            sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(vehicles)
    }

    /// Listado por estado. Un estado desconocido simplemente no matchea
    /// ninguna fila; el listado nunca falla.
    pub async fn find_by_status(&self, status: &str) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vehicles WHERE current_status = $1 ORDER BY created_at DESC",
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    /// Búsqueda por fragmento de matrícula, case-insensitive.
    /// Siempre devuelve una lista, posiblemente vacía.
    pub async fn search_by_registration(&self, fragment: &str) -> Result<Vec<Vehicle>, AppError> {
        let pattern = format!("%{}%", fragment);

        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vehicles WHERE registration_number ILIKE $1 ORDER BY created_at DESC",
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    pub async fn registration_exists(&self, registration_number: &str) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM vehicles WHERE registration_number = $1)",
        )
        .bind(registration_number)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn update(
        &self,
        id: Uuid,
        registration_number: Option<String>,
        vehicle_type: Option<String>,
        hospital_name: Option<String>,
        current_status: Option<String>,
    ) -> Result<Vehicle, AppError> {
        // Obtener vehículo actual para completar los campos no enviados
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET registration_number = $2, vehicle_type = $3, hospital_name = $4, current_status = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(registration_number.unwrap_or(current.registration_number))
        .bind(vehicle_type.unwrap_or(current.vehicle_type))
        .bind(hospital_name.or(current.hospital_name))
        .bind(current_status.unwrap_or(current.current_status))
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Vehicle not found".to_string()));
        }

        Ok(())
    }
}
