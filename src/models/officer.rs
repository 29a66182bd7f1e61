//! Modelo de Officer
//!
//! Este módulo contiene el struct Officer (usuarios del sistema) y el rol
//! que gobierna los permisos del workflow. Mapea a la tabla officers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Rol del oficial dentro del workflow de reparaciones.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OfficerRole {
    Engineer,
    SubjectOfficer,
    Rdhs,
    Admin,
}

impl OfficerRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            OfficerRole::Engineer => "engineer",
            OfficerRole::SubjectOfficer => "subject_officer",
            OfficerRole::Rdhs => "rdhs",
            OfficerRole::Admin => "admin",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "engineer" => Some(OfficerRole::Engineer),
            "subject_officer" => Some(OfficerRole::SubjectOfficer),
            "rdhs" => Some(OfficerRole::Rdhs),
            "admin" => Some(OfficerRole::Admin),
            _ => None,
        }
    }
}

/// Officer completo - solo se materializa en el login, es el único punto
/// donde el hash de la contraseña sale de la base de datos.
#[derive(Debug, Clone, FromRow)]
pub struct Officer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Proyección pública del oficial (sin hash) para respuestas de la API.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OfficerPublic {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<Officer> for OfficerPublic {
    fn from(officer: Officer) -> Self {
        Self {
            id: officer.id,
            name: officer.name,
            email: officer.email,
            role: officer.role,
            created_at: officer.created_at,
        }
    }
}
