//! DTOs de autenticación y perfiles de oficiales

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::officer::OfficerPublic;

/// Request de login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Response de login exitoso
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub user: OfficerPublic,
    pub token: String,
}

/// Request para registrar un oficial (acción de admin)
#[derive(Debug, Deserialize)]
pub struct RegisterOfficerRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

/// Query del endpoint de perfil
#[derive(Debug, Deserialize)]
pub struct ProfileQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<Uuid>,
}

/// Estadísticas de perfil según el rol del oficial. El serializado es
/// plano (untagged); un admin recibe un objeto vacío.
#[derive(Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProfileStats {
    Engineer {
        total_requests: i64,
        pending_requests: i64,
        approved_requests: i64,
    },
    SubjectOfficer {
        reviewed_requests: i64,
        forwarded_requests: i64,
    },
    Rdhs {
        total_decisions: i64,
        approved_requests: i64,
        rejected_requests: i64,
    },
    None {},
}

/// Response de perfil: `{ success, user, stats }`
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub success: bool,
    pub user: OfficerPublic,
    pub stats: ProfileStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engineer_stats_serialize_flat() {
        let stats = ProfileStats::Engineer {
            total_requests: 5,
            pending_requests: 2,
            approved_requests: 3,
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["total_requests"], 5);
        assert!(json.get("Engineer").is_none());
    }

    #[test]
    fn test_admin_stats_serialize_empty_object() {
        let json = serde_json::to_value(&ProfileStats::None {}).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }
}
