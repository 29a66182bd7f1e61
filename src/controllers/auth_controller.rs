//! Controller de autenticación
//!
//! Login con verificación bcrypt y emisión de JWT, y registro de
//! oficiales (acción de admin) con hash de contraseña en reposo.

use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;
use tracing::{info, warn};

use crate::dto::auth_dto::{LoginRequest, LoginResponse, RegisterOfficerRequest};
use crate::dto::vehicle_dto::ApiResponse;
use crate::models::officer::{OfficerPublic, OfficerRole};
use crate::repositories::officer_repository::OfficerRepository;
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtConfig};
use crate::utils::validation::validate_email;

pub struct AuthController {
    repository: OfficerRepository,
}

impl AuthController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: OfficerRepository::new(pool),
        }
    }

    pub async fn login(
        &self,
        request: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        let (email, password) = validate_login(request)?;

        // Mismo mensaje para email desconocido y contraseña incorrecta
        let invalid = || AppError::Unauthorized("Invalid email or password".to_string());

        let officer = self
            .repository
            .find_by_email(&email)
            .await?
            .ok_or_else(invalid)?;

        if !verify(&password, &officer.password_hash)? {
            warn!("🔒 Login fallido para {}", email);
            return Err(invalid());
        }

        let token = generate_token(officer.id, &officer.role, jwt_config)?;

        info!("🔑 Login de {} ({})", officer.email, officer.role);

        Ok(LoginResponse {
            success: true,
            message: "Login successful".to_string(),
            user: officer.into(),
            token,
        })
    }

    pub async fn register(
        &self,
        request: RegisterOfficerRequest,
    ) -> Result<ApiResponse<OfficerPublic>, AppError> {
        let (name, email, password, role) = validate_register(request)?;

        if self.repository.email_exists(&email).await? {
            return Err(AppError::Duplicate("Officer email already exists".to_string()));
        }

        let password_hash = hash(&password, DEFAULT_COST)?;

        let officer = self
            .repository
            .create(name, email, password_hash, role.as_str().to_string())
            .await?;

        info!("👤 Oficial {} registrado con rol {}", officer.email, officer.role);

        Ok(ApiResponse::success_with_message(
            officer,
            "Officer registered successfully".to_string(),
        ))
    }
}

fn validate_login(request: LoginRequest) -> Result<(String, String), AppError> {
    let missing = || AppError::Validation("Email and password are required".to_string());

    let email = request.email.filter(|e| !e.trim().is_empty()).ok_or_else(missing)?;
    let password = request.password.filter(|p| !p.is_empty()).ok_or_else(missing)?;

    Ok((email, password))
}

fn validate_register(
    request: RegisterOfficerRequest,
) -> Result<(String, String, String, OfficerRole), AppError> {
    let missing =
        || AppError::Validation("Name, email, password, and role are required".to_string());

    let name = request.name.filter(|n| !n.trim().is_empty()).ok_or_else(missing)?;
    let email = request.email.filter(|e| !e.trim().is_empty()).ok_or_else(missing)?;
    let password = request.password.filter(|p| !p.is_empty()).ok_or_else(missing)?;
    let role_raw = request.role.ok_or_else(missing)?;

    validate_email(&email)
        .map_err(|_| AppError::Validation("Invalid email address".to_string()))?;

    let role = OfficerRole::parse(&role_raw)
        .ok_or_else(|| AppError::Validation("Invalid role value".to_string()))?;

    Ok((name, email, password, role))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_login_requires_both_fields() {
        let request = LoginRequest {
            email: Some("engineer@hospital.com".to_string()),
            password: None,
        };
        match validate_login(request) {
            Err(AppError::Validation(msg)) => {
                assert_eq!(msg, "Email and password are required")
            }
            other => panic!("expected validation error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_validate_register_rejects_unknown_role() {
        let request = RegisterOfficerRequest {
            name: Some("Engineer John".to_string()),
            email: Some("engineer@hospital.com".to_string()),
            password: Some("password123".to_string()),
            role: Some("driver".to_string()),
        };
        match validate_register(request) {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "Invalid role value"),
            other => panic!("expected validation error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_validate_register_accepts_valid_request() {
        let request = RegisterOfficerRequest {
            name: Some("RDHS Manager".to_string()),
            email: Some("rdhs@health.gov".to_string()),
            password: Some("password123".to_string()),
            role: Some("rdhs".to_string()),
        };
        let (name, email, _, role) = validate_register(request).unwrap();
        assert_eq!(name, "RDHS Manager");
        assert_eq!(email, "rdhs@health.gov");
        assert_eq!(role, OfficerRole::Rdhs);
    }
}
