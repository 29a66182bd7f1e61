//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos de
//! entrada antes de tocar la base de datos.

use validator::ValidationError;

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de email
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if !value.contains('@') || !value.contains('.') {
        let mut error = ValidationError::new("email");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de matrícula de vehículo
pub fn validate_registration_number(value: &str) -> Result<(), ValidationError> {
    // Formato básico: CAB-1234, WP-AB-9012 o similar
    let clean = value.replace([' ', '-', '_'], "");
    if clean.len() < 4 || clean.len() > 12 || !clean.chars().all(|c| c.is_ascii_alphanumeric()) {
        let mut error = ValidationError::new("registration_number");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("Engine overheating").is_ok());
        assert!(validate_not_empty("").is_err());
        assert!(validate_not_empty("   ").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("engineer@hospital.com").is_ok());
        assert!(validate_email("invalid-email").is_err());
        assert!(validate_email("test@").is_err());
    }

    #[test]
    fn test_validate_registration_number() {
        assert!(validate_registration_number("CAB-1234").is_ok());
        assert!(validate_registration_number("WP-AB-9012").is_ok());
        assert!(validate_registration_number("A").is_err());
        assert!(validate_registration_number("ABCDEFGHIJKLMNOP").is_err());
        assert!(validate_registration_number("CAB 12!4").is_err());
    }
}
