//! Controllers de la aplicación
//!
//! Validación de entrada, orquestación de repositorios y mapeo a DTOs.
//! El motor de workflow de reparaciones vive en repair_controller.

pub mod auth_controller;
pub mod officer_controller;
pub mod repair_controller;
pub mod vehicle_controller;
