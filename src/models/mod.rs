//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod officer;
pub mod repair_request;
pub mod status_update;
pub mod vehicle;
