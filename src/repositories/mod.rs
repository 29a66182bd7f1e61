//! Repositorios de acceso a datos
//!
//! Cada repositorio posee un handle al pool de PostgreSQL. Las escrituras
//! multi-paso del workflow van dentro de una transacción con rollback
//! garantizado.

pub mod officer_repository;
pub mod repair_repository;
pub mod vehicle_repository;
