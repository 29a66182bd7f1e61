//! Sistema de seguimiento de reparaciones de la flota hospitalaria
//!
//! Backend HTTP/JSON: los ingenieros registran solicitudes de reparación
//! de vehículos, los subject officers las reenvían al RDHS, el RDHS las
//! aprueba o rechaza y cada transición queda en un log de auditoría
//! append-only mientras el estado del vehículo sigue al workflow.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;
