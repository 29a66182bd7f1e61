//! Shared application state
//!
//! Estado compartido de la aplicación que se pasa a través del router de
//! Axum: el pool de PostgreSQL y la configuración del entorno. Se
//! construye una vez por proceso; los tests construyen el suyo propio.

use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self { pool, config }
    }
}
