use anyhow::Result;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use dotenvy::dotenv;
use fleet_repair::config::environment::EnvironmentConfig;
use fleet_repair::database::DatabaseConnection;
use fleet_repair::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use fleet_repair::routes::create_app_router;
use fleet_repair::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚑 Hospital Fleet Repair Tracker - API");
    info!("======================================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    db_connection.run_migrations().await?;

    let pool = db_connection.pool().clone();

    // CORS: permisivo en desarrollo, orígenes explícitos en producción
    let cors = if config.is_development() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(config.cors_origins.clone())
    };

    let app_state = AppState::new(pool, config.clone());

    let app = create_app_router().layer(cors).with_state(app_state);

    let addr: SocketAddr = config.server_addr().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("🔑 Auth:");
    info!("   POST /api/auth/login - Login de oficial");
    info!("   POST /api/auth/register - Registrar oficial (admin)");
    info!("   POST /api/auth/logout - Logout");
    info!("   GET  /api/auth/profile - Perfil con estadísticas por rol");
    info!("   GET  /api/auth/officers - Listar oficiales");
    info!("🚗 Vehicles:");
    info!("   GET  /api/vehicles - Listar vehículos");
    info!("   GET  /api/vehicles/:id - Obtener vehículo");
    info!("   GET  /api/vehicles/search/:fragment - Buscar por matrícula");
    info!("   GET  /api/vehicles/status/:status - Listar por estado");
    info!("   POST /api/vehicles - Registrar vehículo");
    info!("   PUT  /api/vehicles/:id - Actualizar vehículo");
    info!("   DELETE /api/vehicles/:id - Eliminar vehículo");
    info!("🔧 Repairs:");
    info!("   GET  /api/repairs - Listar solicitudes");
    info!("   GET  /api/repairs/:id - Detalle con historial");
    info!("   GET  /api/repairs/status/:status - Listar por estado");
    info!("   GET  /api/repairs/engineer/:id - Solicitudes de un ingeniero");
    info!("   GET  /api/repairs/stats/summary - Resumen estadístico");
    info!("   POST /api/repairs - Crear solicitud");
    info!("   PUT  /api/repairs/:id/status - Transicionar estado");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
