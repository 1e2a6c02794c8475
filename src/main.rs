use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info, warn};

use junkyard_inventory::config::EnvironmentConfig;
use junkyard_inventory::database::seed::CatalogSeed;
use junkyard_inventory::database::DatabaseConnection;
use junkyard_inventory::repositories::{MemoryStore, PgStore};
use junkyard_inventory::{create_app_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();
    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🚗 Junkyard Inventory API");
    info!("=========================");

    let state = match &config.database {
        Some(database) => {
            let connection = match DatabaseConnection::connect(database).await {
                Ok(conn) => conn,
                Err(e) => {
                    error!("❌ Error conectando a la base de datos: {:#}", e);
                    return Err(e);
                }
            };
            connection.ensure_schema().await?;
            AppState::with_postgres(PgStore::new(connection.pool().clone()), config.clone())
        }
        None => {
            warn!("⚠️ DATABASE_URL no definida, usando el store en memoria");
            let store = MemoryStore::new();
            match CatalogSeed::from_files(&config.seed_vehicles_csv, &config.seed_parts_csv) {
                Ok(seed) => {
                    store.seed(&seed).await;
                    info!(
                        "📦 Catálogo en memoria: {} vehículos, {} piezas",
                        seed.vehicles.len(),
                        seed.parts.len()
                    );
                }
                Err(e) => warn!("⚠️ Catálogo vacío, no se pudo cargar el CSV: {:#}", e),
            }
            AppState::in_memory(store, config.clone())
        }
    };

    let app = create_app_router(state);
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("🌐 Servidor iniciando en {}", config.server_url());
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health");
    info!("   GET  /years | /makes | /models | /trims");
    info!("   GET  /part-categories | /parts");
    info!("   GET  /inventory | /inventory/stats");
    info!("   POST /vehicle");
    info!("   GET|PUT|DELETE /vehicle/:id");
    info!("   POST /register | /login");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo escuchar Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo escuchar SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
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
