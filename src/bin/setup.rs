//! Carga inicial del catálogo
//!
//! Uso: `junkyard-setup [vehicles.csv] [parts.csv]`
//!
//! Crea el schema si no existe y carga vehículos, categorías y piezas en
//! una sola transacción.

use anyhow::{anyhow, Result};
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing::info;

use junkyard_inventory::config::EnvironmentConfig;
use junkyard_inventory::database::seed::{seed_postgres, CatalogSeed};
use junkyard_inventory::database::DatabaseConnection;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let config = EnvironmentConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    let mut args = std::env::args().skip(1);
    let vehicles_csv = args.next().map(PathBuf::from).unwrap_or(config.seed_vehicles_csv);
    let parts_csv = args.next().map(PathBuf::from).unwrap_or(config.seed_parts_csv);

    let database = config
        .database
        .ok_or_else(|| anyhow!("DATABASE_URL must be set to run the setup"))?;

    info!("🛠️ Preparando base de datos...");
    let connection = DatabaseConnection::connect(&database).await?;
    connection.ensure_schema().await?;

    let seed = CatalogSeed::from_files(&vehicles_csv, &parts_csv)?;
    info!(
        "📄 Leídos {} vehículos, {} categorías y {} piezas",
        seed.vehicles.len(),
        seed.categories.len(),
        seed.parts.len()
    );

    seed_postgres(connection.pool(), &seed).await?;
    info!("✅ Catálogo cargado");
    Ok(())
}
