//! Configuración de conexión a PostgreSQL
//!
//! Este módulo abre el pool y asegura que el schema exista.

use anyhow::{Context, Result};
use sqlx::PgPool;
use tracing::info;

use crate::config::database::DatabaseConfig;
use crate::database::schema;

/// Conexión a la base de datos respaldada por un pool acotado
pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    /// Crear el pool de conexiones
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        info!(
            "🔗 Conectando a PostgreSQL: {} (max {} conexiones)",
            mask_database_url(&config.url),
            config.max_connections
        );

        let pool = config
            .create_pool()
            .await
            .with_context(|| format!("could not connect to {}", mask_database_url(&config.url)))?;

        info!("✅ PostgreSQL conectado");
        Ok(Self { pool })
    }

    /// Crear las tablas que falten
    pub async fn ensure_schema(&self) -> Result<()> {
        schema::apply_schema(&self.pool)
            .await
            .context("could not apply database schema")
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Función helper para enmascarar la URL de la base de datos en logs
fn mask_database_url(url: &str) -> String {
    // La contraseña puede contener '@': el separador del host es el último
    let without_query = url.split('?').next().unwrap_or(url);
    let Some(at_pos) = without_query.rfind('@') else {
        return url.to_string();
    };
    let scheme_end = url.find("://").map(|p| p + 3).unwrap_or(0);
    if scheme_end > at_pos {
        return url.to_string();
    }
    format!("{}***:***@{}", &url[..scheme_end], &url[at_pos + 1..])
}
