//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.
//! Los valores ausentes toman un valor por defecto; los mal formados son
//! errores de arranque.

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::database::DatabaseConfig;

const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub cors_origins: Vec<String>,
    pub log_level: tracing::Level,
    pub bcrypt_cost: u32,
    pub seed_vehicles_csv: PathBuf,
    pub seed_parts_csv: PathBuf,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3333,
            database: None,
            cors_origins: Vec::new(),
            log_level: tracing::Level::INFO,
            bcrypt_cost: 10,
            seed_vehicles_csv: PathBuf::from("data/vehicles.csv"),
            seed_parts_csv: PathBuf::from("data/parts.csv"),
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración desde el entorno
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parse_var("PORT", defaults.port)?,
            database: DatabaseConfig::from_env()?,
            cors_origins: env::var("CORS_ORIGINS")
                .map(|origins| parse_origins(&origins))
                .unwrap_or_default(),
            log_level: parse_var("LOG_LEVEL", defaults.log_level)?,
            bcrypt_cost: parse_bcrypt_cost("BCRYPT_COST", defaults.bcrypt_cost)?,
            seed_vehicles_csv: env::var("SEED_VEHICLES_CSV")
                .map(PathBuf::from)
                .unwrap_or(defaults.seed_vehicles_csv),
            seed_parts_csv: env::var("SEED_PARTS_CSV")
                .map(PathBuf::from)
                .unwrap_or(defaults.seed_parts_csv),
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Leer una variable numérica (o parseable) con valor por defecto
pub fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{} has an invalid value: '{}'", name, raw)),
        _ => Ok(default),
    }
}

/// Coste de bcrypt: fuera de 4..=31 cada hash fallaría en tiempo de ejecución
fn parse_bcrypt_cost(name: &str, default: u32) -> Result<u32> {
    let cost = parse_var(name, default)?;
    if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&cost) {
        bail!(
            "{} must be between {} and {}, got {}",
            name,
            MIN_BCRYPT_COST,
            MAX_BCRYPT_COST,
            cost
        );
    }
    Ok(cost)
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
