//! Carga de datos de referencia
//!
//! Lee el catálogo de vehículos y la matriz de piezas desde CSV y lo
//! inserta en una sola transacción.
//!
//! - vehicles.csv: cabecera `year,make,model,trim`; una versión vacía se
//!   guarda como `N/A`.
//! - parts.csv: cada columna es una categoría y cada celda no vacía es una
//!   pieza de esa categoría.

use anyhow::{anyhow, Context, Result};
use csv::ReaderBuilder;
use sqlx::PgPool;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

use crate::models::catalog::VehicleSpec;

const MISSING_TRIM: &str = "N/A";

/// Pieza a insertar con el nombre de su categoría
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedPart {
    pub name: String,
    pub category: String,
}

/// Datos de referencia del catálogo
#[derive(Debug, Clone, Default)]
pub struct CatalogSeed {
    pub vehicles: Vec<VehicleSpec>,
    pub categories: Vec<String>,
    pub parts: Vec<SeedPart>,
}

impl CatalogSeed {
    /// Leer ambos CSV desde disco
    pub fn from_files(vehicles_csv: &Path, parts_csv: &Path) -> Result<Self> {
        let vehicles = File::open(vehicles_csv)
            .with_context(|| format!("could not open {}", vehicles_csv.display()))?;
        let parts = File::open(parts_csv)
            .with_context(|| format!("could not open {}", parts_csv.display()))?;

        let vehicles = parse_vehicles(BufReader::new(vehicles))
            .with_context(|| format!("invalid vehicles file {}", vehicles_csv.display()))?;
        let (categories, parts) = parse_parts_matrix(BufReader::new(parts))
            .with_context(|| format!("invalid parts file {}", parts_csv.display()))?;

        Ok(Self {
            vehicles,
            categories,
            parts,
        })
    }
}

/// Leer el catálogo de vehículos
pub fn parse_vehicles<R: Read>(reader: R) -> Result<Vec<VehicleSpec>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let column: HashMap<String, usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| (h.to_lowercase(), i))
        .collect();
    let index_of = |name: &str| {
        column
            .get(name)
            .copied()
            .ok_or_else(|| anyhow!("missing '{}' column", name))
    };
    let (year_idx, make_idx, model_idx) = (index_of("year")?, index_of("make")?, index_of("model")?);
    let trim_idx = column.get("trim").copied();

    let mut vehicles = Vec::new();
    for (row_idx, record) in rdr.records().enumerate() {
        let row_num = row_idx + 2; // +2 por la cabecera y el índice base 1
        let record = record.with_context(|| format!("CSV parse error at row {}", row_num))?;
        let field = |idx: usize| record.get(idx).unwrap_or_default().to_string();

        let year = field(year_idx)
            .parse::<i32>()
            .with_context(|| format!("invalid year at row {}", row_num))?;
        let (make, model) = (field(make_idx), field(model_idx));
        if make.is_empty() || model.is_empty() {
            return Err(anyhow!("missing make or model at row {}", row_num));
        }
        let trim = trim_idx
            .map(field)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| MISSING_TRIM.to_string());

        vehicles.push(VehicleSpec {
            year,
            make,
            model,
            trim,
        });
    }

    Ok(vehicles)
}

/// Leer la matriz de piezas: categorías en la cabecera, piezas en las celdas
pub fn parse_parts_matrix<R: Read>(reader: R) -> Result<(Vec<String>, Vec<SeedPart>)> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let categories: Vec<String> = rdr
        .headers()?
        .iter()
        .map(str::to_string)
        .filter(|h| !h.is_empty())
        .collect();

    let mut parts = Vec::new();
    for (row_idx, record) in rdr.records().enumerate() {
        let record = record.with_context(|| format!("CSV parse error at row {}", row_idx + 2))?;
        for (category, cell) in categories.iter().zip(record.iter()) {
            if !cell.is_empty() {
                parts.push(SeedPart {
                    name: cell.to_string(),
                    category: category.clone(),
                });
            }
        }
    }

    Ok((categories, parts))
}

/// Insertar el catálogo en PostgreSQL en una sola transacción
pub async fn seed_postgres(pool: &PgPool, seed: &CatalogSeed) -> Result<()> {
    let mut tx = pool.begin().await?;

    if !seed.vehicles.is_empty() {
        info!("🚗 Insertando {} vehículos del catálogo...", seed.vehicles.len());
        let years: Vec<i32> = seed.vehicles.iter().map(|v| v.year).collect();
        let makes: Vec<String> = seed.vehicles.iter().map(|v| v.make.clone()).collect();
        let models: Vec<String> = seed.vehicles.iter().map(|v| v.model.clone()).collect();
        let trims: Vec<String> = seed.vehicles.iter().map(|v| v.trim.clone()).collect();

        sqlx::query(
            r#"
            INSERT INTO vehicles (year, make, model, "trim")
            SELECT * FROM UNNEST($1::int4[], $2::varchar[], $3::varchar[], $4::varchar[])
            "#,
        )
        .bind(years)
        .bind(makes)
        .bind(models)
        .bind(trims)
        .execute(&mut *tx)
        .await
        .context("inserting catalog vehicles")?;
    }

    let mut category_ids: HashMap<String, i32> = HashMap::new();
    for name in &seed.categories {
        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO parts_category (name) VALUES ($1) RETURNING id",
        )
        .bind(name)
        .fetch_one(&mut *tx)
        .await
        .with_context(|| format!("inserting part category '{}'", name))?;
        category_ids.insert(name.clone(), id);
    }
    info!("🗂️ Categorías insertadas: {}", category_ids.len());

    let (names, categories): (Vec<String>, Vec<i32>) = seed
        .parts
        .iter()
        .filter_map(|p| category_ids.get(&p.category).map(|id| (p.name.clone(), *id)))
        .unzip();

    if !names.is_empty() {
        sqlx::query(
            r#"
            INSERT INTO parts (name, category_id)
            SELECT * FROM UNNEST($1::varchar[], $2::int4[])
            "#,
        )
        .bind(&names)
        .bind(categories)
        .execute(&mut *tx)
        .await
        .context("inserting parts")?;
    }
    info!("🔩 Piezas insertadas: {}", names.len());

    tx.commit().await?;
    Ok(())
}
