//! Schema relacional
//!
//! Sentencias idempotentes; se aplican al arrancar el servidor y desde
//! `junkyard-setup`.

use sqlx::PgPool;
use tracing::debug;

pub const SCHEMA_STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id SERIAL PRIMARY KEY,
        username VARCHAR(255) NOT NULL UNIQUE,
        password VARCHAR(255) NOT NULL,
        created_date TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS vehicles (
        id SERIAL PRIMARY KEY,
        year INT NOT NULL,
        make VARCHAR(255) NOT NULL,
        model VARCHAR(255) NOT NULL,
        "trim" VARCHAR(255) NOT NULL
    )
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS vehicles_lookup_idx
        ON vehicles (year, make, model, "trim")
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS parts_category (
        id SERIAL PRIMARY KEY,
        name VARCHAR(255) NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS parts (
        id SERIAL PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        category_id INT NOT NULL REFERENCES parts_category(id)
            ON DELETE CASCADE ON UPDATE CASCADE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS added_vehicles (
        id SERIAL PRIMARY KEY,
        vehicle_id INT NOT NULL REFERENCES vehicles(id)
            ON DELETE CASCADE ON UPDATE CASCADE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS vehicle_parts (
        id SERIAL PRIMARY KEY,
        vehicle_id INT NOT NULL REFERENCES added_vehicles(id)
            ON DELETE CASCADE ON UPDATE CASCADE,
        part_id INT NOT NULL REFERENCES parts(id)
            ON DELETE CASCADE ON UPDATE CASCADE,
        available BOOLEAN NOT NULL,
        UNIQUE (vehicle_id, part_id)
    )
    "#,
];

/// Ejecutar las sentencias del schema en orden
pub async fn apply_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA_STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }
    debug!("Schema aplicado ({} sentencias)", SCHEMA_STATEMENTS.len());
    Ok(())
}
