use sqlx::PgPool;

use crate::utils::errors::{db_error, AppError};

/// Almacenamiento sobre un pool de PostgreSQL
#[derive(Clone)]
pub struct PgStore {
    pub(crate) pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Código SQLSTATE del error, si viene de la base de datos
pub(crate) fn sql_state(error: &sqlx::Error) -> Option<String> {
    error
        .as_database_error()
        .and_then(|db| db.code())
        .map(|code| code.into_owned())
}

/// Traduce las violaciones de integridad al escribir piezas en errores de validación
pub(crate) fn part_write_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |error| match sql_state(&error).as_deref() {
        Some("23503") => AppError::BadRequest("one or more parts do not exist".to_string()),
        Some("23505") => AppError::BadRequest("a part can only be recorded once per vehicle".to_string()),
        _ => db_error(context)(error),
    }
}
