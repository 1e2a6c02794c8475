use async_trait::async_trait;

use crate::models::catalog::{Part, PartCategory};
use crate::repositories::{CatalogRepository, PgStore};
use crate::utils::errors::{db_error, AppResult};

#[async_trait]
impl CatalogRepository for PgStore {
    async fn list_years(&self) -> AppResult<Vec<i32>> {
        let years = sqlx::query_scalar::<_, i32>("SELECT DISTINCT year FROM vehicles ORDER BY year")
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("listing years"))?;

        Ok(years)
    }

    async fn list_makes(&self, year: i32) -> AppResult<Vec<String>> {
        let makes = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT make FROM vehicles WHERE year = $1 ORDER BY make",
        )
        .bind(year)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("listing makes"))?;

        Ok(makes)
    }

    async fn list_models(&self, year: i32, make: &str) -> AppResult<Vec<String>> {
        let models = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT model FROM vehicles WHERE year = $1 AND make = $2 ORDER BY model",
        )
        .bind(year)
        .bind(make)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("listing models"))?;

        Ok(models)
    }

    async fn list_trims(&self, year: i32, make: &str, model: &str) -> AppResult<Vec<String>> {
        let trims = sqlx::query_scalar::<_, String>(
            r#"
            SELECT DISTINCT "trim" FROM vehicles
            WHERE year = $1 AND make = $2 AND model = $3
            ORDER BY "trim"
            "#,
        )
        .bind(year)
        .bind(make)
        .bind(model)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("listing trims"))?;

        Ok(trims)
    }

    async fn list_part_categories(&self) -> AppResult<Vec<PartCategory>> {
        let categories = sqlx::query_as::<_, PartCategory>(
            "SELECT id, name FROM parts_category ORDER BY name, id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("listing part categories"))?;

        Ok(categories)
    }

    async fn list_parts(&self) -> AppResult<Vec<Part>> {
        let parts = sqlx::query_as::<_, Part>(
            "SELECT id, name, category_id FROM parts ORDER BY name, id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("listing parts"))?;

        Ok(parts)
    }
}
