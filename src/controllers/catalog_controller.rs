use tracing::debug;

use crate::dto::catalog_dto::{
    CatalogFilterQuery, MakeOption, MakesResponse, ModelOption, ModelsResponse,
    PartCategoriesResponse, PartsResponse, TrimOption, TrimsResponse, YearOption, YearsResponse,
};
use crate::repositories::SharedStore;
use crate::utils::errors::AppError;
use crate::utils::validation::{required_param, required_year};

/// Consultas de la selección en cascada y del catálogo de piezas
pub struct CatalogController {
    store: SharedStore,
}

impl CatalogController {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn years(&self) -> Result<YearsResponse, AppError> {
        let years = self.store.list_years().await?;
        Ok(YearsResponse {
            years: years.into_iter().map(|year| YearOption { year }).collect(),
        })
    }

    pub async fn makes(&self, filter: &CatalogFilterQuery) -> Result<MakesResponse, AppError> {
        let year = required_year(&filter.year)?;

        let makes = self.store.list_makes(year).await?;
        debug!("🔎 {} marcas para {}", makes.len(), year);
        Ok(MakesResponse {
            makes: makes.into_iter().map(|make| MakeOption { make }).collect(),
        })
    }

    pub async fn models(&self, filter: &CatalogFilterQuery) -> Result<ModelsResponse, AppError> {
        let year = required_year(&filter.year)?;
        let make = required_param(&filter.make, "make")?;

        let models = self.store.list_models(year, make).await?;
        Ok(ModelsResponse {
            models: models.into_iter().map(|model| ModelOption { model }).collect(),
        })
    }

    pub async fn trims(&self, filter: &CatalogFilterQuery) -> Result<TrimsResponse, AppError> {
        let year = required_year(&filter.year)?;
        let make = required_param(&filter.make, "make")?;
        let model = required_param(&filter.model, "model")?;

        let trims = self.store.list_trims(year, make, model).await?;
        Ok(TrimsResponse {
            trims: trims.into_iter().map(|trim| TrimOption { trim }).collect(),
        })
    }

    pub async fn part_categories(&self) -> Result<PartCategoriesResponse, AppError> {
        Ok(PartCategoriesResponse {
            part_categories: self.store.list_part_categories().await?,
        })
    }

    pub async fn parts(&self) -> Result<PartsResponse, AppError> {
        Ok(PartsResponse {
            parts: self.store.list_parts().await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::seed::{CatalogSeed, SeedPart};
    use crate::models::catalog::VehicleSpec;
    use crate::repositories::MemoryStore;
    use std::sync::Arc;

    fn spec(year: i32, make: &str, model: &str, trim: &str) -> VehicleSpec {
        VehicleSpec {
            year,
            make: make.into(),
            model: model.into(),
            trim: trim.into(),
        }
    }

    async fn controller() -> CatalogController {
        let store = MemoryStore::new();
        store
            .seed(&CatalogSeed {
                vehicles: vec![
                    spec(2020, "Honda", "Civic", "EX"),
                    spec(2020, "Honda", "Civic", "LX"),
                    spec(2020, "Honda", "Accord", "Sport"),
                    spec(2019, "Toyota", "Corolla", "LE"),
                    spec(2020, "Toyota", "Camry", "SE"),
                ],
                categories: vec!["Engine".into(), "Body".into()],
                parts: vec![
                    SeedPart { name: "Radiator".into(), category: "Engine".into() },
                    SeedPart { name: "Hood".into(), category: "Body".into() },
                ],
            })
            .await;
        CatalogController::new(Arc::new(store))
    }

    fn filter(year: Option<&str>, make: Option<&str>, model: Option<&str>) -> CatalogFilterQuery {
        CatalogFilterQuery {
            year: year.map(String::from),
            make: make.map(String::from),
            model: model.map(String::from),
        }
    }

    #[tokio::test]
    async fn test_years_are_distinct_and_ascending() {
        let years = controller().await.years().await.unwrap().years;
        assert_eq!(years, vec![YearOption { year: 2019 }, YearOption { year: 2020 }]);
    }

    #[tokio::test]
    async fn test_cascade_includes_every_downstream_value() {
        let controller = controller().await;

        let makes = controller.makes(&filter(Some("2020"), None, None)).await.unwrap().makes;
        assert_eq!(
            makes.iter().map(|m| m.make.as_str()).collect::<Vec<_>>(),
            vec!["Honda", "Toyota"]
        );

        let models = controller
            .models(&filter(Some("2020"), Some("Honda"), None))
            .await
            .unwrap()
            .models;
        assert_eq!(
            models.iter().map(|m| m.model.as_str()).collect::<Vec<_>>(),
            vec!["Accord", "Civic"]
        );

        let trims = controller
            .trims(&filter(Some("2020"), Some("Honda"), Some("Civic")))
            .await
            .unwrap()
            .trims;
        assert_eq!(
            trims.iter().map(|t| t.trim.as_str()).collect::<Vec<_>>(),
            vec!["EX", "LX"]
        );
    }

    #[tokio::test]
    async fn test_missing_filters_are_validation_errors() {
        let controller = controller().await;

        assert!(matches!(
            controller.makes(&filter(None, None, None)).await,
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            controller.makes(&filter(Some("abc"), None, None)).await,
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            controller.models(&filter(Some("2020"), None, None)).await,
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            controller.trims(&filter(Some("2020"), Some("Honda"), Some(""))).await,
            Err(AppError::BadRequest(_))
        ));
    }

    #[tokio::test]
    async fn test_parts_and_categories_sorted_by_name() {
        let controller = controller().await;

        let categories = controller.part_categories().await.unwrap().part_categories;
        assert_eq!(categories[0].name, "Body");
        assert_eq!(categories[1].name, "Engine");

        let parts = controller.parts().await.unwrap().parts;
        assert_eq!(parts[0].name, "Hood");
        assert_eq!(parts[1].name, "Radiator");
    }
}
