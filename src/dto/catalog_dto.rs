use serde::{Deserialize, Serialize};

use crate::models::catalog::{Part, PartCategory};

// Filtros de la selección en cascada (año → marca → modelo → versión)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogFilterQuery {
    pub year: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearOption {
    pub year: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeOption {
    pub make: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelOption {
    pub model: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrimOption {
    pub trim: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct YearsResponse {
    pub years: Vec<YearOption>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MakesResponse {
    pub makes: Vec<MakeOption>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ModelsResponse {
    pub models: Vec<ModelOption>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TrimsResponse {
    pub trims: Vec<TrimOption>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartCategoriesResponse {
    pub part_categories: Vec<PartCategory>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PartsResponse {
    pub parts: Vec<Part>,
}
