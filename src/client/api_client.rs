//! Cliente HTTP para la API del inventario
//!
//! Implementa `CatalogSource` sobre reqwest. Las respuestas de error se
//! convierten en `ClientError::Api` con el mensaje del servidor.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::client::catalog_source::CatalogSource;
use crate::client::error::{ClientError, ClientResult};
use crate::dto::catalog_dto::{
    MakesResponse, ModelsResponse, PartCategoriesResponse, PartsResponse, TrimsResponse,
    YearsResponse,
};
use crate::dto::inventory_dto::InventoryResponse;
use crate::dto::vehicle_dto::{
    CreateVehicleRequest, CreateVehicleResponse, MessageResponse, UpdateVehiclePartsRequest,
    VehicleDetailResponse,
};
use crate::models::added_vehicle::{InventoryStats, InventoryVehicle};
use crate::models::catalog::{Part, PartCategory};
use crate::utils::errors::ErrorResponse;

pub struct InventoryApiClient {
    client: Client,
    base_url: String,
}

impl InventoryApiClient {
    /// Crear cliente contra `base_url` (por ejemplo `http://localhost:3333`)
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let response = request.send().await?;
        let status = response.status();
        debug!("📡 {} {}", status, response.url());

        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let body = response.text().await?;
        let message = serde_json::from_str::<ErrorResponse>(&body)
            .map(|e| e.message)
            .unwrap_or_else(|_| format!("Error HTTP: {}", status));
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl CatalogSource for InventoryApiClient {
    async fn years(&self) -> ClientResult<Vec<i32>> {
        let response: YearsResponse = self.send(self.client.get(self.url("/years"))).await?;
        Ok(response.years.into_iter().map(|y| y.year).collect())
    }

    async fn makes(&self, year: i32) -> ClientResult<Vec<String>> {
        let request = self
            .client
            .get(self.url("/makes"))
            .query(&[("year", year.to_string())]);
        let response: MakesResponse = self.send(request).await?;
        Ok(response.makes.into_iter().map(|m| m.make).collect())
    }

    async fn models(&self, year: i32, make: &str) -> ClientResult<Vec<String>> {
        let request = self
            .client
            .get(self.url("/models"))
            .query(&[("year", year.to_string().as_str()), ("make", make)]);
        let response: ModelsResponse = self.send(request).await?;
        Ok(response.models.into_iter().map(|m| m.model).collect())
    }

    async fn trims(&self, year: i32, make: &str, model: &str) -> ClientResult<Vec<String>> {
        let request = self.client.get(self.url("/trims")).query(&[
            ("year", year.to_string().as_str()),
            ("make", make),
            ("model", model),
        ]);
        let response: TrimsResponse = self.send(request).await?;
        Ok(response.trims.into_iter().map(|t| t.trim).collect())
    }

    async fn part_categories(&self) -> ClientResult<Vec<PartCategory>> {
        let response: PartCategoriesResponse =
            self.send(self.client.get(self.url("/part-categories"))).await?;
        Ok(response.part_categories)
    }

    async fn parts(&self) -> ClientResult<Vec<Part>> {
        let response: PartsResponse = self.send(self.client.get(self.url("/parts"))).await?;
        Ok(response.parts)
    }

    async fn create_vehicle(&self, request: &CreateVehicleRequest) -> ClientResult<CreateVehicleResponse> {
        self.send(self.client.post(self.url("/vehicle")).json(request)).await
    }

    async fn get_vehicle(&self, id: i32) -> ClientResult<VehicleDetailResponse> {
        self.send(self.client.get(self.url(&format!("/vehicle/{}", id)))).await
    }

    async fn update_vehicle_parts(
        &self,
        id: i32,
        request: &UpdateVehiclePartsRequest,
    ) -> ClientResult<MessageResponse> {
        let url = self.url(&format!("/vehicle/{}", id));
        self.send(self.client.put(url).json(request)).await
    }

    async fn delete_vehicle(&self, id: i32) -> ClientResult<MessageResponse> {
        self.send(self.client.delete(self.url(&format!("/vehicle/{}", id)))).await
    }

    async fn inventory(&self) -> ClientResult<Vec<InventoryVehicle>> {
        let response: InventoryResponse = self.send(self.client.get(self.url("/inventory"))).await?;
        Ok(response.inventory)
    }

    async fn stats(&self) -> ClientResult<InventoryStats> {
        self.send(self.client.get(self.url("/inventory/stats"))).await
    }
}
