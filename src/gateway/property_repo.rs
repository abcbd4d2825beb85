// src/gateway/property_repo.rs

use serde_json::Value;
use uuid::Uuid;

use crate::common::error::AppError;
use crate::gateway::client::{ListQuery, StoreClient};
use crate::models::property::Property;

const TABLE: &str = "properties";

#[derive(Clone)]
pub struct PropertyRepository {
    client: StoreClient,
}

impl PropertyRepository {
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Property>, AppError> {
        let page = self
            .client
            .select(TABLE, ListQuery::new().order_by("created_at", false))
            .await?;
        Ok(page.rows)
    }

    pub async fn get(&self, id: Uuid) -> Result<Property, AppError> {
        self.client.get_by_id(TABLE, id).await
    }

    pub async fn create(&self, row: Value) -> Result<Property, AppError> {
        self.client.insert(TABLE, row).await
    }

    pub async fn update(&self, id: Uuid, patch: Value) -> Result<Property, AppError> {
        self.client.update(TABLE, id, patch).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.client.delete(TABLE, id).await
    }
}
