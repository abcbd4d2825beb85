// src/gateway/document_repo.rs

use serde_json::json;
use uuid::Uuid;

use crate::common::error::AppError;
use crate::gateway::client::{ListQuery, StoreClient};
use crate::models::document::Document;

const TABLE: &str = "documents";

#[derive(Clone)]
pub struct DocumentRepository {
    client: StoreClient,
}

impl DocumentRepository {
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Document>, AppError> {
        let page = self
            .client
            .select(TABLE, ListQuery::new().order_by("created_at", false))
            .await?;
        Ok(page.rows)
    }

    /// Registra os metadados de um arquivo já presente no storage.
    pub async fn create(&self, name: &str, url: &str) -> Result<Document, AppError> {
        self.client
            .insert(TABLE, json!({ "name": name, "url": url }))
            .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.client.delete(TABLE, id).await
    }
}
