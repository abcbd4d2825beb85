// src/gateway/lead_repo.rs

use serde_json::Value;
use uuid::Uuid;

use crate::common::error::AppError;
use crate::gateway::client::{ListQuery, StoreClient};
use crate::models::lead::{Lead, LeadStage};

const TABLE: &str = "leads";

#[derive(Clone)]
pub struct LeadRepository {
    client: StoreClient,
}

impl LeadRepository {
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }

    /// Lista os leads, opcionalmente filtrando por etapa, mais recentes primeiro.
    pub async fn list(&self, stage: Option<LeadStage>) -> Result<Vec<Lead>, AppError> {
        let mut query = ListQuery::new().order_by("created_at", false);
        if let Some(stage) = stage {
            let label = serde_json::to_value(stage)
                .map_err(|e| AppError::InternalServerError(e.into()))?;
            query = query.eq("stage", label.as_str().unwrap_or_default());
        }
        let page = self.client.select(TABLE, query).await?;
        Ok(page.rows)
    }

    pub async fn get(&self, id: Uuid) -> Result<Lead, AppError> {
        self.client.get_by_id(TABLE, id).await
    }

    pub async fn create(&self, row: Value) -> Result<Lead, AppError> {
        self.client.insert(TABLE, row).await
    }

    /// Aplica todos os campos editados numa única chamada de update.
    pub async fn update(&self, id: Uuid, patch: Value) -> Result<Lead, AppError> {
        self.client.update(TABLE, id, patch).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.client.delete(TABLE, id).await
    }
}
