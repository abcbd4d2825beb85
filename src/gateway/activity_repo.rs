// src/gateway/activity_repo.rs

use serde_json::json;
use uuid::Uuid;

use crate::common::error::AppError;
use crate::gateway::client::{ListQuery, StoreClient};
use crate::models::activity::ActivityEvent;

const TABLE: &str = "activity_events";

// O histórico é append-only: este repositório só insere e lista,
// de propósito não existem update nem delete aqui.
#[derive(Clone)]
pub struct ActivityRepository {
    client: StoreClient,
}

impl ActivityRepository {
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }

    pub async fn insert(
        &self,
        lead_id: Uuid,
        event_type: &str,
        description: &str,
    ) -> Result<ActivityEvent, AppError> {
        self.client
            .insert(
                TABLE,
                json!({
                    "lead_id": lead_id,
                    "event_type": event_type,
                    "description": description,
                }),
            )
            .await
    }

    pub async fn list_for_lead(&self, lead_id: Uuid) -> Result<Vec<ActivityEvent>, AppError> {
        let page = self
            .client
            .select(
                TABLE,
                ListQuery::new()
                    .eq("lead_id", lead_id)
                    .order_by("created_at", false),
            )
            .await?;
        Ok(page.rows)
    }
}
