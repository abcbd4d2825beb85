// src/gateway/task_repo.rs

use serde_json::Value;
use uuid::Uuid;

use crate::common::error::AppError;
use crate::gateway::client::{ListQuery, Page, StoreClient};
use crate::models::task::AgendaTask;

const TABLE: &str = "tasks";

#[derive(Clone)]
pub struct TaskRepository {
    client: StoreClient,
}

impl TaskRepository {
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }

    /// Página da agenda com contagem total, filtrável por conclusão.
    /// A faixa é inclusiva e 0-based, como o store espera.
    pub async fn list_page(
        &self,
        from: usize,
        to: usize,
        completed: Option<bool>,
    ) -> Result<Page<AgendaTask>, AppError> {
        let mut query = ListQuery::new()
            .order_by("due_at", true)
            .range(from, to)
            .with_count();
        if let Some(completed) = completed {
            query = query.eq("completed", completed);
        }
        self.client.select(TABLE, query).await
    }

    pub async fn get(&self, id: Uuid) -> Result<AgendaTask, AppError> {
        self.client.get_by_id(TABLE, id).await
    }

    pub async fn create(&self, row: Value) -> Result<AgendaTask, AppError> {
        self.client.insert(TABLE, row).await
    }

    /// Um único update com o novo booleano de conclusão.
    pub async fn set_completed(&self, id: Uuid, completed: bool) -> Result<AgendaTask, AppError> {
        self.client
            .update(TABLE, id, serde_json::json!({ "completed": completed }))
            .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.client.delete(TABLE, id).await
    }
}
