// src/services/agenda_service.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::common::error::AppError;
use crate::gateway::task_repo::TaskRepository;
use crate::models::task::{AgendaTask, TaskPriority, TaskType};

/// Tamanho fixo da página da agenda.
pub const PAGE_SIZE: usize = 8;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTaskPayload {
    #[validate(length(min = 1, message = "required"))]
    pub title: String,

    pub contact_name: Option<String>,
    pub lead_id: Option<Uuid>,
    pub due_at: DateTime<Utc>,
    pub task_type: TaskType,
    pub priority: TaskPriority,
    pub owner_id: Uuid,
}

// Página com a contagem total que o store devolve junto.
#[derive(Debug, Clone)]
pub struct TaskPage {
    pub tasks: Vec<AgendaTask>,
    pub total: u64,
}

#[derive(Clone)]
pub struct AgendaService {
    repo: TaskRepository,
}

impl AgendaService {
    pub fn new(repo: TaskRepository) -> Self {
        Self { repo }
    }

    /// Página `page` (0-based) da agenda, filtrável por conclusão.
    pub async fn list_page(
        &self,
        page: usize,
        completed: Option<bool>,
    ) -> Result<TaskPage, AppError> {
        let from = page * PAGE_SIZE;
        let to = from + PAGE_SIZE - 1;
        let result = self.repo.list_page(from, to, completed).await?;
        Ok(TaskPage {
            tasks: result.rows,
            total: result.total.unwrap_or(0),
        })
    }

    pub async fn get(&self, id: Uuid) -> Result<AgendaTask, AppError> {
        self.repo.get(id).await
    }

    pub async fn create(&self, payload: CreateTaskPayload) -> Result<AgendaTask, AppError> {
        payload.validate()?;

        let mut row = serde_json::to_value(&payload)
            .map_err(|e| AppError::InternalServerError(e.into()))?;
        if let Some(obj) = row.as_object_mut() {
            obj.insert("completed".to_string(), json!(false));
        }
        self.repo.create(row).await
    }

    /// Exatamente um update remoto com o novo booleano.
    pub async fn set_completed(&self, id: Uuid, completed: bool) -> Result<AgendaTask, AppError> {
        self.repo.set_completed(id, completed).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.delete(id).await
    }
}
