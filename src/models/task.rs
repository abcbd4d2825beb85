// src/models/task.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    Call,
    Visit,
    Email,
    Meeting,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

// Espelho da tabela remota `tasks` (a agenda).
// O vínculo com um lead é opcional: a tarefa pode citar só um nome
// de contato avulso.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgendaTask {
    pub id: Uuid,
    pub title: String,
    pub contact_name: Option<String>,
    pub lead_id: Option<Uuid>,
    pub due_at: DateTime<Utc>,
    pub task_type: TaskType,
    pub priority: TaskPriority,
    pub completed: bool,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
}
