// src/models/activity.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Entrada do histórico de um lead. Append-only do ponto de vista desta
// aplicação: nunca editamos nem apagamos um evento.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityEvent {
    pub id: Uuid,
    pub lead_id: Uuid,
    // Categoria livre (ex: "Documentación")
    pub event_type: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}
