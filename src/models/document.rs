// src/models/document.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Metadados de um documento enviado para o storage. O binário em si
// fica no bucket; aqui só guardamos o nome e a URL pública.
// A vida do documento é independente de qualquer lead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    pub id: Uuid,
    pub name: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}
