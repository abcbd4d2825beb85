// src/models/lead.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// --- ENUMS ---

// Etapas fixas do pipeline de vendas. Os rótulos serializados são os
// mesmos gravados na coluna `stage` do store remoto.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LeadStage {
    Prospecto,
    Visitando,
    #[serde(rename = "Interés")]
    Interes,
    Cierre,
}

impl LeadStage {
    // Ordem fixa das colunas do kanban.
    pub const ALL: [LeadStage; 4] = [
        LeadStage::Prospecto,
        LeadStage::Visitando,
        LeadStage::Interes,
        LeadStage::Cierre,
    ];
}

// Canal de origem do lead.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LeadSource {
    Web,
    Portal,
    Referido,
    #[serde(rename = "Redes Sociales")]
    RedesSociales,
    Otro,
}

// --- LEAD ---

// Espelho da tabela remota `leads`. A unicidade do e-mail é garantida
// pelo store; aqui ela só aparece como rejeição na hora da escrita.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Lead {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub stage: LeadStage,
    pub source: LeadSource,
    pub value: Decimal,
    pub created_at: DateTime<Utc>,
}

impl Lead {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
