// src/models/property.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Situação do imóvel no inventário. As transições são livres: qualquer
// status alcança qualquer outro, não há máquina de estados aqui.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PropertyStatus {
    Disponible,
    Reservado,
    Vendido,
}

// Espelho da tabela remota `properties`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub price: Decimal,
    pub status: PropertyStatus,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
