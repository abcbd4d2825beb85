// src/services/inventory_service.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::common::error::AppError;
use crate::gateway::property_repo::PropertyRepository;
use crate::models::property::{Property, PropertyStatus};

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price <= Decimal::ZERO {
        return Err(ValidationError::new("price_not_positive"));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePropertyPayload {
    #[validate(length(min = 1, message = "required"))]
    pub name: String,

    #[validate(length(min = 1, message = "required"))]
    pub location: String,

    #[validate(custom(function = validate_price))]
    pub price: Decimal,

    // Ausente = entra como Disponible
    pub status: Option<PropertyStatus>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdatePropertyPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "required"))]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "required"))]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = validate_price))]
    pub price: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PropertyStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Clone)]
pub struct InventoryService {
    repo: PropertyRepository,
}

impl InventoryService {
    pub fn new(repo: PropertyRepository) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<Property>, AppError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: Uuid) -> Result<Property, AppError> {
        self.repo.get(id).await
    }

    pub async fn create(&self, payload: CreatePropertyPayload) -> Result<Property, AppError> {
        payload.validate()?;

        let row = json!({
            "name": payload.name,
            "location": payload.location,
            "price": payload.price,
            "status": payload.status.unwrap_or(PropertyStatus::Disponible),
            "image_url": payload.image_url,
        });
        self.repo.create(row).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        payload: UpdatePropertyPayload,
    ) -> Result<Property, AppError> {
        payload.validate()?;

        let patch = serde_json::to_value(&payload)
            .map_err(|e| AppError::InternalServerError(e.into()))?;
        self.repo.update(id, patch).await
    }

    /// Transição livre de status: qualquer um alcança qualquer outro,
    /// não há máquina de estados para imóveis.
    pub async fn set_status(&self, id: Uuid, status: PropertyStatus) -> Result<Property, AppError> {
        self.repo.update(id, json!({ "status": status })).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.delete(id).await
    }
}
