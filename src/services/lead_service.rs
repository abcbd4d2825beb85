// src/services/lead_service.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::common::error::AppError;
use crate::gateway::lead_repo::LeadRepository;
use crate::models::lead::{Lead, LeadSource, LeadStage};

// Payloads tipados, validados na fronteira ANTES de qualquer chamada
// remota. Nada de shapes soltos atravessando o formulário.

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateLeadPayload {
    #[validate(length(min = 1, message = "required"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "required"))]
    pub last_name: String,

    #[validate(email(message = "invalid_email"))]
    pub email: String,

    pub phone: Option<String>,
    pub source: LeadSource,
    pub value: Decimal,
}

// Edição inline: campo ausente = não mexe. Um único update grava tudo
// que foi alterado de uma vez.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateLeadPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "required"))]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "required"))]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "invalid_email"))]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<LeadStage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<LeadSource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Decimal>,
}

#[derive(Clone)]
pub struct LeadService {
    repo: LeadRepository,
}

impl LeadService {
    pub fn new(repo: LeadRepository) -> Self {
        Self { repo }
    }

    pub async fn list(&self, stage: Option<LeadStage>) -> Result<Vec<Lead>, AppError> {
        self.repo.list(stage).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Lead, AppError> {
        self.repo.get(id).await
    }

    /// Cria o lead com a etapa padrão. A unicidade do e-mail é do store:
    /// a rejeição dele volta intacta para quem chamou.
    pub async fn create(&self, payload: CreateLeadPayload) -> Result<Lead, AppError> {
        payload.validate()?;

        let mut row = serde_json::to_value(&payload)
            .map_err(|e| AppError::InternalServerError(e.into()))?;
        if let Some(obj) = row.as_object_mut() {
            obj.insert("stage".to_string(), json!(LeadStage::Prospecto));
        }

        self.repo.create(row).await
    }

    pub async fn update(&self, id: Uuid, payload: UpdateLeadPayload) -> Result<Lead, AppError> {
        payload.validate()?;

        let patch = serde_json::to_value(&payload)
            .map_err(|e| AppError::InternalServerError(e.into()))?;
        self.repo.update(id, patch).await
    }

    /// A confirmação é responsabilidade da view; aqui o delete já é pra valer.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::client::StoreClient;
    use crate::testing::FakeStore;

    fn payload(email: &str) -> CreateLeadPayload {
        CreateLeadPayload {
            first_name: "María".to_string(),
            last_name: "González".to_string(),
            email: email.to_string(),
            phone: Some("+34 600 123 456".to_string()),
            source: LeadSource::Web,
            value: Decimal::new(180_000, 0),
        }
    }

    #[tokio::test]
    async fn create_stores_the_submitted_fields_with_the_default_stage() {
        let store = FakeStore::new();
        let service = LeadService::new(LeadRepository::new(StoreClient::new(store.clone())));

        let lead = service.create(payload("maria@test.com")).await.unwrap();

        assert_eq!(lead.first_name, "María");
        assert_eq!(lead.email, "maria@test.com");
        assert_eq!(lead.stage, LeadStage::Prospecto);
        assert_eq!(store.rows("leads").len(), 1);
    }

    #[tokio::test]
    async fn duplicate_email_keeps_the_count_and_surfaces_the_store_message() {
        let store = FakeStore::new();
        store.with_unique_column("leads", "email");
        let service = LeadService::new(LeadRepository::new(StoreClient::new(store.clone())));

        service.create(payload("maria@test.com")).await.unwrap();
        let err = service.create(payload("maria@test.com")).await.unwrap_err();

        match err {
            AppError::UniqueConstraintViolation(msg) => assert_eq!(
                msg,
                "duplicate key value violates unique constraint \"leads_email_key\""
            ),
            other => panic!("esperava violação de unicidade, veio {:?}", other),
        }
        assert_eq!(store.rows("leads").len(), 1);
    }

    #[tokio::test]
    async fn invalid_payload_never_reaches_the_store() {
        let store = FakeStore::new();
        let service = LeadService::new(LeadRepository::new(StoreClient::new(store.clone())));

        let err = service.create(payload("não-é-email")).await.unwrap_err();

        assert!(matches!(err, AppError::ValidationError(_)));
        assert!(store.requests.lock().unwrap().is_empty());
    }
}
