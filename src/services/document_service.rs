// src/services/document_service.rs

use std::sync::Arc;

use uuid::Uuid;

use crate::common::error::AppError;
use crate::gateway::document_repo::DocumentRepository;
use crate::gateway::storage::FileStorage;
use crate::models::document::Document;

// Upload em duas etapas sem atomicidade: o binário sobe para o storage
// e só depois os metadados são gravados. Falha na segunda etapa deixa
// o blob órfão no bucket; não há reconciliação.
#[derive(Clone)]
pub struct DocumentService {
    storage: Arc<dyn FileStorage>,
    repo: DocumentRepository,
}

impl DocumentService {
    pub fn new(storage: Arc<dyn FileStorage>, repo: DocumentRepository) -> Self {
        Self { storage, repo }
    }

    pub async fn list(&self) -> Result<Vec<Document>, AppError> {
        self.repo.list().await
    }

    pub async fn upload(
        &self,
        filename: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<Document, AppError> {
        if filename.trim().is_empty() {
            return Err(AppError::Precondition(
                "Informe um nome de arquivo.".to_string(),
            ));
        }

        let url = self.storage.upload(filename, bytes, content_type).await?;
        self.repo.create(filename, &url).await
    }

    /// Remove só os metadados; o documento não pertence a nenhum lead,
    /// então nada mais é tocado.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.delete(id).await
    }
}
