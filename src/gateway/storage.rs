// src/gateway/storage.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::common::error::AppError;

// Upload de binários para o storage do provedor. O caminho leva um
// segmento aleatório para nunca colidir com um upload anterior do
// mesmo nome de arquivo. Devolve a URL pública do objeto.
#[async_trait]
pub trait FileStorage: Send + Sync {
    async fn upload(
        &self,
        filename: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, AppError>;
}

pub struct HttpFileStorage {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    bucket: String,
}

impl HttpFileStorage {
    pub fn new(http: reqwest::Client, base_url: &str, api_key: &str, bucket: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            bucket: bucket.to_string(),
        }
    }
}

#[async_trait]
impl FileStorage for HttpFileStorage {
    async fn upload(
        &self,
        filename: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, AppError> {
        let path = format!("{}-{}", Uuid::new_v4(), filename);
        let url = format!(
            "{}/storage/v1/object/{}/{}",
            self.base_url, self.bucket, path
        );

        let response = self
            .http
            .post(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await?;

        if !response.status().is_success() {
            let diagnostic = response.text().await.unwrap_or_default();
            tracing::error!("Upload rejeitado pelo storage: {}", diagnostic);
            return Err(AppError::RemoteRejection(diagnostic));
        }

        Ok(format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, path
        ))
    }
}
