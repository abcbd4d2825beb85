// src/messaging/email.rs

use async_trait::async_trait;
use serde::Serialize;
use serde_json::json;

use crate::common::error::AppError;

// Parâmetros do template fixo do provedor de e-mail transacional.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EmailParams {
    pub subject: String,
    pub message: String,
    pub message_html: String,
    pub to_email: String,
    pub to_name: String,
    pub reply_to: String,
}

// Seam para os testes: o despacho só precisa saber "enviou ou não".
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, params: &EmailParams) -> Result<(), AppError>;
}

// Cliente do serviço de envio. Template e credenciais são configuração;
// o corpo composto viaja como variável do template.
pub struct EmailApiClient {
    http: reqwest::Client,
    endpoint: String,
    service_id: String,
    template_id: String,
    public_key: String,
}

impl EmailApiClient {
    pub fn new(
        http: reqwest::Client,
        endpoint: &str,
        service_id: &str,
        template_id: &str,
        public_key: &str,
    ) -> Self {
        Self {
            http,
            endpoint: endpoint.to_string(),
            service_id: service_id.to_string(),
            template_id: template_id.to_string(),
            public_key: public_key.to_string(),
        }
    }
}

#[async_trait]
impl EmailSender for EmailApiClient {
    async fn send(&self, params: &EmailParams) -> Result<(), AppError> {
        let payload = json!({
            "service_id": self.service_id,
            "template_id": self.template_id,
            "user_id": self.public_key,
            "template_params": params,
        });

        let response = self.http.post(&self.endpoint).json(&payload).send().await?;

        if !response.status().is_success() {
            // Repassa o diagnóstico do provedor quando ele existir.
            let diagnostic = response.text().await.unwrap_or_default();
            let message = if diagnostic.trim().is_empty() {
                "O provedor de e-mail rejeitou o envio.".to_string()
            } else {
                diagnostic
            };
            tracing::error!("Envio de e-mail rejeitado: {}", message);
            return Err(AppError::SendFailure(message));
        }

        Ok(())
    }
}
