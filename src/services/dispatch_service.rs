// src/services/dispatch_service.rs

use std::sync::Arc;

use crate::common::error::AppError;
use crate::gateway::activity_repo::ActivityRepository;
use crate::messaging::compose::{compose_html, compose_message};
use crate::messaging::email::{EmailParams, EmailSender};
use crate::messaging::whatsapp::whatsapp_link;
use crate::models::activity::ActivityEvent;
use crate::models::document::Document;
use crate::models::lead::Lead;

/// Categoria gravada no histórico para todo despacho de documentos.
pub const DOCUMENTATION_CATEGORY: &str = "Documentación";

// Resultado do handoff para o WhatsApp: a UI abre o link num novo
// contexto de navegação; o envio em si acontece no app externo.
#[derive(Debug, Clone)]
pub struct WhatsAppDispatch {
    pub link: String,
    pub event: ActivityEvent,
}

#[derive(Clone)]
pub struct DispatchService {
    email: Arc<dyn EmailSender>,
    activity: ActivityRepository,
    reply_to: String,
}

impl DispatchService {
    pub fn new(email: Arc<dyn EmailSender>, activity: ActivityRepository, reply_to: &str) -> Self {
        Self {
            email,
            activity,
            reply_to: reply_to.to_string(),
        }
    }

    fn ensure_selection(documents: &[Document]) -> Result<(), AppError> {
        if documents.is_empty() {
            return Err(AppError::Precondition(
                "Selecione ao menos um documento.".to_string(),
            ));
        }
        Ok(())
    }

    /// Canal de e-mail: o evento de atividade só é gravado depois do
    /// aceite do provedor. Falha no envio = histórico intocado.
    pub async fn send_by_email(
        &self,
        lead: &Lead,
        subject: &str,
        body: &str,
        documents: &[Document],
    ) -> Result<ActivityEvent, AppError> {
        Self::ensure_selection(documents)?;
        if lead.email.trim().is_empty() {
            return Err(AppError::Precondition(
                "O lead não tem e-mail cadastrado.".to_string(),
            ));
        }

        let message = compose_message(body, documents);
        let params = EmailParams {
            subject: subject.to_string(),
            message_html: compose_html(&message),
            message,
            to_email: lead.email.clone(),
            to_name: lead.full_name(),
            reply_to: self.reply_to.clone(),
        };

        self.email.send(&params).await?;
        self.log_dispatch(lead, "Email", documents).await
    }

    /// Canal de WhatsApp: handoff "fire and forget". O evento é gravado
    /// incondicionalmente ao montar o link, sem saber se o usuário
    /// concluiu o envio no app externo. Assimetria intencional com o
    /// canal de e-mail; não unificar sem confirmação de produto.
    pub async fn send_by_whatsapp(
        &self,
        lead: &Lead,
        body: &str,
        documents: &[Document],
    ) -> Result<WhatsAppDispatch, AppError> {
        Self::ensure_selection(documents)?;
        let phone = lead
            .phone
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| {
                AppError::Precondition("O lead não tem telefone cadastrado.".to_string())
            })?;

        let message = compose_message(body, documents);
        let link = whatsapp_link(phone, &message);

        let event = self.log_dispatch(lead, "WhatsApp", documents).await?;
        Ok(WhatsAppDispatch { link, event })
    }

    async fn log_dispatch(
        &self,
        lead: &Lead,
        channel: &str,
        documents: &[Document],
    ) -> Result<ActivityEvent, AppError> {
        let names: Vec<&str> = documents.iter().map(|d| d.name.as_str()).collect();
        let description = format!(
            "Envío de {} documento(s) por {}: {}",
            documents.len(),
            channel,
            names.join(", ")
        );
        self.activity
            .insert(lead.id, DOCUMENTATION_CATEGORY, &description)
            .await
    }
}
