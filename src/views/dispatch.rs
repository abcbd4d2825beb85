// src/views/dispatch.rs

use std::collections::HashSet;

use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::models::document::Document;
use crate::models::lead::Lead;
use crate::services::dispatch_service::DispatchService;
use crate::services::document_service::DocumentService;

// Multi-seleção sobre a lista de documentos já buscada, entregue ao
// adaptador de mensagens na hora do envio.
pub struct DispatchView {
    documents: DocumentService,
    dispatch: DispatchService,
    cancel: CancellationToken,
    pub available: Vec<Document>,
    pub selected: HashSet<Uuid>,
    pub error: Option<String>,
    pub last_whatsapp_link: Option<String>,
}

impl DispatchView {
    pub fn new(documents: DocumentService, dispatch: DispatchService) -> Self {
        Self {
            documents,
            dispatch,
            cancel: CancellationToken::new(),
            available: Vec::new(),
            selected: HashSet::new(),
            error: None,
            last_whatsapp_link: None,
        }
    }

    pub async fn refresh(&mut self) {
        self.error = None;

        let result = self
            .cancel
            .run_until_cancelled(self.documents.list())
            .await;
        match result {
            None => {}
            Some(Ok(documents)) => self.available = documents,
            Some(Err(e)) => self.error = Some(e.user_message()),
        }
    }

    pub fn toggle_selection(&mut self, id: Uuid) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Seleção na ordem da lista exibida.
    pub fn selected_documents(&self) -> Vec<Document> {
        self.available
            .iter()
            .filter(|doc| self.selected.contains(&doc.id))
            .cloned()
            .collect()
    }

    pub async fn send_email(&mut self, lead: &Lead, subject: &str, body: &str) -> bool {
        let documents = self.selected_documents();
        let result = self
            .dispatch
            .send_by_email(lead, subject, body, &documents)
            .await;
        match result {
            Ok(_) => {
                self.clear_selection();
                true
            }
            Err(e) => {
                self.error = Some(e.user_message());
                false
            }
        }
    }

    /// Devolve o link para a UI abrir num novo contexto de navegação.
    pub async fn send_whatsapp(&mut self, lead: &Lead, body: &str) -> Option<String> {
        let documents = self.selected_documents();
        let result = self.dispatch.send_by_whatsapp(lead, body, &documents).await;
        match result {
            Ok(dispatch) => {
                self.clear_selection();
                self.last_whatsapp_link = Some(dispatch.link.clone());
                Some(dispatch.link)
            }
            Err(e) => {
                self.error = Some(e.user_message());
                None
            }
        }
    }

    pub fn teardown(&self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use chrono::Utc;
    use serde_json::json;

    use crate::gateway::activity_repo::ActivityRepository;
    use crate::gateway::client::StoreClient;
    use crate::gateway::document_repo::DocumentRepository;
    use crate::testing::{sample_lead, FakeStorage, FakeStore, RecordingEmailSender};

    fn doc_row(name: &str) -> serde_json::Value {
        json!({
            "id": Uuid::new_v4(),
            "name": name,
            "url": format!("https://cdn.test/{}", name),
            "created_at": Utc::now(),
        })
    }

    fn view(store: Arc<FakeStore>, email: Arc<RecordingEmailSender>) -> DispatchView {
        DispatchView::new(
            DocumentService::new(
                FakeStorage::new(),
                DocumentRepository::new(StoreClient::new(store.clone())),
            ),
            DispatchService::new(
                email,
                ActivityRepository::new(StoreClient::new(store)),
                "agencia@test.com",
            ),
        )
    }

    #[tokio::test]
    async fn selection_toggles_per_document() {
        let store = FakeStore::new();
        store.seed("documents", vec![doc_row("contrato.pdf"), doc_row("ficha.pdf")]);
        let mut view = view(store.clone(), RecordingEmailSender::new());
        view.refresh().await;

        let first = view.available[0].id;
        view.toggle_selection(first);
        assert_eq!(view.selected_documents().len(), 1);
        view.toggle_selection(first);
        assert!(view.selected_documents().is_empty());
    }

    #[tokio::test]
    async fn sending_email_hands_the_selection_to_the_adapter() {
        let store = FakeStore::new();
        store.seed("documents", vec![doc_row("contrato.pdf"), doc_row("ficha.pdf")]);
        let email = RecordingEmailSender::new();
        let mut view = view(store.clone(), email.clone());
        view.refresh().await;
        view.toggle_selection(view.available[0].id);
        view.toggle_selection(view.available[1].id);

        let sent = view.send_email(&sample_lead(), "Documentación", "Hola").await;

        assert!(sent);
        assert!(view.selected.is_empty());
        let params = email.sent.lock().unwrap()[0].clone();
        assert!(params.message.contains("contrato.pdf: https://cdn.test/contrato.pdf"));
        assert!(params.message.contains("ficha.pdf: https://cdn.test/ficha.pdf"));
    }

    #[tokio::test]
    async fn sending_with_nothing_selected_reports_the_precondition() {
        let store = FakeStore::new();
        store.seed("documents", vec![doc_row("contrato.pdf")]);
        let email = RecordingEmailSender::new();
        let mut view = view(store.clone(), email.clone());
        view.refresh().await;

        let sent = view.send_email(&sample_lead(), "Docs", "Hola").await;

        assert!(!sent);
        assert!(view.error.is_some());
        assert!(email.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn whatsapp_handoff_keeps_the_link_around() {
        let store = FakeStore::new();
        store.seed("documents", vec![doc_row("planos.pdf")]);
        let mut view = view(store.clone(), RecordingEmailSender::new());
        view.refresh().await;
        view.toggle_selection(view.available[0].id);

        let link = view.send_whatsapp(&sample_lead(), "Hola").await;

        assert!(link.is_some());
        assert_eq!(view.last_whatsapp_link, link);
        assert_eq!(store.rows("activity_events").len(), 1);
    }
}
