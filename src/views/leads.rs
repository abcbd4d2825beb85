// src/views/leads.rs

use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::models::activity::ActivityEvent;
use crate::models::lead::{Lead, LeadStage};
use crate::services::activity_service::ActivityService;
use crate::services::lead_service::{LeadService, UpdateLeadPayload};

// Cada view é dona só do seu estado local (busca, filtro, flags).
// Nenhuma view sincroniza com outra: navegar refaz o fetch, sempre.
// O token de cancelamento acompanha o tempo de vida "montado" da view;
// um fetch em voo quando a view cai resolve num no-op silencioso.

pub struct LeadListView {
    service: LeadService,
    cancel: CancellationToken,
    pub search: String,
    pub stage_filter: Option<LeadStage>,
    pub leads: Vec<Lead>,
    pub loading: bool,
    pub error: Option<String>,
}

impl LeadListView {
    pub fn new(service: LeadService) -> Self {
        Self {
            service,
            cancel: CancellationToken::new(),
            search: String::new(),
            stage_filter: None,
            leads: Vec::new(),
            loading: false,
            error: None,
        }
    }

    pub async fn refresh(&mut self) {
        self.loading = true;
        self.error = None;

        let result = self
            .cancel
            .run_until_cancelled(self.service.list(self.stage_filter))
            .await;
        match result {
            // View desmontada no meio do fetch: descarta em silêncio.
            None => {}
            Some(Ok(leads)) => self.leads = Self::apply_search(leads, &self.search),
            Some(Err(e)) => self.error = Some(e.user_message()),
        }
        self.loading = false;
    }

    pub fn teardown(&self) {
        self.cancel.cancel();
    }

    // O texto de busca é estado local: o filtro roda sobre a lista já
    // buscada, sem nova ida ao store.
    fn apply_search(leads: Vec<Lead>, search: &str) -> Vec<Lead> {
        let term = search.trim().to_lowercase();
        if term.is_empty() {
            return leads;
        }
        leads
            .into_iter()
            .filter(|lead| {
                lead.full_name().to_lowercase().contains(&term)
                    || lead.email.to_lowercase().contains(&term)
            })
            .collect()
    }
}

pub struct LeadDetailView {
    leads: LeadService,
    activity: ActivityService,
    cancel: CancellationToken,
    pub lead: Option<Lead>,
    pub history: Vec<ActivityEvent>,
    pub editing: bool,
    pub draft: UpdateLeadPayload,
    pub confirm_delete: bool,
    pub error: Option<String>,
}

impl LeadDetailView {
    pub fn new(leads: LeadService, activity: ActivityService) -> Self {
        Self {
            leads,
            activity,
            cancel: CancellationToken::new(),
            lead: None,
            history: Vec::new(),
            editing: false,
            draft: UpdateLeadPayload::default(),
            confirm_delete: false,
            error: None,
        }
    }

    pub async fn load(&mut self, id: Uuid) {
        self.error = None;

        let result = self.cancel.run_until_cancelled(self.leads.get(id)).await;
        match result {
            None => return,
            Some(Ok(lead)) => self.lead = Some(lead),
            Some(Err(e)) => {
                self.error = Some(e.user_message());
                return;
            }
        }

        // Sequencial de propósito: o histórico vem depois do lead.
        let history = self
            .cancel
            .run_until_cancelled(self.activity.list_for_lead(id))
            .await;
        match history {
            None => {}
            Some(Ok(events)) => self.history = events,
            Some(Err(e)) => self.error = Some(e.user_message()),
        }
    }

    /// Liga a edição inline com o rascunho pré-preenchido.
    pub fn start_edit(&mut self) {
        let Some(lead) = &self.lead else { return };
        self.draft = UpdateLeadPayload {
            first_name: Some(lead.first_name.clone()),
            last_name: Some(lead.last_name.clone()),
            email: Some(lead.email.clone()),
            phone: lead.phone.clone(),
            stage: Some(lead.stage),
            source: Some(lead.source),
            value: Some(lead.value),
        };
        self.editing = true;
    }

    pub fn cancel_edit(&mut self) {
        self.editing = false;
        self.draft = UpdateLeadPayload::default();
    }

    /// Grava todos os campos editáveis num único update.
    pub async fn save(&mut self) {
        if !self.editing {
            return;
        }
        let Some(id) = self.lead.as_ref().map(|l| l.id) else {
            return;
        };

        let result = self.leads.update(id, self.draft.clone()).await;
        match result {
            Ok(updated) => {
                self.lead = Some(updated);
                self.cancel_edit();
            }
            Err(e) => self.error = Some(e.user_message()),
        }
    }

    /// O delete exige confirmação explícita: primeiro o pedido...
    pub fn request_delete(&mut self) {
        self.confirm_delete = true;
    }

    pub fn cancel_delete(&mut self) {
        self.confirm_delete = false;
    }

    /// ...e só a confirmação dispara o delete remoto.
    pub async fn confirm_and_delete(&mut self) -> bool {
        if !self.confirm_delete {
            return false;
        }
        let Some(id) = self.lead.as_ref().map(|l| l.id) else {
            return false;
        };

        let result = self.leads.delete(id).await;
        match result {
            Ok(()) => {
                self.lead = None;
                self.confirm_delete = false;
                true
            }
            Err(e) => {
                self.error = Some(e.user_message());
                false
            }
        }
    }

    pub fn teardown(&self) {
        self.cancel.cancel();
    }
}
