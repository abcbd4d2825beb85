// src/views/agenda.rs

use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::models::task::AgendaTask;
use crate::services::agenda_service::{AgendaService, PAGE_SIZE};

pub struct AgendaView {
    service: AgendaService,
    cancel: CancellationToken,
    pub page: usize,
    pub total: u64,
    pub tasks: Vec<AgendaTask>,
    pub completed_filter: Option<bool>,
    pub error: Option<String>,
}

impl AgendaView {
    pub fn new(service: AgendaService) -> Self {
        Self {
            service,
            cancel: CancellationToken::new(),
            page: 0,
            total: 0,
            tasks: Vec::new(),
            completed_filter: None,
            error: None,
        }
    }

    /// Última página válida segundo a contagem conhecida.
    pub fn last_page(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            (self.total as usize - 1) / PAGE_SIZE
        }
    }

    pub async fn refresh(&mut self) {
        let page = self.page;
        self.fetch_page(page).await;
    }

    /// Clampa para a última página válida conhecida ANTES de ir ao
    /// store: nunca sai uma chamada fora da faixa.
    pub async fn go_to_page(&mut self, page: usize) {
        let clamped = page.min(self.last_page());
        self.fetch_page(clamped).await;
    }

    async fn fetch_page(&mut self, page: usize) {
        self.error = None;

        let result = self
            .cancel
            .run_until_cancelled(self.service.list_page(page, self.completed_filter))
            .await;
        match result {
            None => {}
            Some(Ok(fetched)) => {
                self.page = page;
                self.tasks = fetched.tasks;
                self.total = fetched.total;
            }
            Some(Err(e)) => self.error = Some(e.user_message()),
        }
    }

    /// Toggle otimista: vira o estado local na hora, faz exatamente um
    /// update remoto com o novo booleano e desfaz o flip se o store
    /// recusar, para local e remoto voltarem a convergir.
    pub async fn toggle_completed(&mut self, id: Uuid) {
        let Some(index) = self.tasks.iter().position(|t| t.id == id) else {
            return;
        };
        let new_value = !self.tasks[index].completed;
        self.tasks[index].completed = new_value;

        let result = self.service.set_completed(id, new_value).await;
        if let Err(e) = result {
            self.tasks[index].completed = !new_value;
            self.error = Some(e.user_message());
        }
    }

    pub fn teardown(&self) {
        self.cancel.cancel();
    }
}
