// src/views/pipeline.rs

use tokio_util::sync::CancellationToken;

use crate::models::lead::{Lead, LeadStage};
use crate::services::lead_service::LeadService;

#[derive(Debug, Clone)]
pub struct PipelineColumn {
    pub stage: LeadStage,
    pub leads: Vec<Lead>,
}

/// Particiona uma lista já buscada nos quatro baldes fixos do kanban.
/// Puro agrupamento client-side pelo campo de etapa; não há
/// persistência de drag-and-drop.
pub fn partition(leads: &[Lead]) -> Vec<PipelineColumn> {
    LeadStage::ALL
        .iter()
        .map(|stage| PipelineColumn {
            stage: *stage,
            leads: leads
                .iter()
                .filter(|lead| lead.stage == *stage)
                .cloned()
                .collect(),
        })
        .collect()
}

pub struct PipelineView {
    service: LeadService,
    cancel: CancellationToken,
    pub columns: Vec<PipelineColumn>,
    pub error: Option<String>,
}

impl PipelineView {
    pub fn new(service: LeadService) -> Self {
        Self {
            service,
            cancel: CancellationToken::new(),
            columns: Vec::new(),
            error: None,
        }
    }

    pub async fn refresh(&mut self) {
        self.error = None;

        let result = self
            .cancel
            .run_until_cancelled(self.service.list(None))
            .await;
        match result {
            None => {}
            Some(Ok(leads)) => self.columns = partition(&leads),
            Some(Err(e)) => self.error = Some(e.user_message()),
        }
    }

    pub fn teardown(&self) {
        self.cancel.cancel();
    }
}
