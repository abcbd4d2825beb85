// src/services/activity_service.rs

use uuid::Uuid;

use crate::common::error::AppError;
use crate::gateway::activity_repo::ActivityRepository;
use crate::models::activity::ActivityEvent;

// Fachada fina sobre o histórico append-only de um lead.
#[derive(Clone)]
pub struct ActivityService {
    repo: ActivityRepository,
}

impl ActivityService {
    pub fn new(repo: ActivityRepository) -> Self {
        Self { repo }
    }

    pub async fn log(
        &self,
        lead_id: Uuid,
        event_type: &str,
        description: &str,
    ) -> Result<ActivityEvent, AppError> {
        self.repo.insert(lead_id, event_type, description).await
    }

    pub async fn list_for_lead(&self, lead_id: Uuid) -> Result<Vec<ActivityEvent>, AppError> {
        self.repo.list_for_lead(lead_id).await
    }
}
