// src/gateway/profile_repo.rs

use uuid::Uuid;

use crate::common::error::AppError;
use crate::gateway::client::StoreClient;
use crate::models::profile::Profile;

const TABLE: &str = "profiles";

#[derive(Clone)]
pub struct ProfileRepository {
    client: StoreClient,
}

impl ProfileRepository {
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }

    /// Perfil da identidade autenticada (um por usuário).
    pub async fn get(&self, user_id: Uuid) -> Result<Profile, AppError> {
        self.client.get_by_id(TABLE, user_id).await
    }
}
