// src/config.rs

use std::env;
use std::sync::Arc;

use anyhow::Context;

use crate::gateway::activity_repo::ActivityRepository;
use crate::gateway::client::StoreClient;
use crate::gateway::document_repo::DocumentRepository;
use crate::gateway::lead_repo::LeadRepository;
use crate::gateway::profile_repo::ProfileRepository;
use crate::gateway::property_repo::PropertyRepository;
use crate::gateway::storage::{FileStorage, HttpFileStorage};
use crate::gateway::task_repo::TaskRepository;
use crate::gateway::transport::HttpTransport;
use crate::messaging::email::{EmailApiClient, EmailSender};
use crate::services::activity_service::ActivityService;
use crate::services::agenda_service::AgendaService;
use crate::services::dispatch_service::DispatchService;
use crate::services::document_service::DocumentService;
use crate::services::inventory_service::InventoryService;
use crate::services::lead_service::LeadService;
use crate::session::{AuthProvider, HttpAuthProvider, SessionManager};

// Credenciais e endpoints vêm do ambiente; o resto é configuração do
// provedor, não nossa.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store_url: String,
    pub store_api_key: String,
    pub storage_bucket: String,
    pub auth_refresh_token: Option<String>,
    pub email_endpoint: String,
    pub email_service_id: String,
    pub email_template_id: String,
    pub email_public_key: String,
    pub email_reply_to: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let var = |name: &str| {
            env::var(name).with_context(|| format!("{} deve ser definida", name))
        };

        Ok(Self {
            store_url: var("STORE_URL")?,
            store_api_key: var("STORE_API_KEY")?,
            storage_bucket: env::var("STORAGE_BUCKET")
                .unwrap_or_else(|_| "documents".to_string()),
            auth_refresh_token: env::var("AUTH_REFRESH_TOKEN").ok(),
            email_endpoint: var("EMAIL_API_URL")?,
            email_service_id: var("EMAIL_SERVICE_ID")?,
            email_template_id: var("EMAIL_TEMPLATE_ID")?,
            email_public_key: var("EMAIL_PUBLIC_KEY")?,
            email_reply_to: var("EMAIL_REPLY_TO")?,
        })
    }
}

// O contexto explícito da aplicação: nada de singleton ambiente.
// As views recebem clones dos serviços; a sessão tem ciclo de vida
// próprio (init -> on_auth_event -> sign_out).
pub struct AppContext {
    pub leads: LeadService,
    pub inventory: InventoryService,
    pub agenda: AgendaService,
    pub documents: DocumentService,
    pub activity: ActivityService,
    pub dispatch: DispatchService,
    pub session: SessionManager,
}

impl AppContext {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::new(AppConfig::from_env()?))
    }

    pub fn new(config: AppConfig) -> Self {
        let http = reqwest::Client::new();

        // --- Monta o gráfico de dependências ---
        let transport = Arc::new(HttpTransport::new(
            http.clone(),
            &config.store_url,
            &config.store_api_key,
        ));
        let client = StoreClient::new(transport);

        let storage: Arc<dyn FileStorage> = Arc::new(HttpFileStorage::new(
            http.clone(),
            &config.store_url,
            &config.store_api_key,
            &config.storage_bucket,
        ));
        let email: Arc<dyn EmailSender> = Arc::new(EmailApiClient::new(
            http.clone(),
            &config.email_endpoint,
            &config.email_service_id,
            &config.email_template_id,
            &config.email_public_key,
        ));
        let auth: Arc<dyn AuthProvider> = Arc::new(HttpAuthProvider::new(
            http,
            &config.store_url,
            &config.store_api_key,
            config.auth_refresh_token.clone(),
        ));

        let activity_repo = ActivityRepository::new(client.clone());

        tracing::info!("Contexto da aplicação montado");

        Self {
            leads: LeadService::new(LeadRepository::new(client.clone())),
            inventory: InventoryService::new(PropertyRepository::new(client.clone())),
            agenda: AgendaService::new(TaskRepository::new(client.clone())),
            documents: DocumentService::new(storage, DocumentRepository::new(client.clone())),
            activity: ActivityService::new(activity_repo.clone()),
            dispatch: DispatchService::new(email, activity_repo, &config.email_reply_to),
            session: SessionManager::new(auth, ProfileRepository::new(client)),
        }
    }
}
