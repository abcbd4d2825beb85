// src/session.rs

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use crate::common::error::AppError;
use crate::gateway::profile_repo::ProfileRepository;
use crate::models::profile::Profile;

// Identidade autenticada junto ao provedor hospedado. Os detalhes do
// protocolo de autenticação são dele, não nossos: aqui só carregamos
// os tokens e o dono da sessão.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user_id: Uuid,
    pub email: Option<String>,
    pub access_token: String,
    pub refresh_token: String,
}

// Notificações externas de mudança de autenticação.
#[derive(Debug, Clone)]
pub enum AuthEvent {
    SignedIn(Session),
    TokenRefreshed(Session),
    SignedOut,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Uninitialized,
    Loading,
    Authenticated {
        session: Session,
        // Perfil pode faltar sem derrubar a sessão
        profile: Option<Profile>,
    },
    Anonymous,
}

#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Tenta recuperar uma sessão existente junto ao provedor.
    async fn recover_session(&self) -> Result<Option<Session>, AppError>;
    /// Revoga a sessão no provedor (melhor esforço).
    async fn revoke(&self, access_token: &str) -> Result<(), AppError>;
}

// --- PROVEDOR HTTP ---

pub struct HttpAuthProvider {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    stored_refresh_token: Option<String>,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: String,
    user: TokenUser,
}

#[derive(Deserialize)]
struct TokenUser {
    id: Uuid,
    email: Option<String>,
}

impl HttpAuthProvider {
    pub fn new(
        http: reqwest::Client,
        base_url: &str,
        api_key: &str,
        stored_refresh_token: Option<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            stored_refresh_token,
        }
    }
}

#[async_trait]
impl AuthProvider for HttpAuthProvider {
    async fn recover_session(&self) -> Result<Option<Session>, AppError> {
        let Some(refresh_token) = &self.stored_refresh_token else {
            return Ok(None);
        };

        let url = format!("{}/auth/v1/token?grant_type=refresh_token", self.base_url);
        let response = self
            .http
            .post(&url)
            .header("apikey", &self.api_key)
            .json(&serde_json::json!({ "refresh_token": refresh_token }))
            .send()
            .await?;

        // Token guardado que não vale mais não é erro: vira anônimo.
        if !response.status().is_success() {
            tracing::debug!("Sessão guardada não pôde ser recuperada");
            return Ok(None);
        }

        let token: TokenResponse = response.json().await?;
        Ok(Some(Session {
            user_id: token.user.id,
            email: token.user.email,
            access_token: token.access_token,
            refresh_token: token.refresh_token,
        }))
    }

    async fn revoke(&self, access_token: &str) -> Result<(), AppError> {
        let url = format!("{}/auth/v1/logout", self.base_url);
        self.http
            .post(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(access_token)
            .send()
            .await?;
        Ok(())
    }
}

// --- CICLO DE VIDA DA SESSÃO ---

// Dono do estado de identidade do processo. Sem singleton ambiente:
// vive no AppContext e é passado explicitamente a quem precisa.
// Ciclo: init() na carga -> on_auth_event() a cada notificação externa
// -> sign_out() como ação terminal.
pub struct SessionManager {
    auth: Arc<dyn AuthProvider>,
    profiles: ProfileRepository,
    state: SessionState,
}

impl SessionManager {
    pub fn new(auth: Arc<dyn AuthProvider>, profiles: ProfileRepository) -> Self {
        Self {
            auth,
            profiles,
            state: SessionState::Uninitialized,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated { .. })
    }

    pub fn profile(&self) -> Option<&Profile> {
        match &self.state {
            SessionState::Authenticated { profile, .. } => profile.as_ref(),
            _ => None,
        }
    }

    /// Na carga: tenta recuperar uma sessão existente.
    pub async fn init(&mut self) {
        self.state = SessionState::Loading;
        match self.auth.recover_session().await {
            Ok(Some(session)) => self.enter_authenticated(session).await,
            Ok(None) => self.state = SessionState::Anonymous,
            Err(e) => {
                tracing::warn!("Falha ao recuperar a sessão: {}", e);
                self.state = SessionState::Anonymous;
            }
        }
    }

    /// Sign-in, refresh de token e sign-out externos reentram na mesma
    /// lógica de transição do init.
    pub async fn on_auth_event(&mut self, event: AuthEvent) {
        match event {
            AuthEvent::SignedIn(session) | AuthEvent::TokenRefreshed(session) => {
                self.enter_authenticated(session).await
            }
            AuthEvent::SignedOut => self.state = SessionState::Anonymous,
        }
    }

    /// Recarrega o perfil sob demanda, mantendo a sessão como está.
    pub async fn refresh_profile(&mut self) -> Result<(), AppError> {
        let user_id = match &self.state {
            SessionState::Authenticated { session, .. } => session.user_id,
            _ => return Err(AppError::Unauthenticated),
        };
        let fresh = self.profiles.get(user_id).await?;
        if let SessionState::Authenticated { profile, .. } = &mut self.state {
            *profile = Some(fresh);
        }
        Ok(())
    }

    /// Sign-out explícito: limpa sessão e perfil de forma síncrona e
    /// revoga o token no provedor em melhor esforço.
    pub async fn sign_out(&mut self) {
        let token = match std::mem::replace(&mut self.state, SessionState::Anonymous) {
            SessionState::Authenticated { session, .. } => Some(session.access_token),
            _ => None,
        };
        if let Some(token) = token {
            if let Err(e) = self.auth.revoke(&token).await {
                tracing::warn!("Falha ao revogar a sessão no provedor: {}", e);
            }
        }
    }

    // Falha ao buscar o perfil não derruba a sessão: seguimos
    // autenticados com perfil nulo, só registramos no log.
    async fn enter_authenticated(&mut self, session: Session) {
        let profile = match self.profiles.get(session.user_id).await {
            Ok(profile) => Some(profile),
            Err(e) => {
                tracing::warn!("Perfil indisponível para {}: {}", session.user_id, e);
                None
            }
        };
        self.state = SessionState::Authenticated { session, profile };
    }
}
