// src/testing.rs

// Dublês compartilhados pelos testes: um store em memória que fala o
// mesmo protocolo do gateway, mais gravadores de e-mail, storage e
// sessão. Nada daqui entra no build normal.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::error::AppError;
use crate::gateway::storage::FileStorage;
use crate::gateway::transport::{Method, StoreRequest, StoreResponse, StoreTransport};
use crate::messaging::email::{EmailParams, EmailSender};
use crate::models::lead::{Lead, LeadSource, LeadStage};
use crate::session::{AuthProvider, Session};

static TRACING: Once = Once::new();

/// Liga o tracing uma única vez, para os testes que exercitam caminhos
/// de falha verem os logs com `RUST_LOG` ajustado.
pub fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_test_writer()
            .init();
    });
}

// --- STORE EM MEMÓRIA ---

#[derive(Default)]
pub struct FakeStore {
    tables: Mutex<HashMap<String, Vec<Value>>>,
    unique: Mutex<HashMap<String, String>>,
    fail_next: Mutex<Option<AppError>>,
    pub requests: Mutex<Vec<StoreRequest>>,
}

impl FakeStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Declara uma coluna com restrição de unicidade, como o store real.
    pub fn with_unique_column(&self, table: &str, column: &str) {
        self.unique
            .lock()
            .unwrap()
            .insert(table.to_string(), column.to_string());
    }

    /// A próxima requisição falha com o erro dado.
    pub fn fail_next(&self, error: AppError) {
        *self.fail_next.lock().unwrap() = Some(error);
    }

    pub fn seed(&self, table: &str, rows: Vec<Value>) {
        self.tables
            .lock()
            .unwrap()
            .entry(table.to_string())
            .or_default()
            .extend(rows);
    }

    pub fn rows(&self, table: &str) -> Vec<Value> {
        self.tables
            .lock()
            .unwrap()
            .get(table)
            .cloned()
            .unwrap_or_default()
    }

    pub fn request_count(&self, method: Method, table: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.method == method && r.table == table)
            .count()
    }

    fn matches(row: &Value, column: &str, expected: &str) -> bool {
        match row.get(column) {
            Some(Value::String(s)) => s == expected,
            Some(Value::Bool(b)) => b.to_string() == expected,
            Some(Value::Number(n)) => n.to_string() == expected,
            _ => false,
        }
    }

    fn filters(req: &StoreRequest) -> Vec<(String, String)> {
        req.query
            .iter()
            .filter_map(|(column, value)| {
                value
                    .strip_prefix("eq.")
                    .map(|v| (column.clone(), v.to_string()))
            })
            .collect()
    }
}

fn parse_range(range: &str) -> (usize, usize) {
    let mut parts = range.splitn(2, '-');
    let from = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
    let to = parts.next().and_then(|p| p.parse().ok()).unwrap_or(from);
    (from, to)
}

#[async_trait]
impl StoreTransport for FakeStore {
    async fn execute(&self, req: StoreRequest) -> Result<StoreResponse, AppError> {
        self.requests.lock().unwrap().push(req.clone());
        if let Some(error) = self.fail_next.lock().unwrap().take() {
            return Err(error);
        }

        let mut tables = self.tables.lock().unwrap();
        let rows = tables.entry(req.table.clone()).or_default();
        let filters = Self::filters(&req);

        match req.method {
            Method::Get => {
                let selected: Vec<Value> = rows
                    .iter()
                    .filter(|row| filters.iter().all(|(c, v)| Self::matches(row, c, v)))
                    .cloned()
                    .collect();
                let total = selected.len();

                let (out, content_range) = if let Some(range) = req.header("Range") {
                    let (from, to) = parse_range(range);
                    let upper = (to + 1).min(total);
                    let lower = from.min(upper);
                    (
                        selected[lower..upper].to_vec(),
                        Some(format!("{}-{}/{}", lower, upper.saturating_sub(1), total)),
                    )
                } else if req
                    .header("Prefer")
                    .is_some_and(|p| p.contains("count=exact"))
                {
                    (
                        selected,
                        Some(format!("0-{}/{}", total.saturating_sub(1), total)),
                    )
                } else {
                    (selected, None)
                };

                Ok(StoreResponse {
                    status: 200,
                    body: Value::Array(out),
                    content_range,
                })
            }
            Method::Post => {
                let mut row = req.body.clone().unwrap_or_else(|| json!({}));
                if let Some(column) = self.unique.lock().unwrap().get(&req.table) {
                    if let Some(value) = row.get(column).and_then(Value::as_str) {
                        if rows.iter().any(|r| Self::matches(r, column, value)) {
                            return Ok(StoreResponse {
                                status: 409,
                                body: json!({
                                    "code": "23505",
                                    "message": format!(
                                        "duplicate key value violates unique constraint \"{}_{}_key\"",
                                        req.table, column
                                    ),
                                }),
                                content_range: None,
                            });
                        }
                    }
                }

                let obj = row.as_object_mut().expect("insert espera um objeto JSON");
                obj.entry("id").or_insert_with(|| json!(Uuid::new_v4()));
                obj.entry("created_at").or_insert_with(|| json!(Utc::now()));
                rows.push(row.clone());

                Ok(StoreResponse {
                    status: 201,
                    body: Value::Array(vec![row]),
                    content_range: None,
                })
            }
            Method::Patch => {
                let patch = req.body.clone().unwrap_or_else(|| json!({}));
                let mut updated = Vec::new();
                for row in rows.iter_mut() {
                    if filters.iter().all(|(c, v)| Self::matches(row, c, v)) {
                        if let (Some(obj), Some(changes)) = (row.as_object_mut(), patch.as_object())
                        {
                            for (key, value) in changes {
                                obj.insert(key.clone(), value.clone());
                            }
                        }
                        updated.push(row.clone());
                    }
                }
                Ok(StoreResponse {
                    status: 200,
                    body: Value::Array(updated),
                    content_range: None,
                })
            }
            Method::Delete => {
                rows.retain(|row| !filters.iter().all(|(c, v)| Self::matches(row, c, v)));
                Ok(StoreResponse {
                    status: 204,
                    body: Value::Null,
                    content_range: None,
                })
            }
        }
    }
}

// --- E-MAIL ---

#[derive(Default)]
pub struct RecordingEmailSender {
    pub sent: Mutex<Vec<EmailParams>>,
    fail_with: Mutex<Option<String>>,
}

impl RecordingEmailSender {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// O próximo envio falha com este diagnóstico do provedor.
    pub fn fail_with(&self, diagnostic: &str) {
        *self.fail_with.lock().unwrap() = Some(diagnostic.to_string());
    }
}

#[async_trait]
impl EmailSender for RecordingEmailSender {
    async fn send(&self, params: &EmailParams) -> Result<(), AppError> {
        if let Some(diagnostic) = self.fail_with.lock().unwrap().take() {
            return Err(AppError::SendFailure(diagnostic));
        }
        self.sent.lock().unwrap().push(params.clone());
        Ok(())
    }
}

// --- STORAGE ---

#[derive(Default)]
pub struct FakeStorage {
    pub uploads: Mutex<Vec<(String, usize)>>,
}

impl FakeStorage {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl FileStorage for FakeStorage {
    async fn upload(
        &self,
        filename: &str,
        bytes: Vec<u8>,
        _content_type: &str,
    ) -> Result<String, AppError> {
        self.uploads
            .lock()
            .unwrap()
            .push((filename.to_string(), bytes.len()));
        Ok(format!("https://storage.test/documents/{}", filename))
    }
}

// --- SESSÃO ---

pub struct FakeAuthProvider {
    session: Mutex<Option<Session>>,
    pub revoked: Mutex<Vec<String>>,
}

impl FakeAuthProvider {
    pub fn new(session: Option<Session>) -> Arc<Self> {
        Arc::new(Self {
            session: Mutex::new(session),
            revoked: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl AuthProvider for FakeAuthProvider {
    async fn recover_session(&self) -> Result<Option<Session>, AppError> {
        Ok(self.session.lock().unwrap().clone())
    }

    async fn revoke(&self, access_token: &str) -> Result<(), AppError> {
        self.revoked.lock().unwrap().push(access_token.to_string());
        Ok(())
    }
}

// --- AMOSTRAS ---

pub fn sample_session() -> Session {
    Session {
        user_id: Uuid::new_v4(),
        email: Some("agente@test.com".to_string()),
        access_token: "access-token".to_string(),
        refresh_token: "refresh-token".to_string(),
    }
}

pub fn sample_lead() -> Lead {
    Lead {
        id: Uuid::new_v4(),
        first_name: "María".to_string(),
        last_name: "González".to_string(),
        email: "maria@test.com".to_string(),
        phone: Some("+34 600 123 456".to_string()),
        stage: LeadStage::Prospecto,
        source: LeadSource::Web,
        value: Decimal::new(180_000, 0),
        created_at: Utc::now(),
    }
}

pub fn seed_profile(store: &FakeStore, user_id: Uuid) {
    store.seed(
        "profiles",
        vec![json!({
            "id": user_id,
            "email": "agente@test.com",
            "full_name": "Agente Demo",
            "role": "agent",
            "created_at": Utc::now(),
        })],
    );
}

pub fn lead_row(stage: &str, email: &str) -> Value {
    json!({
        "id": Uuid::new_v4(),
        "first_name": "Lead",
        "last_name": "Demo",
        "email": email,
        "phone": "+34 600 000 000",
        "stage": stage,
        "source": "Web",
        "value": 100000.0,
        "created_at": Utc::now(),
    })
}
