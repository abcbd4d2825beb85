// src/gateway/client.rs

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

use crate::common::error::AppError;
use crate::gateway::transport::{Method, StoreRequest, StoreResponse, StoreTransport};

// Cliente fino sobre o store remoto: list/get/create/update/delete por
// tabela. Restrições (campos obrigatórios, chaves) são do store, não
// daqui — a rejeição dele é repassada literalmente ao chamador.
// Não existe transação local: cada chamada é uma ida independente.
#[derive(Clone)]
pub struct StoreClient {
    transport: Arc<dyn StoreTransport>,
}

// Filtros de igualdade, ordenação e paginação por faixa, no formato
// que o store entende (`coluna=eq.valor`, `order=coluna.desc`).
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    filters: Vec<(String, String)>,
    order: Option<(String, bool)>,
    range: Option<(usize, usize)>,
    count: bool,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.filters.push((column.to_string(), value.to_string()));
        self
    }

    pub fn order_by(mut self, column: &str, ascending: bool) -> Self {
        self.order = Some((column.to_string(), ascending));
        self
    }

    /// Faixa inclusiva de índices (0-based), como no cabeçalho Range.
    pub fn range(mut self, from: usize, to: usize) -> Self {
        self.range = Some((from, to));
        self
    }

    /// Pede ao store a contagem total junto com a página.
    pub fn with_count(mut self) -> Self {
        self.count = true;
        self
    }
}

// Página de resultados. `total` só vem quando a consulta pediu contagem.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub total: Option<u64>,
}

impl StoreClient {
    pub fn new(transport: Arc<dyn StoreTransport>) -> Self {
        Self { transport }
    }

    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: ListQuery,
    ) -> Result<Page<T>, AppError> {
        let mut req = StoreRequest::new(Method::Get, table);
        req.query.push(("select".to_string(), "*".to_string()));

        for (column, value) in &query.filters {
            req.query.push((column.clone(), format!("eq.{}", value)));
        }
        if let Some((column, ascending)) = &query.order {
            let direction = if *ascending { "asc" } else { "desc" };
            req.query
                .push(("order".to_string(), format!("{}.{}", column, direction)));
        }
        if query.count {
            req.headers
                .push(("Prefer".to_string(), "count=exact".to_string()));
        }
        if let Some((from, to)) = query.range {
            req.headers
                .push(("Range-Unit".to_string(), "items".to_string()));
            req.headers
                .push(("Range".to_string(), format!("{}-{}", from, to)));
        }

        let response = self.transport.execute(req).await?;
        Self::check(&response)?;

        let rows: Vec<T> = serde_json::from_value(response.body)
            .map_err(|e| AppError::InternalServerError(e.into()))?;
        let total = response
            .content_range
            .as_deref()
            .and_then(Self::parse_total);

        Ok(Page { rows, total })
    }

    pub async fn get_by_id<T: DeserializeOwned>(
        &self,
        table: &str,
        id: Uuid,
    ) -> Result<T, AppError> {
        let page = self
            .select::<T>(table, ListQuery::new().eq("id", id))
            .await?;
        page.rows.into_iter().next().ok_or(AppError::NotFound)
    }

    pub async fn insert<T: DeserializeOwned>(
        &self,
        table: &str,
        body: Value,
    ) -> Result<T, AppError> {
        let mut req = StoreRequest::new(Method::Post, table);
        req.headers
            .push(("Prefer".to_string(), "return=representation".to_string()));
        req.body = Some(body);

        let response = self.transport.execute(req).await?;
        Self::check(&response)?;
        Self::first_row(response.body)
    }

    pub async fn update<T: DeserializeOwned>(
        &self,
        table: &str,
        id: Uuid,
        patch: Value,
    ) -> Result<T, AppError> {
        let mut req = StoreRequest::new(Method::Patch, table);
        req.query.push(("id".to_string(), format!("eq.{}", id)));
        req.headers
            .push(("Prefer".to_string(), "return=representation".to_string()));
        req.body = Some(patch);

        let response = self.transport.execute(req).await?;
        Self::check(&response)?;
        Self::first_row(response.body)
    }

    pub async fn delete(&self, table: &str, id: Uuid) -> Result<(), AppError> {
        let mut req = StoreRequest::new(Method::Delete, table);
        req.query.push(("id".to_string(), format!("eq.{}", id)));

        let response = self.transport.execute(req).await?;
        Self::check(&response)
    }

    // O store devolve sempre um array; para escritas pontuais queremos
    // a primeira (e única) linha. Array vazio num update = id inexistente.
    fn first_row<T: DeserializeOwned>(body: Value) -> Result<T, AppError> {
        let rows: Vec<T> = serde_json::from_value(body)
            .map_err(|e| AppError::InternalServerError(e.into()))?;
        rows.into_iter().next().ok_or(AppError::NotFound)
    }

    // Mapeia a rejeição do store para a nossa taxonomia, preservando a
    // mensagem original.
    fn check(response: &StoreResponse) -> Result<(), AppError> {
        if response.status < 400 {
            return Ok(());
        }

        let message = response
            .body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("O store remoto rejeitou a operação.")
            .to_string();
        let code = response
            .body
            .get("code")
            .and_then(Value::as_str)
            .unwrap_or("");

        Err(match response.status {
            401 | 403 => AppError::PermissionDenied(message),
            404 => AppError::NotFound,
            _ if code == "PGRST116" => AppError::NotFound,
            // 23505 = unique_violation no Postgres
            _ if code == "23505" => AppError::UniqueConstraintViolation(message),
            _ => AppError::RemoteRejection(message),
        })
    }

    // "0-7/20" -> 20; "*/0" -> 0; total desconhecido ("0-7/*") -> None
    fn parse_total(content_range: &str) -> Option<u64> {
        content_range.rsplit('/').next()?.parse().ok()
    }
}
