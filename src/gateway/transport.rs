// src/gateway/transport.rs

use async_trait::async_trait;
use serde_json::Value;

use crate::common::error::AppError;

// O transporte cru do gateway. Uma requisição = uma ida ao store remoto,
// sem cache, sem retry além do que o cliente HTTP já faz sozinho.
// A trait existe para os testes injetarem um store em memória.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

#[derive(Debug, Clone)]
pub struct StoreRequest {
    pub method: Method,
    pub table: String,
    // Pares chave=valor da query string (filtros `eq.`, `order`, `select`)
    pub query: Vec<(String, String)>,
    // Cabeçalhos extras (Prefer, Range)
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl StoreRequest {
    pub fn new(method: Method, table: &str) -> Self {
        Self {
            method,
            table: table.to_string(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Devolve o valor de um cabeçalho, se presente.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct StoreResponse {
    pub status: u16,
    pub body: Value,
    // Cabeçalho Content-Range ("0-7/20") quando a listagem pede contagem
    pub content_range: Option<String>,
}

#[async_trait]
pub trait StoreTransport: Send + Sync {
    async fn execute(&self, req: StoreRequest) -> Result<StoreResponse, AppError>;
}

// --- IMPLEMENTAÇÃO HTTP (PostgREST) ---

pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpTransport {
    pub fn new(http: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[async_trait]
impl StoreTransport for HttpTransport {
    async fn execute(&self, req: StoreRequest) -> Result<StoreResponse, AppError> {
        let url = format!("{}/rest/v1/{}", self.base_url, req.table);

        let mut builder = match req.method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
            Method::Patch => self.http.patch(&url),
            Method::Delete => self.http.delete(&url),
        };

        builder = builder
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .query(&req.query);

        for (name, value) in &req.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(body) = &req.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;

        let status = response.status().as_u16();
        let content_range = response
            .headers()
            .get("content-range")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let text = response.text().await?;
        let body = if text.is_empty() {
            Value::Null
        } else {
            // Corpo que não é JSON (ex: erro em texto puro) vira String
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };

        Ok(StoreResponse {
            status,
            body,
            content_range,
        })
    }
}
