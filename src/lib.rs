// src/lib.rs

// Declaração dos nossos módulos
pub mod common;
pub mod config;
pub mod gateway;
pub mod messaging;
pub mod models;
pub mod services;
pub mod session;
pub mod views;

#[cfg(test)]
pub mod testing;

// Re-exports principais
pub use common::error::AppError;
pub use config::{AppConfig, AppContext};
