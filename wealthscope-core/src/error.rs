// wealthscope-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WealthscopeError {
    // --- DOMAIN ERRORS (filters, presets, configuration values) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (IO, CSV, YAML, JSON) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    // --- GENERIC / APPLICATION ERRORS ---
    #[error("Internal Error: {0}")]
    InternalError(String),
}

// Manual implementation to avoid duplicate enum variant but keep ergonomics
impl From<std::io::Error> for WealthscopeError {
    fn from(err: std::io::Error) -> Self {
        WealthscopeError::Infrastructure(InfrastructureError::Io(err))
    }
}
