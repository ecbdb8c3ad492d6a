pub mod configuration;
pub mod error;
pub mod presets;
pub mod quality;
pub mod query;
pub mod record;
pub mod stats;

// Re-exports to keep imports short elsewhere
pub use configuration::AppConfig;
pub use error::DomainError;
