// wealthscope-core/src/domain/quality/mod.rs

pub mod annotator;
pub mod config;
pub mod metrics;
pub mod rules;

pub use annotator::QualityAnnotator;
pub use config::{IssueRates, QualityConfig, QualityMode, QualityProfile};
pub use metrics::DataQualityMetrics;
