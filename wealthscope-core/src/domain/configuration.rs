// wealthscope-core/src/domain/configuration.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::quality::QualityConfig;
use crate::domain::query::DEFAULT_PAGE_SIZE;

/// Which loader to run.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LoadStrategy {
    /// Whole file in one streaming pass, with progress reporting.
    #[default]
    Chunked,
    /// Stops after `row_limit` rows.
    Bounded,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Validate)]
pub struct DatasetConfig {
    #[serde(default = "default_dataset_path")]
    pub path: String,
    #[serde(default)]
    pub strategy: LoadStrategy,
    #[serde(rename = "chunk-size", default = "default_chunk_size")]
    #[validate(range(min = 1))]
    pub chunk_size: usize,
    #[serde(rename = "row-limit", default = "default_row_limit")]
    #[validate(range(min = 1))]
    pub row_limit: usize,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
            strategy: LoadStrategy::default(),
            chunk_size: default_chunk_size(),
            row_limit: default_row_limit(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Validate)]
pub struct TableConfig {
    #[serde(rename = "page-size", default = "default_page_size")]
    #[validate(range(min = 1))]
    pub page_size: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ExportConfig {
    #[serde(rename = "output-dir", default = "default_export_dir")]
    pub output_dir: String,
    #[serde(default = "default_export_title")]
    pub title: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_export_dir(),
            title: default_export_title(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PresetConfig {
    #[serde(default = "default_presets_path")]
    pub path: String,
}

impl Default for PresetConfig {
    fn default() -> Self {
        Self {
            path: default_presets_path(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default, Validate)]
pub struct AppConfig {
    #[serde(default)]
    #[validate(nested)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    #[validate(nested)]
    pub quality: QualityConfig,
    #[serde(default)]
    #[validate(nested)]
    pub table: TableConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub presets: PresetConfig,
}

fn default_dataset_path() -> String {
    "data/forbes_dataset.csv".to_string()
}
fn default_chunk_size() -> usize {
    500
}
fn default_row_limit() -> usize {
    1000
}
fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}
fn default_export_dir() -> String {
    "exports".to_string()
}
fn default_export_title() -> String {
    "Export Data".to_string()
}
fn default_presets_path() -> String {
    ".wealthscope/presets.json".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_gives_defaults() -> anyhow::Result<()> {
        let config: AppConfig = serde_yaml::from_str("{}")?;
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.dataset.chunk_size, 500);
        assert_eq!(config.dataset.row_limit, 1000);
        assert_eq!(config.table.page_size, 50);
        Ok(())
    }

    #[test]
    fn test_kebab_case_keys() -> anyhow::Result<()> {
        let yaml = "dataset:\n  path: forbes.csv\n  strategy: bounded\n  row-limit: 10\ntable:\n  page-size: 25\n";
        let config: AppConfig = serde_yaml::from_str(yaml)?;
        assert_eq!(config.dataset.path, "forbes.csv");
        assert_eq!(config.dataset.strategy, LoadStrategy::Bounded);
        assert_eq!(config.dataset.row_limit, 10);
        assert_eq!(config.table.page_size, 25);
        Ok(())
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let config = AppConfig {
            table: TableConfig { page_size: 0 },
            ..Default::default()
        };
        assert!(config.validate().is_err());
        assert!(AppConfig::default().validate().is_ok());
    }
}
