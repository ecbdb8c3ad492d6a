// wealthscope-core/src/infrastructure/source/file.rs

use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, instrument};

use crate::error::WealthscopeError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::DatasetSource;

/// Reads the dataset from a local CSV file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DatasetSource for FileSource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn fetch_text(&self) -> Result<String, WealthscopeError> {
        if !tokio::fs::try_exists(&self.path).await.unwrap_or(false) {
            return Err(InfrastructureError::DatasetNotFound(self.describe()).into());
        }
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(InfrastructureError::Io)?;
        debug!(bytes = text.len(), "Dataset read");
        Ok(text)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
