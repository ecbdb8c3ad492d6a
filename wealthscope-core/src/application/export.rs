// wealthscope-core/src/application/export.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{error, info, instrument};

use crate::domain::record::{BillionaireRecord, ValidationStatus};
use crate::error::WealthscopeError;
use crate::infrastructure::export::{ExportInfo, ExportOptions, export_filename, render};
use crate::infrastructure::fs::atomic_write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportStatus {
    #[default]
    Idle,
    Processing,
    Complete,
    Error,
}

/// Counts shown before an export runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSummary {
    pub records_to_export: usize,
    pub error_records: usize,
    pub original_dataset: usize,
}

/// One export dialog: options, target directory and the status of the last run.
/// A failed export is reported once and is not retried.
#[derive(Debug, Clone)]
pub struct ExportSession {
    output_dir: PathBuf,
    title: String,
    options: ExportOptions,
    status: ExportStatus,
    last_file: Option<PathBuf>,
}

impl ExportSession {
    pub fn new(output_dir: impl Into<PathBuf>, title: impl Into<String>, options: ExportOptions) -> Self {
        Self {
            output_dir: output_dir.into(),
            title: title.into(),
            options,
            status: ExportStatus::Idle,
            last_file: None,
        }
    }

    pub fn status(&self) -> ExportStatus {
        self.status
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    pub fn last_file(&self) -> Option<&Path> {
        self.last_file.as_deref()
    }

    /// `filtered` is `None` when no filter is active; the whole dataset is exported then.
    pub fn summary(
        &self,
        dataset: &[BillionaireRecord],
        filtered: Option<&[&BillionaireRecord]>,
    ) -> ExportSummary {
        let scope = scope(dataset, filtered);
        ExportSummary {
            records_to_export: self.options.select(&scope).len(),
            error_records: scope
                .iter()
                .filter(|r| r.validation_status() == ValidationStatus::Error)
                .count(),
            original_dataset: dataset.len(),
        }
    }

    /// Writes one export file and returns its path.
    #[instrument(skip(self, dataset, filtered), fields(format = %self.options.format))]
    pub fn export(
        &mut self,
        dataset: &[BillionaireRecord],
        filtered: Option<&[&BillionaireRecord]>,
        now: DateTime<Utc>,
    ) -> Result<PathBuf, WealthscopeError> {
        self.status = ExportStatus::Processing;

        match self.write(dataset, filtered, now) {
            Ok(path) => {
                info!(path = %path.display(), "Export completed");
                self.status = ExportStatus::Complete;
                self.last_file = Some(path.clone());
                Ok(path)
            }
            Err(e) => {
                error!(error = %e, "Export failed");
                self.status = ExportStatus::Error;
                Err(e)
            }
        }
    }

    fn write(
        &self,
        dataset: &[BillionaireRecord],
        filtered: Option<&[&BillionaireRecord]>,
        now: DateTime<Utc>,
    ) -> Result<PathBuf, WealthscopeError> {
        let scope = scope(dataset, filtered);
        let records = self.options.select(&scope);
        let info = ExportInfo::new(
            &self.title,
            &self.options,
            records.len(),
            dataset.len(),
            filtered.is_some(),
            now,
        );

        let bytes = render(&records, &info)?;
        let path = self
            .output_dir
            .join(export_filename(self.options.format, now));
        atomic_write(&path, bytes)?;
        Ok(path)
    }
}

fn scope<'a>(
    dataset: &'a [BillionaireRecord],
    filtered: Option<&[&'a BillionaireRecord]>,
) -> Vec<&'a BillionaireRecord> {
    match filtered {
        Some(rows) => rows.to_vec(),
        None => dataset.iter().collect(),
    }
}
