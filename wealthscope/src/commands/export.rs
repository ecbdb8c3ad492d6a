// wealthscope/src/commands/export.rs
//
// USE CASE: Export the (filtered) records to a file.

use std::path::PathBuf;

use crate::cli::{FilterArgs, GlobalArgs, SortArgs};
use crate::commands::{load_config, load_records, resolve_criteria};
use wealthscope_core::application::{ExportSession, TableView};
use wealthscope_core::domain::record::RecordField;
use wealthscope_core::infrastructure::export::{ExportFormat, ExportOptions};

pub struct ExportRequest {
    pub format: ExportFormat,
    pub columns: Vec<RecordField>,
    pub all_columns: bool,
    pub no_quality_flags: bool,
    pub exclude_errors: bool,
    pub validation_column: bool,
    pub title: Option<String>,
    pub output_dir: Option<PathBuf>,
}

impl ExportRequest {
    fn options(&self) -> ExportOptions {
        let mut options = ExportOptions {
            format: self.format,
            include_data_quality: !self.no_quality_flags,
            exclude_error_records: self.exclude_errors,
            add_validation_column: self.validation_column,
            ..Default::default()
        };
        if self.all_columns {
            options = options.all_columns();
        } else if !self.columns.is_empty() {
            options.columns = self.columns.clone();
        }
        options
    }
}

pub async fn execute(
    global: &GlobalArgs,
    filters: &FilterArgs,
    sort: &SortArgs,
    request: ExportRequest,
) -> anyhow::Result<()> {
    let config = load_config(global)?;
    let mut records = load_records(&config).await?;

    let mut view = TableView::new(config.table.page_size);
    view.set_criteria(resolve_criteria(&config, filters)?)?;
    view.set_sort(sort.to_config());
    if view.criteria().is_empty() {
        // Unfiltered exports still follow --sort
        records.sort_by(|a, b| view.sort().compare(a, b));
    }
    let filtered = view.filtered(&records);
    let scope = (!view.criteria().is_empty()).then_some(filtered.as_slice());

    let output_dir = request
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.export.output_dir));
    let title = request
        .title
        .clone()
        .unwrap_or_else(|| config.export.title.clone());
    let mut session = ExportSession::new(output_dir, title, request.options());

    let summary = session.summary(&records, scope);
    println!(
        "📦 Export Summary: {} records to export{}",
        summary.records_to_export,
        if scope.is_some() {
            format!(" (filtered from {} total)", summary.original_dataset)
        } else {
            String::new()
        }
    );
    if summary.error_records > 0 && !session.options().exclude_error_records {
        println!(
            "   {} record(s) with parsing errors included (use --exclude-errors to drop them)",
            summary.error_records
        );
    }

    match session.export(&records, scope, chrono::Utc::now()) {
        Ok(path) => {
            println!("✨ Export completed: {}", path.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Export failed. Please try again.");
            Err(e.into())
        }
    }
}
