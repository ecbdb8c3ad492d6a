// wealthscope-core/src/infrastructure/export/writer.rs

use chrono::{DateTime, SecondsFormat, Utc};
use csv::{Terminator, WriterBuilder};
use serde::Serialize;

use crate::domain::record::BillionaireRecord;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::export::format::{ExportFormat, ExportOptions};
use crate::infrastructure::export::row::ExportRow;

/// Metadata block at the top of a JSON export.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportInfo<'a> {
    pub title: &'a str,
    pub exported_at: String,
    pub total_records: usize,
    pub original_dataset: usize,
    /// "Applied" or "None".
    pub filters: &'static str,
    pub options: &'a ExportOptions,
}

impl<'a> ExportInfo<'a> {
    pub fn new(
        title: &'a str,
        options: &'a ExportOptions,
        total_records: usize,
        original_dataset: usize,
        filtered: bool,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            title,
            exported_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            total_records,
            original_dataset,
            filters: if filtered { "Applied" } else { "None" },
            options,
        }
    }
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    #[serde(rename = "exportInfo")]
    export_info: &'a ExportInfo<'a>,
    data: Vec<ExportRow<'a>>,
}

/// `forbes_billionaires_2024-03-05T14-07-09.csv`
pub fn export_filename(format: ExportFormat, now: DateTime<Utc>) -> String {
    format!(
        "forbes_billionaires_{}.{}",
        now.format("%Y-%m-%dT%H-%M-%S"),
        format.extension()
    )
}

/// CSV with CRLF line endings. The header row is written even when there are no records.
pub fn render_csv(
    records: &[&BillionaireRecord],
    options: &ExportOptions,
) -> Result<Vec<u8>, InfrastructureError> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(options.header())?;
    for record in records {
        writer.write_record(ExportRow::new(record, options).cells())?;
    }
    Ok(writer.into_inner()?)
}

/// Pretty printed `{ exportInfo, data }` document.
pub fn render_json(
    records: &[&BillionaireRecord],
    options: &ExportOptions,
    info: &ExportInfo<'_>,
) -> Result<Vec<u8>, InfrastructureError> {
    let document = JsonDocument {
        export_info: info,
        data: records
            .iter()
            .map(|r| ExportRow::new(r, options))
            .collect(),
    };
    Ok(serde_json::to_vec_pretty(&document)?)
}

/// Bytes for the format selected in `info.options`.
pub fn render(
    records: &[&BillionaireRecord],
    info: &ExportInfo<'_>,
) -> Result<Vec<u8>, InfrastructureError> {
    match info.options.format {
        ExportFormat::Csv | ExportFormat::Excel => render_csv(records, info.options),
        ExportFormat::Json => render_json(records, info.options, info),
    }
}
