// wealthscope-core/src/infrastructure/export/format.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;
use crate::domain::record::{BillionaireRecord, RecordField, ValidationStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
    /// CSV bytes under an `.xlsx` name. Spreadsheet tools sniff the content.
    Excel,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Excel => "xlsx",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Excel => "excel",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "excel" | "xlsx" => Ok(Self::Excel),
            other => Err(DomainError::UnknownOption(format!(
                "export format '{other}' (expected csv, json or excel)"
            ))),
        }
    }
}

/// What goes into an export file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// Output order follows this list.
    pub columns: Vec<RecordField>,
    /// Adds `dataQualityFlags` (`field:type:severity` joined by `;`).
    pub include_data_quality: bool,
    pub exclude_error_records: bool,
    /// Adds `validationStatus`, `hasIssues` and `issueCount`.
    pub add_validation_column: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            columns: RecordField::essentials(),
            include_data_quality: true,
            exclude_error_records: false,
            add_validation_column: false,
        }
    }
}

impl ExportOptions {
    pub fn all_columns(mut self) -> Self {
        self.columns = RecordField::ALL.to_vec();
        self
    }

    /// Records that survive `exclude_error_records`, in input order.
    pub fn select<'a>(&self, records: &[&'a BillionaireRecord]) -> Vec<&'a BillionaireRecord> {
        records
            .iter()
            .copied()
            .filter(|r| {
                !(self.exclude_error_records && r.validation_status() == ValidationStatus::Error)
            })
            .collect()
    }

    /// Column header, in output order.
    pub fn header(&self) -> Vec<&'static str> {
        let mut header: Vec<&'static str> = self.columns.iter().map(|c| c.key()).collect();
        if self.include_data_quality {
            header.push("dataQualityFlags");
        }
        if self.add_validation_column {
            header.extend(["validationStatus", "hasIssues", "issueCount"]);
        }
        header
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_extensions() -> anyhow::Result<()> {
        assert_eq!("CSV".parse::<ExportFormat>()?.extension(), "csv");
        assert_eq!("excel".parse::<ExportFormat>()?.extension(), "xlsx");
        assert_eq!("json".parse::<ExportFormat>()?.extension(), "json");
        assert!("pdf".parse::<ExportFormat>().is_err());
        Ok(())
    }

    #[test]
    fn test_default_header() {
        let options = ExportOptions::default();
        assert_eq!(
            options.header(),
            vec!["rank", "name", "netWorth", "dataQualityFlags"]
        );
    }

    #[test]
    fn test_header_with_validation_columns() {
        let options = ExportOptions {
            columns: vec![RecordField::Name],
            include_data_quality: false,
            add_validation_column: true,
            ..Default::default()
        };
        assert_eq!(
            options.header(),
            vec!["name", "validationStatus", "hasIssues", "issueCount"]
        );
    }
}
