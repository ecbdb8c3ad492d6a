// wealthscope-core/src/infrastructure/export/row.rs

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::record::{BillionaireRecord, FieldValue};
use crate::infrastructure::export::format::ExportOptions;

/// One record projected through the export options. Keys keep the order of
/// [`ExportOptions::header`].
#[derive(Debug, Clone, Copy)]
pub struct ExportRow<'a> {
    record: &'a BillionaireRecord,
    options: &'a ExportOptions,
}

impl<'a> ExportRow<'a> {
    pub fn new(record: &'a BillionaireRecord, options: &'a ExportOptions) -> Self {
        Self { record, options }
    }

    pub fn quality_flags(&self) -> String {
        self.record
            .issues()
            .iter()
            .map(|issue| issue.flag())
            .collect::<Vec<_>>()
            .join(";")
    }

    /// Flat string cells for CSV. Absent optional values become empty cells.
    pub fn cells(&self) -> Vec<String> {
        let mut cells: Vec<String> = self
            .options
            .columns
            .iter()
            .map(|c| self.record.value(*c).render())
            .collect();
        if self.options.include_data_quality {
            cells.push(self.quality_flags());
        }
        if self.options.add_validation_column {
            let issues = self.record.issues().len();
            cells.push(self.record.validation_status().to_string());
            cells.push((issues > 0).to_string());
            cells.push(issues.to_string());
        }
        cells
    }
}

impl Serialize for ExportRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for column in &self.options.columns {
            // Absent optional values are left out of the object
            match self.record.value(*column) {
                FieldValue::Int(v) => map.serialize_entry(column.key(), &v)?,
                FieldValue::Text(s) => map.serialize_entry(column.key(), s)?,
                FieldValue::Flag(b) => map.serialize_entry(column.key(), &b)?,
                FieldValue::Empty => {}
            }
        }
        if self.options.include_data_quality {
            map.serialize_entry("dataQualityFlags", &self.quality_flags())?;
        }
        if self.options.add_validation_column {
            let issues = self.record.issues().len();
            map.serialize_entry("validationStatus", &self.record.validation_status())?;
            map.serialize_entry("hasIssues", &(issues > 0))?;
            map.serialize_entry("issueCount", &issues)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::{
        DataQualityIssue, IssueType, RecordField, RecordFields, Severity,
    };

    fn record() -> BillionaireRecord {
        BillionaireRecord::new(
            RecordFields {
                rank: 3,
                name: "Bernard Arnault & family".into(),
                net_worth: "$158.0 B".into(),
                age: 73,
                country: "France".into(),
                ..Default::default()
            },
            vec![
                DataQualityIssue::new(
                    RecordField::NetWorth,
                    IssueType::Parsing,
                    Severity::High,
                    "Currency format issue",
                ),
                DataQualityIssue::new(
                    RecordField::Name,
                    IssueType::Encoding,
                    Severity::Medium,
                    "Special characters",
                ),
            ],
        )
    }

    #[test]
    fn test_quality_flags_are_joined() {
        let record = record();
        let options = ExportOptions::default();
        insta::assert_snapshot!(
            ExportRow::new(&record, &options).quality_flags(),
            @"netWorth:parsing:high;name:encoding:medium"
        );
    }

    #[test]
    fn test_cells_follow_header_order() {
        let record = record();
        let options = ExportOptions {
            columns: vec![RecordField::Country, RecordField::Rank, RecordField::City],
            include_data_quality: false,
            add_validation_column: true,
            ..Default::default()
        };
        let row = ExportRow::new(&record, &options);
        assert_eq!(
            row.cells(),
            vec!["France", "3", "", "error", "true", "2"]
        );
        assert_eq!(row.cells().len(), options.header().len());
    }

    #[test]
    fn test_json_object_skips_absent_optionals() -> anyhow::Result<()> {
        let record = record();
        let options = ExportOptions {
            columns: vec![RecordField::Rank, RecordField::City, RecordField::Age],
            include_data_quality: false,
            ..Default::default()
        };
        let json = serde_json::to_value(ExportRow::new(&record, &options))?;
        assert_eq!(json, serde_json::json!({ "rank": 3, "age": 73 }));
        Ok(())
    }
}
