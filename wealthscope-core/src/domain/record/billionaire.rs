// wealthscope-core/src/domain/record/billionaire.rs

use serde::Serialize;

use crate::domain::record::field::RecordField;
use crate::domain::record::issue::{DataQualityIssue, ValidationStatus};

/// One CSV row as read from disk, before typing or annotation.
/// Absent columns are empty strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    pub rank: String,
    pub name: String,
    pub net_worth: String,
    pub change: String,
    pub percentage_change: String,
    pub age: String,
    pub source: String,
    pub country: String,
}

/// Typed values of a record, without the quality metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordFields {
    pub rank: u32,
    pub name: String,
    pub net_worth: String,
    pub change: String,
    pub percentage_change: String,
    pub age: u32,
    pub source: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_made: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<u32>,
}

impl RecordFields {
    /// Types a raw row. Unparsable integers become 0, like the dataset's
    /// own convention for unknown rank/age.
    pub fn from_raw(raw: &RawRow) -> Self {
        Self {
            rank: parse_leading_int(&raw.rank),
            name: raw.name.clone(),
            net_worth: raw.net_worth.clone(),
            change: raw.change.clone(),
            percentage_change: raw.percentage_change.clone(),
            age: parse_leading_int(&raw.age),
            source: raw.source.clone(),
            country: raw.country.clone(),
            ..Default::default()
        }
    }
}

/// A single cell value, as seen by exports and sorting.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Int(u32),
    Text(&'a str),
    Flag(bool),
    Empty,
}

impl FieldValue<'_> {
    pub fn render(&self) -> String {
        match self {
            FieldValue::Int(v) => v.to_string(),
            FieldValue::Text(s) => s.to_string(),
            FieldValue::Flag(b) => b.to_string(),
            FieldValue::Empty => String::new(),
        }
    }
}

/// An annotated dataset row. Built once at load time and never mutated:
/// the validation status is always derived from the attached issues.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillionaireRecord {
    #[serde(flatten)]
    fields: RecordFields,
    has_parsing_issue: bool,
    validation_status: ValidationStatus,
    issues: Vec<DataQualityIssue>,
}

impl BillionaireRecord {
    pub fn new(fields: RecordFields, issues: Vec<DataQualityIssue>) -> Self {
        Self {
            fields,
            has_parsing_issue: !issues.is_empty(),
            validation_status: ValidationStatus::from_issues(&issues),
            issues,
        }
    }

    pub fn fields(&self) -> &RecordFields {
        &self.fields
    }

    pub fn rank(&self) -> u32 {
        self.fields.rank
    }

    pub fn name(&self) -> &str {
        &self.fields.name
    }

    pub fn net_worth(&self) -> &str {
        &self.fields.net_worth
    }

    pub fn change(&self) -> &str {
        &self.fields.change
    }

    pub fn percentage_change(&self) -> &str {
        &self.fields.percentage_change
    }

    pub fn age(&self) -> u32 {
        self.fields.age
    }

    pub fn source(&self) -> &str {
        &self.fields.source
    }

    pub fn country(&self) -> &str {
        &self.fields.country
    }

    pub fn has_parsing_issue(&self) -> bool {
        self.has_parsing_issue
    }

    pub fn validation_status(&self) -> ValidationStatus {
        self.validation_status
    }

    pub fn issues(&self) -> &[DataQualityIssue] {
        &self.issues
    }

    pub fn value(&self, field: RecordField) -> FieldValue<'_> {
        let f = &self.fields;
        match field {
            RecordField::Rank => FieldValue::Int(f.rank),
            RecordField::Name => FieldValue::Text(&f.name),
            RecordField::NetWorth => FieldValue::Text(&f.net_worth),
            RecordField::Change => FieldValue::Text(&f.change),
            RecordField::PercentageChange => FieldValue::Text(&f.percentage_change),
            RecordField::Age => FieldValue::Int(f.age),
            RecordField::Source => FieldValue::Text(&f.source),
            RecordField::Country => FieldValue::Text(&f.country),
            RecordField::Industry => opt_text(&f.industry),
            RecordField::City => opt_text(&f.city),
            RecordField::SelfMade => f.self_made.map_or(FieldValue::Empty, FieldValue::Flag),
            RecordField::Education => opt_text(&f.education),
            RecordField::MaritalStatus => opt_text(&f.marital_status),
            RecordField::Children => f.children.map_or(FieldValue::Empty, FieldValue::Int),
        }
    }
}

fn opt_text(value: &Option<String>) -> FieldValue<'_> {
    value.as_deref().map_or(FieldValue::Empty, FieldValue::Text)
}

/// `parseInt` semantics: optional sign and leading digits, anything after is
/// ignored. Negative or unparsable input yields 0, oversized values saturate.
fn parse_leading_int(raw: &str) -> u32 {
    let digits: String = raw
        .trim()
        .trim_start_matches('+')
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return 0;
    }
    // Only ASCII digits remain, so the sole failure is overflow
    digits.parse().unwrap_or(u32::MAX)
}
