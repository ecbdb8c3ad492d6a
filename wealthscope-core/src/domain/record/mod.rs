// wealthscope-core/src/domain/record/mod.rs

pub mod billionaire;
pub mod field;
pub mod issue;

pub use billionaire::{BillionaireRecord, FieldValue, RawRow, RecordFields};
pub use field::RecordField;
pub use issue::{DataQualityIssue, IssueType, Severity, ValidationStatus};
