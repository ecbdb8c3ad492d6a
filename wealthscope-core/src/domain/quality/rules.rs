// wealthscope-core/src/domain/quality/rules.rs

use regex::Regex;
use std::sync::OnceLock;

use crate::domain::record::{DataQualityIssue, IssueType, RecordField, RecordFields, Severity};

fn net_worth_format() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // Hardcoded pattern; the fallback never matches anything
        Regex::new(r"^\$\d+(\.\d+)? B$")
            .unwrap_or_else(|_| Regex::new("$^").unwrap_or_else(|_| unreachable!()))
    })
}

/// Deterministic checks over the typed values of a record.
pub fn validate(fields: &RecordFields) -> Vec<DataQualityIssue> {
    let mut issues = Vec::new();

    if fields.net_worth.trim().is_empty() {
        issues.push(
            DataQualityIssue::new(
                RecordField::NetWorth,
                IssueType::Missing,
                Severity::High,
                "Net worth is missing",
            )
            .with_suggestion("Fill in the value from the source dataset"),
        );
    } else if !net_worth_format().is_match(&fields.net_worth) {
        issues.push(
            DataQualityIssue::new(
                RecordField::NetWorth,
                IssueType::Parsing,
                Severity::High,
                "Currency format inconsistency detected",
            )
            .with_suggestion("Convert to standard format: $<amount> B"),
        );
    }

    // UTF-8 text decoded as Latin-1 shows up as "Ã" followed by another byte
    if fields.name.contains('Ã') {
        issues.push(
            DataQualityIssue::new(
                RecordField::Name,
                IssueType::Encoding,
                Severity::Medium,
                "Character encoding issue detected",
            )
            .with_suggestion("Re-read the file as UTF-8"),
        );
    }

    if fields.age == 0 {
        issues.push(
            DataQualityIssue::new(
                RecordField::Age,
                IssueType::Missing,
                Severity::Low,
                "Age data missing or invalid",
            )
            .with_suggestion("Verify age information from source"),
        );
    }

    if fields.country.trim().is_empty() {
        issues.push(DataQualityIssue::new(
            RecordField::Country,
            IssueType::Missing,
            Severity::Medium,
            "Country/Territory is missing",
        ));
    }

    issues
}
