// wealthscope-core/src/domain/quality/annotator.rs

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::quality::config::{IssueRates, QualityConfig, QualityMode, QualityProfile};
use crate::domain::quality::rules;
use crate::domain::record::{
    BillionaireRecord, DataQualityIssue, IssueType, RawRow, RecordField, RecordFields, Severity,
};

/// Rewrites a well-formed "$219.0 B" into the formats seen in messy exports.
/// Only the first occurrence of each pattern is replaced.
const CURRENCY_CORRUPTIONS: [fn(&str) -> String; 4] = [
    trailing_currency,
    iso_currency_prefix,
    spelled_out_billion,
    decimal_comma,
];

fn trailing_currency(s: &str) -> String {
    s.replacen('$', "", 1).replacen('B', "B$", 1)
}

fn iso_currency_prefix(s: &str) -> String {
    s.replacen('$', "USD ", 1).replacen(" B", "B", 1)
}

fn spelled_out_billion(s: &str) -> String {
    s.replacen('$', "", 1).replacen('B', " billion", 1)
}

fn decimal_comma(s: &str) -> String {
    s.replacen('.', ",", 1)
}

const MISSING_CANDIDATES: [RecordField; 3] = [
    RecordField::Change,
    RecordField::PercentageChange,
    RecordField::Age,
];

/// Turns raw rows into annotated records.
///
/// The random source is injected so that a fixed seed always yields the same
/// issues for the same input, in the same order.
pub struct QualityAnnotator<R> {
    rng: R,
    mode: QualityMode,
    profile: QualityProfile,
    rates: IssueRates,
}

impl QualityAnnotator<StdRng> {
    pub fn from_config(config: &QualityConfig) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(config.seed))
    }
}

impl<R: Rng> QualityAnnotator<R> {
    pub fn with_rng(config: &QualityConfig, rng: R) -> Self {
        Self {
            rng,
            mode: config.mode,
            profile: config.profile,
            rates: config.effective_rates(),
        }
    }

    pub fn annotate(&mut self, raw: &RawRow) -> BillionaireRecord {
        let mut fields = RecordFields::from_raw(raw);
        let issues = match self.mode {
            QualityMode::Simulated => self.simulate(&mut fields),
            QualityMode::Rules => rules::validate(&fields),
            QualityMode::Off => Vec::new(),
        };
        BillionaireRecord::new(fields, issues)
    }

    fn draw(&mut self, probability: f64) -> bool {
        self.rng.r#gen::<f64>() < probability
    }

    // Draw order is fixed: currency, encoding, missing, source format.
    fn simulate(&mut self, fields: &mut RecordFields) -> Vec<DataQualityIssue> {
        let mut issues = Vec::new();
        let standard = self.profile == QualityProfile::Standard;

        // 1. Currency format
        if self.draw(self.rates.currency)
            && fields.net_worth.contains('$')
            && fields.net_worth.contains('B')
        {
            if standard {
                let original = fields.net_worth.clone();
                let variant = self.rng.gen_range(0..CURRENCY_CORRUPTIONS.len());
                fields.net_worth = CURRENCY_CORRUPTIONS[variant](&original);
                issues.push(
                    DataQualityIssue::new(
                        RecordField::NetWorth,
                        IssueType::Parsing,
                        Severity::High,
                        "Currency format inconsistency detected",
                    )
                    .with_suggestion(format!("Convert to standard format: {}", original)),
                );
            } else {
                issues.push(
                    DataQualityIssue::new(
                        RecordField::NetWorth,
                        IssueType::Parsing,
                        Severity::High,
                        "Currency format issue",
                    )
                    .with_suggestion("Review format"),
                );
            }
        }

        // 2. Character encoding
        let accents: &[char] = if standard {
            &['é', 'ñ', 'ü', 'ö']
        } else {
            &['é', 'ñ']
        };
        if self.draw(self.rates.encoding) && fields.name.contains(accents) {
            let issue = if standard {
                DataQualityIssue::new(
                    RecordField::Name,
                    IssueType::Encoding,
                    Severity::Medium,
                    "Character encoding issue detected",
                )
                .with_suggestion(format!("Correct encoding: {}", fields.name))
            } else {
                DataQualityIssue::new(
                    RecordField::Name,
                    IssueType::Encoding,
                    Severity::Medium,
                    "Encoding issue",
                )
                .with_suggestion("Check character encoding")
            };
            issues.push(issue);
        }

        // 3. Missing data: only a picked, present age is reported
        if self.draw(self.rates.missing) {
            let picked = MISSING_CANDIDATES[self.rng.gen_range(0..MISSING_CANDIDATES.len())];
            if picked == RecordField::Age && fields.age > 0 {
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
        }

        // 4. Separator characters in the source field
        if self.draw(self.rates.source_format) && fields.source.contains(',') {
            issues.push(
                DataQualityIssue::new(
                    RecordField::Source,
                    IssueType::Format,
                    Severity::Low,
                    "Special characters in source field may cause parsing issues",
                )
                .with_suggestion("Review field formatting"),
            );
        }

        issues
    }
}
