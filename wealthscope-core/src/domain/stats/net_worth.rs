// wealthscope-core/src/domain/stats/net_worth.rs

use regex::Regex;
use std::sync::OnceLock;

fn leading_number() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[\d,]+\.?\d*")
            .unwrap_or_else(|_| Regex::new("$^").unwrap_or_else(|_| unreachable!()))
    })
}

/// Extracts the first numeric token of a formatted amount, in millions.
///
/// `"$219.0 B"` -> 219000.0, `"$5.2 M"` -> 5.2, `"garbage"` -> 0.0.
/// Thousands separators are dropped and any `B` in the string scales by 1000.
pub fn parse_net_worth(net_worth: &str) -> f64 {
    let Some(found) = leading_number().find(net_worth) else {
        return 0.0;
    };
    let Ok(value) = found.as_str().replace(',', "").parse::<f64>() else {
        return 0.0;
    };
    if net_worth.contains('B') {
        value * 1000.0
    } else {
        value
    }
}

/// Leading float of a percentage string such as `"-2.35%"`; 0 when absent.
pub fn parse_percentage(percentage: &str) -> f64 {
    let cleaned = percentage.replace('%', "");
    let trimmed = cleaned.trim();
    let end = trimmed
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || *c == '.' || (*i == 0 && (*c == '-' || *c == '+'))))
        .map_or(trimmed.len(), |(i, _)| i);
    trimmed[..end].parse().unwrap_or(0.0)
}

/// Millions back to a short label: `"$219.0B"` from 1000 up, else `"$5.2M"`.
pub fn format_millions(value: f64) -> String {
    if value >= 1000.0 {
        format!("${:.1}B", value / 1000.0)
    } else {
        format!("${:.1}M", value)
    }
}
