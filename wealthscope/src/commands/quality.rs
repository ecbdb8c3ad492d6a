// wealthscope/src/commands/quality.rs
//
// USE CASE: Data quality report.

use comfy_table::Cell;

use crate::cli::GlobalArgs;
use crate::commands::{load_config, load_records, new_table};
use wealthscope_core::domain::quality::DataQualityMetrics;

pub async fn execute(global: &GlobalArgs, issues: usize) -> anyhow::Result<()> {
    let config = load_config(global)?;
    let records = load_records(&config).await?;
    let metrics = DataQualityMetrics::compute(&records);

    println!(
        "\n✅ Quality score: {}% ({} of {} records valid, mode: {:?})",
        metrics.quality_score, metrics.valid_records, metrics.total_records, config.quality.mode
    );

    let mut summary = new_table();
    summary.set_header(vec!["Breakdown", "Issues"]);
    for (issue_type, count) in &metrics.issues_by_type {
        summary.add_row(vec![Cell::new(format!("type: {issue_type}")), Cell::new(count)]);
    }
    for (severity, count) in &metrics.issues_by_severity {
        summary.add_row(vec![Cell::new(format!("severity: {severity}")), Cell::new(count)]);
    }
    summary.add_row(vec![Cell::new("total"), Cell::new(metrics.total_issues())]);
    println!("{summary}");

    let flagged: Vec<_> = records
        .iter()
        .filter(|r| r.has_parsing_issue())
        .take(issues)
        .collect();
    if flagged.is_empty() {
        return Ok(());
    }

    let shown = flagged.len();
    let mut table = new_table();
    table.set_header(vec!["Rank", "Name", "Status", "Issues"]);
    for record in flagged {
        let details = record
            .issues()
            .iter()
            .map(|i| format!("{} ({})", i.flag(), i.description))
            .collect::<Vec<_>>()
            .join("\n");
        table.add_row(vec![
            Cell::new(record.rank()),
            Cell::new(record.name()),
            Cell::new(record.validation_status()),
            Cell::new(details),
        ]);
    }
    println!(
        "\n⚠️  Records with issues ({} shown of {})\n{table}",
        shown,
        metrics.records_with_issues
    );
    Ok(())
}
