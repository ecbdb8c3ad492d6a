// wealthscope/src/commands/overview.rs
//
// USE CASE: Headline numbers for the loaded dataset.

use comfy_table::Cell;

use crate::cli::GlobalArgs;
use crate::commands::{load_config, load_records, new_table};
use wealthscope_core::application::DatasetOverview;

pub async fn execute(global: &GlobalArgs) -> anyhow::Result<()> {
    let config = load_config(global)?;
    let records = load_records(&config).await?;
    let overview = DatasetOverview::build(&records);

    println!("\n📊 Forbes Billionaires ({})", config.dataset.path);

    let mut table = new_table();
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec![
        Cell::new("Total Billionaires"),
        Cell::new(overview.total_records),
    ]);
    table.add_row(vec![Cell::new("Countries"), Cell::new(overview.countries)]);
    table.add_row(vec![Cell::new("Industries"), Cell::new(overview.industries)]);
    table.add_row(vec![
        Cell::new("Age Range"),
        Cell::new(match overview.age_range {
            Some((lo, hi)) => format!("{lo} - {hi}"),
            None => "n/a".to_string(),
        }),
    ]);
    table.add_row(vec![
        Cell::new("Net Worth Range"),
        Cell::new(overview.net_worth_label()),
    ]);
    let badge = if overview.quality_is_healthy() { "✅" } else { "⚠️" };
    table.add_row(vec![
        Cell::new("Data Quality"),
        Cell::new(format!("{} {}%", badge, overview.quality.quality_score)),
    ]);
    println!("{table}");

    if !overview.top_countries.is_empty() {
        let mut top = new_table();
        top.set_header(vec!["#", "Country", "Billionaires"]);
        for (i, (country, count)) in overview.top_countries.iter().enumerate() {
            top.add_row(vec![
                Cell::new(i + 1),
                Cell::new(country),
                Cell::new(count),
            ]);
        }
        println!("\n🌍 Top Countries\n{top}");
    }

    Ok(())
}
