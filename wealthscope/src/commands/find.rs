// wealthscope/src/commands/find.rs
//
// USE CASE: Record lookup with search suggestions as a fallback.

use comfy_table::Cell;

use crate::cli::GlobalArgs;
use crate::commands::{load_config, load_records, new_table};
use wealthscope_core::domain::record::RecordField;
use wealthscope_core::domain::stats::{find_record, industry_for, search_suggestions};

pub async fn execute(global: &GlobalArgs, query: &str, limit: usize) -> anyhow::Result<()> {
    let config = load_config(global)?;
    let records = load_records(&config).await?;

    if let Some(record) = find_record(&records, query) {
        let mut table = new_table();
        table.set_header(vec!["Field", "Value"]);
        for field in RecordField::ALL {
            let value = record.value(field).render();
            if !value.is_empty() {
                table.add_row(vec![Cell::new(field.label()), Cell::new(value)]);
            }
        }
        table.add_row(vec![
            Cell::new("Industry (derived)"),
            Cell::new(industry_for(record.source())),
        ]);
        table.add_row(vec![
            Cell::new("Validation"),
            Cell::new(record.validation_status()),
        ]);
        println!("{table}");

        for issue in record.issues() {
            println!(
                "  • [{}] {}: {}{}",
                issue.severity,
                issue.field.label(),
                issue.description,
                issue
                    .suggestion
                    .as_deref()
                    .map(|s| format!(" ({s})"))
                    .unwrap_or_default()
            );
        }
        return Ok(());
    }

    let suggestions = search_suggestions(&records, query, limit);
    if suggestions.is_empty() {
        println!("No billionaire, source or country matches '{}'.", query);
    } else {
        println!("No exact match for '{}'. Did you mean:", query);
        for suggestion in suggestions {
            println!("  ➜ {}", suggestion);
        }
    }
    Ok(())
}
