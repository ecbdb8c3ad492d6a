// wealthscope/src/commands/browse.rs
//
// USE CASE: Filtered, sorted, paginated table of records.

use comfy_table::Cell;

use crate::cli::{FilterArgs, GlobalArgs, SortArgs};
use crate::commands::{load_config, load_records, new_table, resolve_criteria};
use wealthscope_core::application::TableView;
use wealthscope_core::domain::record::{RecordField, ValidationStatus};

const COLUMNS: [RecordField; 7] = [
    RecordField::Rank,
    RecordField::Name,
    RecordField::NetWorth,
    RecordField::Age,
    RecordField::Country,
    RecordField::Source,
    RecordField::PercentageChange,
];

pub async fn execute(
    global: &GlobalArgs,
    filters: &FilterArgs,
    sort: &SortArgs,
    page: usize,
    page_size: Option<usize>,
) -> anyhow::Result<()> {
    let config = load_config(global)?;
    let records = load_records(&config).await?;

    let mut view = TableView::new(page_size.unwrap_or(config.table.page_size));
    view.set_criteria(resolve_criteria(&config, filters)?)?;
    view.set_sort(sort.to_config());
    view.set_page(page);

    let page = view.view(&records);
    let sort = view.sort();

    let mut table = new_table();
    let mut header: Vec<String> = COLUMNS
        .iter()
        .map(|c| {
            if *c == sort.field {
                format!("{} {}", c.label(), sort.direction.arrow())
            } else {
                c.label().to_string()
            }
        })
        .collect();
    header.push("Status".to_string());
    table.set_header(header);

    for record in &page.items {
        let mut row: Vec<Cell> = COLUMNS
            .iter()
            .map(|c| Cell::new(record.value(*c).render()))
            .collect();
        let status = match record.validation_status() {
            ValidationStatus::Valid => "✓",
            ValidationStatus::Warning => "⚠",
            ValidationStatus::Error => "✗",
        };
        row.push(Cell::new(status));
        table.add_row(row);
    }

    println!("{table}");
    if page.items.is_empty() {
        println!("No records match the current filters.");
    } else {
        println!(
            "Showing {} to {} of {} results (page {} of {}, {} filter(s) active)",
            page.first_index(),
            page.last_index(),
            page.total_records,
            page.current_page,
            page.total_pages,
            view.criteria().active_count()
        );
    }
    Ok(())
}
