// wealthscope/src/commands/charts.rs
//
// USE CASE: Chart groupings as tables, optionally saved as CSV.

use anyhow::Context;
use comfy_table::{Cell, Table};
use std::path::Path;

use crate::cli::{ChartKind, ChartSortArg, GlobalArgs};
use crate::commands::{load_config, load_records, new_table};
use wealthscope_core::domain::stats::charts;
use wealthscope_core::infrastructure::export::render_chart_csv;
use wealthscope_core::infrastructure::fs::atomic_write;

pub async fn execute(
    global: &GlobalArgs,
    kind: ChartKind,
    sort_by: ChartSortArg,
    top: usize,
    csv: Option<&Path>,
) -> anyhow::Result<()> {
    let config = load_config(global)?;
    let records = load_records(&config).await?;

    let (table, bytes) = match kind {
        ChartKind::Geographic => {
            let points = charts::geographic(&records, sort_by.into(), top);
            let mut table = header(&["Country", "Billionaires", "Total ($B)", "Avg ($B)", "Avg Age"]);
            for p in &points {
                table.add_row(vec![
                    Cell::new(&p.name),
                    Cell::new(p.billionaires),
                    Cell::new(p.total_wealth),
                    Cell::new(p.avg_wealth),
                    Cell::new(p.avg_age),
                ]);
            }
            (table, csv.map(|_| render_chart_csv(&points)).transpose()?)
        }
        ChartKind::Demographics => {
            let points = charts::demographics(&records);
            let mut table = header(&["Age Group", "Count", "Avg Wealth ($B)", "%"]);
            for p in &points {
                table.add_row(vec![
                    Cell::new(&p.name),
                    Cell::new(p.count),
                    Cell::new(p.avg_wealth),
                    Cell::new(p.percentage),
                ]);
            }
            (table, csv.map(|_| render_chart_csv(&points)).transpose()?)
        }
        ChartKind::Wealth => {
            let points = charts::wealth_distribution(&records);
            let mut table = header(&["Range", "Count", "Total ($B)", "Avg Age", "%"]);
            for p in &points {
                table.add_row(vec![
                    Cell::new(&p.name),
                    Cell::new(p.count),
                    Cell::new(p.total_wealth),
                    Cell::new(p.avg_age),
                    Cell::new(p.percentage),
                ]);
            }
            (table, csv.map(|_| render_chart_csv(&points)).transpose()?)
        }
        ChartKind::Trends => {
            let points = charts::trends(&records, top);
            let mut table = header(&["Industry", "Billionaires", "Total ($B)", "Avg Change %", "Growth", "Decline"]);
            for p in &points {
                table.add_row(vec![
                    Cell::new(&p.name),
                    Cell::new(p.billionaires),
                    Cell::new(p.total_wealth),
                    Cell::new(format!("{:.2}", p.avg_change)),
                    Cell::new(p.growth),
                    Cell::new(p.decline),
                ]);
            }
            (table, csv.map(|_| render_chart_csv(&points)).transpose()?)
        }
    };

    println!("{table}");

    if let (Some(path), Some(bytes)) = (csv, bytes) {
        atomic_write(path, bytes)
            .with_context(|| format!("Failed to write chart data to {}", path.display()))?;
        println!("💾 Chart data written to {}", path.display());
    }
    Ok(())
}

fn header(columns: &[&str]) -> Table {
    let mut table = new_table();
    table.set_header(columns.to_vec());
    table
}
