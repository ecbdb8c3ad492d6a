// wealthscope/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, PresetAction};
use commands::export::ExportRequest;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Setup Logging (Tracing)
    // RUST_LOG=debug wealthscope overview to see loader progress
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let global = &cli.global;

    match cli.command {
        Commands::Overview => commands::overview::execute(global).await?,

        Commands::Browse {
            filters,
            sort,
            page,
            page_size,
        } => commands::browse::execute(global, &filters, &sort, page, page_size).await?,

        Commands::Find { query, limit } => commands::find::execute(global, &query, limit).await?,

        Commands::Quality { issues } => commands::quality::execute(global, issues).await?,

        Commands::Charts {
            kind,
            sort_by,
            top,
            csv,
        } => commands::charts::execute(global, kind, sort_by, top, csv.as_deref()).await?,

        Commands::Export {
            filters,
            sort,
            format,
            columns,
            all_columns,
            no_quality_flags,
            exclude_errors,
            validation_column,
            title,
            output_dir,
        } => {
            let request = ExportRequest {
                format,
                columns,
                all_columns,
                no_quality_flags,
                exclude_errors,
                validation_column,
                title,
                output_dir,
            };
            commands::export::execute(global, &filters, &sort, request).await?
        }

        Commands::Presets { action } => match action {
            PresetAction::List => commands::presets::list(global)?,
            PresetAction::Save {
                name,
                description,
                filters,
            } => commands::presets::save(global, &name, &description, &filters)?,
        },
    }

    Ok(())
}
