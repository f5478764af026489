use crate::cli::{Cli, OutputMode};
use crate::input::{CsvColumns, TrendRecord, collect_records, load_csv_records};
use crate::report::{HtmlReportContext, save_html_report};
use crate::summary::{SummaryContext, print_fragments, print_summary};
use anyhow::{Context, Result};
use chrono::Local;
use std::path::Path;
use tokio::fs;
use trendmark::config::load_config;
use trendmark::{Trend, TrendConfig};

mod cli;
mod formatting;
mod input;
mod report;
mod summary;

#[tokio::main]
async fn main() -> Result<()> {
    let mut cli = Cli::parse_args(std::env::args_os()).unwrap_or_else(|err| err.exit());

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Some(command) = cli.command.take() {
        crate::cli::handle_command(command)?;
        return Ok(());
    }

    let Cli {
        values,
        input,
        column,
        label_column,
        config,
        overrides,
        output,
        save_html,
        minify,
        ..
    } = cli;

    let run_started_at = Local::now();

    let base_config = match config.as_deref() {
        Some(path) => load_config(path).await?,
        None => TrendConfig::default(),
    };
    let trend_config = overrides.apply(base_config);

    let csv_records = match input.as_deref() {
        Some(path) => {
            let columns = CsvColumns {
                value: &column,
                label: &label_column,
            };
            Some(load_csv_records(path, &columns).await?)
        }
        None => None,
    };
    let records = collect_records(values, csv_records)?;

    let rows: Vec<(TrendRecord, Trend)> = records
        .into_iter()
        .map(|record| {
            let trend = trendmark::format(record.value, Some(&trend_config));
            (record, trend)
        })
        .collect();

    if let Some(path) = save_html.as_ref() {
        let html_context = HtmlReportContext {
            run_started_at: &run_started_at,
            rows: &rows,
            minify,
        };
        save_html_report(path.as_path(), &html_context).await?;
    }

    match output {
        OutputMode::Terminal => print_summary(&SummaryContext {
            rows: &rows,
            html: save_html.as_deref(),
        }),
        OutputMode::Html => print_fragments(&rows),
    }

    Ok(())
}

pub(crate) async fn write_output_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    fs::write(path, bytes)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;

    Ok(())
}
