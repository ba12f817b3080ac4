#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use clap::Parser;
use connect_report::aggregate::aggregate;
use connect_report::cli::{Cli, OutputFormat};
use connect_report::config;
use connect_report::exporters::{CsvConverter, JsonlConverter};
use connect_report::parsing::{self, RawResponse};
use connect_report::report::ReportMatrix;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    config::load_configuration().context("Failed to load configuration")?;

    let cli = Cli::parse();

    let payload = std::fs::read(&cli.input)
        .with_context(|| format!("Failed to read input file {}", cli.input.display()))?;
    let response: RawResponse =
        serde_json::from_slice(&payload).context("Failed to parse raw metric response")?;

    let records = parsing::normalize(&response)?;
    let cells = aggregate(records);
    let matrix = ReportMatrix::from_cells(cells)?;
    if matrix.is_empty() {
        tracing::warn!("no metric data in input, writing an empty report");
    }
    tracing::info!(
        rows = matrix.rows().len(),
        columns = matrix.columns().len(),
        "built report matrix"
    );

    let rendered = match cli.format {
        OutputFormat::Csv => CsvConverter::to_csv(&matrix)?,
        OutputFormat::Jsonl => JsonlConverter::to_jsonl(&matrix)?,
    };

    let output_path = cli.output_path()?;
    std::fs::write(&output_path, rendered)
        .with_context(|| format!("Failed to write report to {}", output_path.display()))?;
    tracing::info!(path = %output_path.display(), "report written");

    Ok(())
}
