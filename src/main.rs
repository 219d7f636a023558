mod cli;
mod render;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use cli::{CliArgs, OutputFormat};
use sales_analytics::SalesError;
use sales_analytics::ingestion::{ingest_from_path, IngestionOptions, LogObserver};
use sales_analytics::report::SalesReport;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = CliArgs::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> anyhow::Result<()> {
    let options = IngestionOptions {
        delimiter: args.delimiter,
        observer: Some(Arc::new(LogObserver)),
        ..Default::default()
    };

    let outcome = ingest_from_path(&args.input, &options)?;
    if outcome.records.is_empty() {
        return Err(SalesError::NoUsableRows {
            skipped: outcome.skipped(),
        }
        .into());
    }
    log::debug!(
        "ingested {} record(s), skipped {}",
        outcome.records.len(),
        outcome.skipped()
    );

    let report = SalesReport::from_outcome(&outcome);

    let text = match args.format {
        OutputFormat::Table => render::render_report(&report).context("rendering report")?,
        OutputFormat::Json => report.to_json().context("serializing report")?,
    };
    println!("{}", text.trim_end());
    Ok(())
}
