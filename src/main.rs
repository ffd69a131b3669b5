use clap::Parser;
use miette::{IntoDiagnostic, Result};
use nwfee::config;
use nwfee::engine::FeeEngine;
use nwfee::reader::TransactionReader;
use nwfee::writer::FeeWriter;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Fee ruleset YAML file
    rules: PathBuf,

    /// Input transactions CSV file
    input: PathBuf,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays a clean CSV report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let ruleset = config::load_ruleset(&cli.rules).into_diagnostic()?;
    tracing::info!(
        id = %ruleset.id,
        status = %ruleset.status,
        fees = ruleset.fees.len(),
        "ruleset loaded"
    );
    let engine = FeeEngine::new(ruleset);

    // Assess transactions
    let file = File::open(cli.input).into_diagnostic()?;
    let reader = TransactionReader::new(file);

    let stdout = io::stdout();
    let mut writer = FeeWriter::new(stdout.lock());
    for tx_result in reader.transactions() {
        match tx_result {
            Ok(mut tx) => {
                engine.assess(&mut tx);
                writer.write_assessment(&tx).into_diagnostic()?;
            }
            Err(e) => {
                eprintln!("Error reading transaction: {}", e);
            }
        }
    }
    writer.flush().into_diagnostic()?;

    Ok(())
}
