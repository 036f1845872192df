#![warn(clippy::uninlined_format_args)]

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tally_application::{load_ledger, RunReport, TracingObserver};
use tally_infrastructure::CsvExpenseSource;
use tally_presentation::{ActivityPresenter, BalancePresenter, SettlementPresenter};
use tracing_subscriber::EnvFilter;

/// Shared-expense ledger: net balances, a consistency check, and the
/// transfers that settle all debts.
#[derive(Parser)]
#[command(name = "tally", version)]
struct Cli {
    /// Semicolon-delimited expense file with header
    /// `date;creditor;subject;amount;participants`.
    ledger_file: PathBuf,

    /// How many recent transactions to show.
    #[arg(long, default_value_t = 5)]
    recent: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut source = CsvExpenseSource::new(&cli.ledger_file);
    let load = load_ledger(&mut source, &mut TracingObserver)
        .with_context(|| format!("loading {}", cli.ledger_file.display()))?;

    if !load.rejected.is_empty() {
        tracing::warn!(skipped = load.rejected.len(), "some rows were rejected");
    }

    let report = RunReport::build(&load.ledger, cli.recent);
    if !report.verification.is_valid {
        tracing::warn!(
            total_balance = report.verification.total_balance,
            "ledger failed the conservation check"
        );
    }

    println!("{}", BalancePresenter::render(&report));
    println!("{}", SettlementPresenter::render(&report.settlement));
    println!("{}", ActivityPresenter::render(&report.recent, cli.recent));

    Ok(())
}
