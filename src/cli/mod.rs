use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};

use crate::application::BudgetService;

pub mod render;
mod session;

pub use session::*;

/// Budgetbook - income and expense tracker
#[derive(Parser)]
#[command(name = "budgetbook")]
#[command(about = "Track income and expenses for the month and see what is left")]
#[command(version)]
pub struct Cli {
    /// Enable verbose (debug) logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Delete entries without asking for confirmation
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Month shown in the budget title (YYYY-MM, defaults to the current month)
    #[arg(long)]
    pub month: Option<String>,

    /// Read commands from a file instead of stdin
    #[arg(short, long)]
    pub input: Option<String>,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        init_logging(self.verbose);

        let month = match self.month.as_deref() {
            Some(m) => parse_month(m)?,
            None => Local::now().date_naive(),
        };
        let service = BudgetService::new(month);
        tracing::debug!("starting budget for {}", service.month_label());

        let stdout = io::stdout().lock();
        match self.input.as_deref() {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open input file: {}", path))?;
                Session::new(service, BufReader::new(file), stdout)
                    .assume_yes(self.yes)
                    .run()
            }
            None => {
                let stdin = io::stdin();
                let interactive = stdin.is_terminal();
                Session::new(service, stdin.lock(), stdout)
                    .assume_yes(self.yes)
                    .with_prompt(interactive)
                    .run()
            }
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(format!("budgetbook={level}"))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Parse a `YYYY-MM` month into its first day.
pub fn parse_month(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))
}
