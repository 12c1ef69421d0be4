// src/cli.rs
use chrono::Local;
use clap::Parser;
use tracing::info;

use crate::{
    config::{consts::USER_AGENT, options::ScanOptions},
    core::net::HttpTransport,
    error::ScanError,
    progress::{ConsoleReport, Report},
    scan::{RunSummary, Scanner, Stage},
};

/// Google Dorks Scanner - Fetch dorks from Exploit-DB GHDB
#[derive(Parser, Debug)]
#[command(name = "ghdb_scrape")]
pub struct Cli {
    /// Filter dorks by category
    #[arg(short = 'c', long = "category")]
    pub category: Option<String>,

    /// Filter dorks by author
    #[arg(short = 'a', long = "author")]
    pub author: Option<String>,
}

impl From<Cli> for ScanOptions {
    fn from(cli: Cli) -> Self {
        ScanOptions::default()
            .with_category(cli.category)
            .with_author(cli.author)
    }
}

/// Ctrl-C ends the run cleanly: report it and exit 0.
pub fn install_interrupt_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| {
        ConsoleReport.failure(&ScanError::Interrupted);
        std::process::exit(0);
    })
}

/// Parse args and run one scan. Every scan failure is reported and swallowed.
pub fn run() -> Result<RunSummary, ctrlc::Error> {
    let cli = Cli::parse();
    install_interrupt_handler()?;
    Ok(run_with(cli.into(), &mut ConsoleReport))
}

pub fn run_with(options: ScanOptions, report: &mut dyn Report) -> RunSummary {
    let transport = match HttpTransport::new(USER_AGENT) {
        Ok(t) => t,
        Err(e) => {
            report.begin(&options.url);
            report.failure(&e);
            return RunSummary {
                stage: Stage::FetchFailed,
                records: 0,
                saved: None,
                error: Some(e),
            };
        }
    };

    let now = Local::now().naive_local();
    let summary = Scanner::new(transport, options).run(&now, report);
    info!(stage = ?summary.stage, records = summary.records, "run finished");
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn short_and_long_flags() {
        let cli = Cli::try_parse_from(["ghdb_scrape", "-c", "sql", "--author", "bob"]).unwrap();
        assert_eq!(cli.category.as_deref(), Some("sql"));
        assert_eq!(cli.author.as_deref(), Some("bob"));

        let cli = Cli::try_parse_from(["ghdb_scrape", "--category", "xss", "-a", "eve"]).unwrap();
        assert_eq!(cli.category.as_deref(), Some("xss"));
        assert_eq!(cli.author.as_deref(), Some("eve"));
    }

    #[test]
    fn no_flags_means_no_filters() {
        let opts: ScanOptions = Cli::try_parse_from(["ghdb_scrape"]).unwrap().into();
        assert_eq!(opts, ScanOptions::default());
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["ghdb_scrape", "--page", "2"]).is_err());
    }

    #[test]
    fn help_mentions_both_filters() {
        let help = Cli::command().render_help().to_string();
        assert!(help.contains("--category"));
        assert!(help.contains("--author"));
        assert!(help.contains("Google Dorks Scanner"));
    }

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }
}
