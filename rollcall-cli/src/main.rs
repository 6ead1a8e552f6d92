//! rollcall — audit Trello organization membership against a Google roster.
//!
//! # Usage
//!
//! ```text
//! rollcall --key <SHEET_KEY> [--sheet N] [--column NAME] [--organization SLUG]
//!          [--csv [PATH]] [--credentials-dir DIR] [--app-key KEY] [--token TOKEN] [-v]
//! ```
//!
//! Without `--csv` the text report goes to stdout. Logs go to stderr.

mod audit;
mod prompt;

use anyhow::Result;
use clap::Parser;

use audit::AuditArgs;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "rollcall",
    version,
    about = "Audit Trello organization membership against a published Google Sheet roster",
    long_about = None,
)]
struct Cli {
    #[command(flatten)]
    audit: AuditArgs,

    /// Log requests and cache activity to stderr.
    #[arg(long, short = 'v')]
    verbose: bool,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.audit.run()
}

/// Verbose output covers the workspace crates only; the HTTP stack stays at
/// `warn` because its debug lines carry full request URLs, credentials
/// included.
const VERBOSE_FILTER: &str =
    "warn,rollcall=debug,rollcall_core=debug,rollcall_fetch=debug,rollcall_report=debug";

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default = if verbose { VERBOSE_FILTER } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
