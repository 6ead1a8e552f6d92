//! The audit run: credentials → sources → auditor → text or CSV report.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use url::Url;

use rollcall_core::Auditor;
use rollcall_fetch::{
    credentials,
    google::{DEFAULT_GOOGLE_FEEDS, DEFAULT_ROSTER_COLUMN},
    trello::{DEFAULT_ORGANIZATION, DEFAULT_TRELLO_API},
    GoogleRoster, SheetLocation, TrelloCredentials, TrelloOrganization, UreqClient,
};
use rollcall_report::{render_text, write_csv_at, AuditReport, MembershipMatrix, DEFAULT_CSV_PATH};

use crate::prompt::TerminalPrompt;

/// Arguments for a membership audit.
#[derive(Args, Debug)]
pub struct AuditArgs {
    /// Key of the published Google Sheet holding the roster.
    #[arg(long)]
    pub key: String,

    /// 1-based sheet number within the published document.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub sheet: u32,

    /// Roster column holding Trello usernames.
    #[arg(long, default_value = DEFAULT_ROSTER_COLUMN)]
    pub column: String,

    /// Trello organization name.
    #[arg(long, default_value = DEFAULT_ORGANIZATION)]
    pub organization: String,

    /// Write a CSV membership matrix instead of the text report
    /// (defaults to report.csv when no path is given).
    #[arg(
        long,
        value_name = "PATH",
        num_args = 0..=1,
        default_missing_value = DEFAULT_CSV_PATH
    )]
    pub csv: Option<PathBuf>,

    /// Directory holding .app_key.txt and .token.txt.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub credentials_dir: PathBuf,

    /// Trello application key (skips .app_key.txt).
    #[arg(long, env = "TRELLO_APP_KEY", hide_env_values = true)]
    pub app_key: Option<String>,

    /// Trello user token (skips .token.txt).
    #[arg(long, env = "TRELLO_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[arg(long, env = "ROLLCALL_TRELLO_API", default_value = DEFAULT_TRELLO_API, hide = true)]
    pub trello_api: Url,

    #[arg(long, env = "ROLLCALL_GOOGLE_FEEDS", default_value = DEFAULT_GOOGLE_FEEDS, hide = true)]
    pub google_feeds: Url,
}

impl AuditArgs {
    pub fn run(self) -> Result<()> {
        let credentials = self.credentials()?;
        let client = UreqClient::new();

        let organization = TrelloOrganization::new(
            &client,
            self.trello_api.clone(),
            self.organization.clone(),
            credentials,
        );
        let roster = GoogleRoster::new(
            &client,
            self.google_feeds.clone(),
            SheetLocation::new(self.key.clone(), self.sheet).with_column(self.column.clone()),
        );
        let auditor = Auditor::new(&organization, &roster);

        match &self.csv {
            Some(path) => {
                let matrix = MembershipMatrix::collect(&auditor).with_context(|| {
                    format!("audit of organization '{}' failed", self.organization)
                })?;
                write_csv_at(path, &matrix)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                tracing::info!(
                    path = %path.display(),
                    rows = matrix.rows.len(),
                    columns = matrix.columns.len(),
                    "wrote CSV report"
                );
            }
            None => {
                let report = AuditReport::collect(&auditor).with_context(|| {
                    format!("audit of organization '{}' failed", self.organization)
                })?;
                render_text(&report, &mut std::io::stdout().lock())
                    .context("failed to print report")?;
            }
        }

        tracing::info!(requests = client.request_count(), "API requests issued");
        Ok(())
    }

    /// Flags/env first, then the credential files (prompting on first run).
    fn credentials(&self) -> Result<TrelloCredentials> {
        let mut prompt = TerminalPrompt;

        let app_key = match &self.app_key {
            Some(key) => key.clone(),
            None => credentials::load_or_acquire_app_key_at(&self.credentials_dir, &mut prompt)
                .context("failed to load Trello app key")?,
        };
        let token = match &self.token {
            Some(token) => token.clone(),
            None => credentials::load_or_acquire_token_at(
                &self.credentials_dir,
                &app_key,
                &mut prompt,
            )
            .context("failed to load Trello token")?,
        };

        Ok(TrelloCredentials { app_key, token })
    }
}
