//! Trello credential files and the first-run grant flow.
//!
//! # Storage layout
//!
//! ```text
//! <dir>/
//!   .app_key.txt   (Trello application key — mode 0600)
//!   .token.txt     (Trello user token — mode 0600)
//! ```
//!
//! A missing file is the only recovered case: the user is prompted and the
//! answer is persisted. An unreadable or empty file is an auth error.
//!
//! Every function takes the directory explicitly (`_at`); the CLI decides
//! where credentials live.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use url::Url;

use rollcall_core::SourceError;

pub const APP_KEY_FILE: &str = ".app_key.txt";
pub const TOKEN_FILE: &str = ".token.txt";
pub const APP_KEY_URL: &str = "https://trello.com/app-key";
pub const AUTHORIZE_URL: &str = "https://trello.com/1/authorize";

/// Name shown to the user on Trello's authorization page.
pub const APP_NAME: &str = "rollcall";

/// Interactive side of the grant flow.
pub trait Prompt {
    /// Show an informational line (e.g. a URL to open).
    fn notify(&mut self, message: &str);

    /// Ask a question and return the raw answer.
    fn ask(&mut self, question: &str) -> Result<String, SourceError>;
}

// ---------------------------------------------------------------------------
// 1. Path helpers
// ---------------------------------------------------------------------------

/// `<dir>/.app_key.txt`
pub fn app_key_path_at(dir: &Path) -> PathBuf {
    dir.join(APP_KEY_FILE)
}

/// `<dir>/.token.txt`
pub fn token_path_at(dir: &Path) -> PathBuf {
    dir.join(TOKEN_FILE)
}

// ---------------------------------------------------------------------------
// 2. Load / save
// ---------------------------------------------------------------------------

/// Read a single-value credential file.
///
/// `Ok(None)` if the file does not exist; `SourceError::Auth` if it cannot be
/// read or holds only whitespace.
pub fn load_at(path: &Path) -> Result<Option<String>, SourceError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(SourceError::Auth(format!(
                "cannot read {}: {err}",
                path.display()
            )))
        }
    };
    let value = contents.trim();
    if value.is_empty() {
        return Err(SourceError::Auth(format!("{} is empty", path.display())));
    }
    Ok(Some(value.to_string()))
}

/// Atomically write a credential file.
///
/// Write flow: `<path>.tmp` → `chmod 0600` → `rename`.
pub fn save_at(path: &Path, value: &str) -> Result<(), SourceError> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir).map_err(|e| io_err(dir, e))?;
        }
    }
    let tmp = path.with_extension("txt.tmp");
    std::fs::write(&tmp, value).map_err(|e| io_err(&tmp, e))?;
    set_file_permissions(&tmp)?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(io_err(path, e));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// 3. Grant flow
// ---------------------------------------------------------------------------

/// The page where a user grants a read-only, non-expiring token to `app_key`.
pub fn authorize_url(app_key: &str) -> Url {
    let mut url = Url::parse(AUTHORIZE_URL).expect("AUTHORIZE_URL is a valid URL");
    url.query_pairs_mut()
        .append_pair("key", app_key)
        .append_pair("name", APP_NAME)
        .append_pair("expiration", "never")
        .append_pair("response_type", "token")
        .append_pair("scope", "read");
    url
}

/// Load the application key from `<dir>/.app_key.txt`, prompting for it and
/// saving it on first run.
pub fn load_or_acquire_app_key_at(
    dir: &Path,
    prompt: &mut dyn Prompt,
) -> Result<String, SourceError> {
    let path = app_key_path_at(dir);
    if let Some(key) = load_at(&path)? {
        tracing::debug!(path = %path.display(), "Trello app key loaded");
        return Ok(key);
    }

    let answer = prompt.ask(&format!(
        "Please enter Trello app key (see {APP_KEY_URL})"
    ))?;
    let key = non_empty(answer, "app key")?;
    save_at(&path, &key)?;
    tracing::info!(path = %path.display(), "Trello app key saved");
    Ok(key)
}

/// Load the user token from `<dir>/.token.txt`. On first run, show the
/// authorization URL, prompt for the pasted token and save it.
pub fn load_or_acquire_token_at(
    dir: &Path,
    app_key: &str,
    prompt: &mut dyn Prompt,
) -> Result<String, SourceError> {
    let path = token_path_at(dir);
    if let Some(token) = load_at(&path)? {
        tracing::debug!(path = %path.display(), "Trello token loaded");
        return Ok(token);
    }

    prompt.notify(&format!(
        "Enter following URL in your browser: {}",
        authorize_url(app_key)
    ));
    let answer = prompt.ask("Enter token please")?;
    let token = non_empty(answer, "token")?;
    save_at(&path, &token)?;
    tracing::info!(path = %path.display(), "Trello token saved");
    Ok(token)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn non_empty(answer: String, what: &str) -> Result<String, SourceError> {
    let value = answer.trim();
    if value.is_empty() {
        return Err(SourceError::Auth(format!("no {what} entered")));
    }
    Ok(value.to_string())
}

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SourceError {
    SourceError::Io {
        path: path.into(),
        source,
    }
}

#[cfg(unix)]
fn set_file_permissions(path: &Path) -> Result<(), SourceError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
        .map_err(|e| io_err(path, e))
}
#[cfg(not(unix))]
fn set_file_permissions(_path: &Path) -> Result<(), SourceError> {
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
