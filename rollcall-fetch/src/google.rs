//! Google roster source: a published spreadsheet read through the list feed.
//!
//! `GET {feeds}/list/{key}/{sheet}/public/values?alt=json` returns
//! `{"feed": {"entry": [{"gsx$<column>": {"$t": "<value>"}, ...}, ...]}}`.

use std::cell::OnceCell;

use serde_json::Value;
use url::Url;

use rollcall_core::{MemberName, MemberSet, RosterSource, SourceError};

use crate::cache::memoize;
use crate::http::{endpoint, HttpGet};

pub const DEFAULT_GOOGLE_FEEDS: &str = "https://spreadsheets.google.com/feeds";
pub const DEFAULT_ROSTER_COLUMN: &str = "trello";

/// Which published sheet to read and which column holds member names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLocation {
    pub key: String,
    /// 1-based sheet index.
    pub sheet: u32,
    pub column: String,
}

impl SheetLocation {
    pub fn new(key: impl Into<String>, sheet: u32) -> Self {
        Self {
            key: key.into(),
            sheet,
            column: DEFAULT_ROSTER_COLUMN.to_string(),
        }
    }

    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = column.into();
        self
    }
}

pub struct GoogleRoster<C> {
    client: C,
    feeds_base: Url,
    location: SheetLocation,
    members: OnceCell<MemberSet>,
}

impl<C: HttpGet> GoogleRoster<C> {
    pub fn new(client: C, feeds_base: Url, location: SheetLocation) -> Self {
        Self {
            client,
            feeds_base,
            location,
            members: OnceCell::new(),
        }
    }

    pub fn feed_url(&self) -> Result<Url, SourceError> {
        let sheet = self.location.sheet.to_string();
        let mut url = endpoint(
            &self.feeds_base,
            &["list", self.location.key.as_str(), sheet.as_str(), "public", "values"],
        )?;
        url.query_pairs_mut().append_pair("alt", "json");
        Ok(url)
    }

    fn fetch_members(&self) -> Result<MemberSet, SourceError> {
        let url = self.feed_url()?;
        let feed = self.client.get_json(&url)?;
        let members = parse_feed(&feed, &self.location.column)?;
        tracing::info!(
            sheet = self.location.sheet,
            count = members.len(),
            "fetched roster members"
        );
        Ok(members)
    }
}

impl<C: HttpGet> RosterSource for GoogleRoster<C> {
    fn members(&self) -> Result<&MemberSet, SourceError> {
        memoize(&self.members, || self.fetch_members())
    }
}

/// Extract the non-blank values of `gsx$<column>` from every feed entry.
///
/// Values are kept verbatim; only empty or whitespace-only cells are dropped.
/// A feed without `entry` is an empty sheet.
pub fn parse_feed(feed: &Value, column: &str) -> Result<MemberSet, SourceError> {
    let body = feed
        .get("feed")
        .ok_or_else(|| SourceError::schema("roster feed", "missing `feed` object"))?;

    let entries = match body.get("entry") {
        None => return Ok(MemberSet::new()),
        Some(Value::Array(entries)) => entries,
        Some(_) => {
            return Err(SourceError::schema(
                "roster feed",
                "`feed.entry` is not an array",
            ))
        }
    };

    let field = format!("gsx${column}");
    let mut members = MemberSet::new();
    for (index, entry) in entries.iter().enumerate() {
        let text = entry
            .get(&field)
            .and_then(|cell| cell.get("$t"))
            .and_then(Value::as_str)
            .ok_or_else(|| {
                SourceError::schema(
                    format!("roster entry {index}"),
                    format!("missing `{field}.$t` text"),
                )
            })?;
        if !text.trim().is_empty() {
            members.insert(MemberName::from(text));
        }
    }
    Ok(members)
}
