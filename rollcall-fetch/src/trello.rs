//! Trello organization source.
//!
//! Three read-only endpoints, all authenticated with `key` + `token` query
//! parameters:
//!
//! | Accessor                 | Request                                |
//! |--------------------------|----------------------------------------|
//! | `organization_members`   | `GET /organizations/{org}/members`     |
//! | `boards`                 | `GET /organizations/{org}/boards`      |
//! | `resolve_member_name`    | `GET /members/{id}`                    |
//!
//! List accessors are fetched once per [`TrelloOrganization`]; member lookups
//! go through a 64-entry LRU cache.

use std::cell::{OnceCell, RefCell};

use serde::Deserialize;
use url::Url;

use rollcall_core::{
    BoardMembers, BoardName, BoardRecord, MemberId, MemberName, MemberSet, OrganizationSource,
    SourceError,
};

use crate::cache::{memoize, LruCache};
use crate::http::{decode, endpoint, HttpGet};

pub const DEFAULT_TRELLO_API: &str = "https://api.trello.com/1";
pub const DEFAULT_ORGANIZATION: &str = "koonaukowegenbit";
pub const MEMBER_CACHE_CAPACITY: usize = 64;

/// Application key and user token sent with every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrelloCredentials {
    pub app_key: String,
    pub token: String,
}

// ---------------------------------------------------------------------------
// Wire records
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct MemberPayload {
    username: MemberName,
}

#[derive(Debug, Deserialize)]
struct BoardPayload {
    name: BoardName,
    memberships: Vec<MembershipPayload>,
}

#[derive(Debug, Deserialize)]
struct MembershipPayload {
    #[serde(rename = "idMember")]
    id_member: MemberId,
}

impl From<BoardPayload> for BoardRecord {
    fn from(board: BoardPayload) -> Self {
        BoardRecord {
            name: board.name,
            member_ids: board
                .memberships
                .into_iter()
                .map(|m| m.id_member)
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Source
// ---------------------------------------------------------------------------

pub struct TrelloOrganization<C> {
    client: C,
    api_base: Url,
    organization: String,
    credentials: TrelloCredentials,
    members: OnceCell<MemberSet>,
    boards: OnceCell<Vec<BoardRecord>>,
    board_members: OnceCell<Vec<BoardMembers>>,
    names: RefCell<LruCache<MemberId, MemberName>>,
}

impl<C: HttpGet> TrelloOrganization<C> {
    pub fn new(
        client: C,
        api_base: Url,
        organization: impl Into<String>,
        credentials: TrelloCredentials,
    ) -> Self {
        Self {
            client,
            api_base,
            organization: organization.into(),
            credentials,
            members: OnceCell::new(),
            boards: OnceCell::new(),
            board_members: OnceCell::new(),
            names: RefCell::new(LruCache::new(MEMBER_CACHE_CAPACITY)),
        }
    }

    fn url(&self, segments: &[&str]) -> Result<Url, SourceError> {
        let mut url = endpoint(&self.api_base, segments)?;
        url.query_pairs_mut()
            .append_pair("key", &self.credentials.app_key)
            .append_pair("token", &self.credentials.token);
        Ok(url)
    }

    fn fetch_members(&self) -> Result<MemberSet, SourceError> {
        let url = self.url(&["organizations", self.organization.as_str(), "members"])?;
        let records: Vec<MemberPayload> =
            decode(self.client.get_json(&url)?, "organization members")?;
        let members: MemberSet = records.into_iter().map(|m| m.username).collect();
        tracing::info!(
            organization = %self.organization,
            count = members.len(),
            "fetched organization members"
        );
        Ok(members)
    }

    fn fetch_boards(&self) -> Result<Vec<BoardRecord>, SourceError> {
        let url = self.url(&["organizations", self.organization.as_str(), "boards"])?;
        let records: Vec<BoardPayload> =
            decode(self.client.get_json(&url)?, "organization boards")?;
        tracing::info!(
            organization = %self.organization,
            count = records.len(),
            "fetched organization boards"
        );
        Ok(records.into_iter().map(BoardRecord::from).collect())
    }
}

impl<C: HttpGet> OrganizationSource for TrelloOrganization<C> {
    fn organization_members(&self) -> Result<&MemberSet, SourceError> {
        memoize(&self.members, || self.fetch_members())
    }

    fn boards(&self) -> Result<&[BoardRecord], SourceError> {
        memoize(&self.boards, || self.fetch_boards()).map(Vec::as_slice)
    }

    fn resolve_member_name(&self, id: &MemberId) -> Result<MemberName, SourceError> {
        let cached = self.names.borrow_mut().get(id).cloned();
        if let Some(name) = cached {
            tracing::debug!(member = %id, "member name cache hit");
            return Ok(name);
        }

        let url = self.url(&["members", id.0.as_str()])?;
        let record: MemberPayload = decode(self.client.get_json(&url)?, "member")?;
        if let Some(evicted) = self
            .names
            .borrow_mut()
            .put(id.clone(), record.username.clone())
        {
            tracing::debug!(member = %evicted, "member name evicted from cache");
        }
        Ok(record.username)
    }

    fn board_members(&self) -> Result<&[BoardMembers], SourceError> {
        memoize(&self.board_members, || self.collect_board_members()).map(Vec::as_slice)
    }
}
