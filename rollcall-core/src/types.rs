//! Domain types shared by the sources, the auditor and the reporters.
//!
//! Member names are compared as exact strings: no case folding and no
//! whitespace trimming happens here.

use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// Opaque Trello member identifier. Not human-readable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct MemberId(pub String);

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for MemberId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for MemberId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Human-readable member handle; the unit of comparison across sources.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub struct MemberName(pub String);

impl MemberName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for MemberName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for MemberName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Board name, unique within one organization.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub struct BoardName(pub String);

impl BoardName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BoardName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for BoardName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for BoardName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A set of member names. Ordered so that reports iterate deterministically.
pub type MemberSet = BTreeSet<MemberName>;

// ---------------------------------------------------------------------------
// Boards
// ---------------------------------------------------------------------------

/// A board as listed by the organization API, before member IDs are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRecord {
    pub name: BoardName,
    /// Membership member IDs in API order. May repeat an ID.
    pub member_ids: Vec<MemberId>,
}

/// A board with its memberships resolved to member names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardMembers {
    pub name: BoardName,
    pub members: MemberSet,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
