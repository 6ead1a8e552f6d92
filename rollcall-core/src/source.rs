//! Membership source traits.
//!
//! Implementations fetch lazily and memoize: every accessor that returns a
//! reference hands back the same value for the lifetime of the source, and
//! the underlying fetch happens at most once.

use crate::error::SourceError;
use crate::types::{BoardMembers, BoardRecord, MemberId, MemberName, MemberSet};

/// The organization side: organization members, boards, and ID resolution.
pub trait OrganizationSource {
    /// Usernames of every organization member.
    fn organization_members(&self) -> Result<&MemberSet, SourceError>;

    /// Raw board records in API order.
    fn boards(&self) -> Result<&[BoardRecord], SourceError>;

    /// Username for a member ID. Repeated IDs should not re-fetch.
    fn resolve_member_name(&self, id: &MemberId) -> Result<MemberName, SourceError>;

    /// Every board with its memberships resolved, in API order.
    fn board_members(&self) -> Result<&[BoardMembers], SourceError>;

    /// Resolve every board's memberships through [`resolve_member_name`].
    ///
    /// Implementations call this once and memoize the result behind
    /// [`board_members`].
    ///
    /// [`resolve_member_name`]: OrganizationSource::resolve_member_name
    /// [`board_members`]: OrganizationSource::board_members
    fn collect_board_members(&self) -> Result<Vec<BoardMembers>, SourceError> {
        let boards = self.boards()?;
        let mut resolved = Vec::with_capacity(boards.len());
        for board in boards {
            let members = board
                .member_ids
                .iter()
                .map(|id| self.resolve_member_name(id))
                .collect::<Result<MemberSet, _>>()?;
            resolved.push(BoardMembers {
                name: board.name.clone(),
                members,
            });
        }
        Ok(resolved)
    }
}

/// The roster side: the published list of expected members.
pub trait RosterSource {
    /// Non-blank member names from the roster.
    fn members(&self) -> Result<&MemberSet, SourceError>;
}
