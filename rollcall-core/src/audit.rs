//! Reconciliation of organization membership against the roster.
//!
//! [`Auditor`] only borrows its two sources. Its results are set differences
//! over the memoized source data, so calling them again issues no requests.

use crate::error::SourceError;
use crate::source::{OrganizationSource, RosterSource};
use crate::types::{BoardMembers, BoardName, MemberSet};

/// Members found in one of organization / roster but not the other.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrganizationDrift {
    /// In the organization, missing from the roster.
    pub organization_only: MemberSet,
    /// In the roster, missing from the organization.
    pub roster_only: MemberSet,
}

/// Every member set the auditor works from, borrowed from the sources.
#[derive(Debug, Clone, Copy)]
pub struct MembershipView<'a> {
    pub roster: &'a MemberSet,
    pub organization: &'a MemberSet,
    pub boards: &'a [BoardMembers],
}

impl MembershipView<'_> {
    /// Union of every member name across roster, organization and boards.
    pub fn all_members(&self) -> MemberSet {
        let mut all = self.roster.clone();
        all.extend(self.organization.iter().cloned());
        for board in self.boards {
            all.extend(board.members.iter().cloned());
        }
        all
    }
}

/// Computes membership drift between an organization and a roster.
pub struct Auditor<'a, O: ?Sized, R: ?Sized> {
    organization: &'a O,
    roster: &'a R,
}

impl<'a, O, R> Auditor<'a, O, R>
where
    O: OrganizationSource + ?Sized,
    R: RosterSource + ?Sized,
{
    pub fn new(organization: &'a O, roster: &'a R) -> Self {
        Self {
            organization,
            roster,
        }
    }

    /// For each board (API order), the board members that are not organization
    /// members. Boards without extras are kept with an empty set.
    pub fn extra_boards_members(&self) -> Result<Vec<(BoardName, MemberSet)>, SourceError> {
        let organization = self.organization.organization_members()?;
        let boards = self.organization.board_members()?;
        Ok(boards
            .iter()
            .map(|board| {
                let extra = board
                    .members
                    .difference(organization)
                    .cloned()
                    .collect::<MemberSet>();
                (board.name.clone(), extra)
            })
            .collect())
    }

    /// Asymmetric differences between organization and roster, both ways.
    pub fn extra_organization_members(&self) -> Result<OrganizationDrift, SourceError> {
        let organization = self.organization.organization_members()?;
        let roster = self.roster.members()?;
        Ok(OrganizationDrift {
            organization_only: organization.difference(roster).cloned().collect(),
            roster_only: roster.difference(organization).cloned().collect(),
        })
    }

    /// Roster, organization and per-board sets in one bundle.
    pub fn get_members(&self) -> Result<MembershipView<'a>, SourceError> {
        Ok(MembershipView {
            roster: self.roster.members()?,
            organization: self.organization.organization_members()?,
            boards: self.organization.board_members()?,
        })
    }
}
