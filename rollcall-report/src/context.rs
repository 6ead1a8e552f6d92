//! Report payloads collected from an [`Auditor`].
//!
//! Collection is the only step that touches the sources; rendering works on
//! the collected values and cannot fail on network errors.

use std::collections::HashSet;

use rollcall_core::{
    Auditor, BoardName, MemberName, MemberSet, MembershipView, OrganizationDrift,
    OrganizationSource, RosterSource,
};

use crate::error::ReportError;

/// Row name of the roster in the membership matrix.
pub const ROSTER_ROW: &str = "google";
/// Row name of the organization in the membership matrix.
pub const ORGANIZATION_ROW: &str = "trello";

/// Leading CSV header cell; the row-name column.
pub const NAME_COLUMN: &str = "name";

// ---------------------------------------------------------------------------
// Text payload
// ---------------------------------------------------------------------------

/// Everything the text report prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditReport {
    pub roster: MemberSet,
    /// Extra members per board, in API order.
    pub boards: Vec<(BoardName, MemberSet)>,
    pub drift: OrganizationDrift,
}

impl AuditReport {
    pub fn collect<O, R>(auditor: &Auditor<'_, O, R>) -> Result<Self, ReportError>
    where
        O: OrganizationSource + ?Sized,
        R: RosterSource + ?Sized,
    {
        let roster = auditor.get_members()?.roster.clone();
        let boards = auditor.extra_boards_members()?;
        let drift = auditor.extra_organization_members()?;
        Ok(Self {
            roster,
            boards,
            drift,
        })
    }
}

// ---------------------------------------------------------------------------
// CSV payload
// ---------------------------------------------------------------------------

/// One matrix row: a board or a source, and a membership flag per column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixRow {
    pub name: String,
    pub cells: Vec<bool>,
}

/// Boards × members membership matrix.
///
/// Columns are the union of every member name (sorted); rows are the boards
/// in API order followed by [`ROSTER_ROW`] and [`ORGANIZATION_ROW`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipMatrix {
    pub columns: Vec<MemberName>,
    pub rows: Vec<MatrixRow>,
}

impl MembershipMatrix {
    pub fn collect<O, R>(auditor: &Auditor<'_, O, R>) -> Result<Self, ReportError>
    where
        O: OrganizationSource + ?Sized,
        R: RosterSource + ?Sized,
    {
        Self::from_view(&auditor.get_members()?)
    }

    pub fn from_view(view: &MembershipView<'_>) -> Result<Self, ReportError> {
        let columns: Vec<MemberName> = view.all_members().into_iter().collect();
        if let Some(clash) = columns.iter().find(|c| c.as_str() == NAME_COLUMN) {
            return Err(ReportError::ReservedColumn(clash.to_string()));
        }

        let sets = view
            .boards
            .iter()
            .map(|board| (board.name.as_str(), &board.members))
            .chain([
                (ROSTER_ROW, view.roster),
                (ORGANIZATION_ROW, view.organization),
            ]);

        let mut seen = HashSet::new();
        let mut rows = Vec::new();
        for (name, members) in sets {
            if !seen.insert(name) {
                return Err(ReportError::DuplicateRow(name.to_string()));
            }
            rows.push(MatrixRow {
                name: name.to_string(),
                cells: columns.iter().map(|c| members.contains(c)).collect(),
            });
        }

        Ok(Self { columns, rows })
    }

    /// Header record: `name` followed by every member column.
    pub fn header(&self) -> Vec<&str> {
        std::iter::once(NAME_COLUMN)
            .chain(self.columns.iter().map(MemberName::as_str))
            .collect()
    }
}
