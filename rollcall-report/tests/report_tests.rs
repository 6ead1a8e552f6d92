//! End-to-end report rendering over in-memory sources.

use std::cell::OnceCell;
use std::collections::{HashMap, HashSet};

use rollcall_core::{
    Auditor, BoardMembers, BoardName, BoardRecord, MemberId, MemberName, MemberSet,
    OrganizationSource, RosterSource, SourceError,
};
use rollcall_report::{render_text, write_csv_at, AuditReport, MembershipMatrix, ReportError};
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

fn set(names: &[&str]) -> MemberSet {
    names.iter().map(|n| MemberName::from(*n)).collect()
}

struct FixtureOrganization {
    members: MemberSet,
    boards: Vec<BoardRecord>,
    board_members: OnceCell<Vec<BoardMembers>>,
}

impl FixtureOrganization {
    fn new(members: &[&str], boards: &[(&str, &[&str])]) -> Self {
        Self {
            members: set(members),
            boards: boards
                .iter()
                .map(|(name, ids)| BoardRecord {
                    name: BoardName::from(*name),
                    member_ids: ids.iter().map(|id| MemberId::from(*id)).collect(),
                })
                .collect(),
            board_members: OnceCell::new(),
        }
    }
}

impl OrganizationSource for FixtureOrganization {
    fn organization_members(&self) -> Result<&MemberSet, SourceError> {
        Ok(&self.members)
    }

    fn boards(&self) -> Result<&[BoardRecord], SourceError> {
        Ok(&self.boards)
    }

    fn resolve_member_name(&self, id: &MemberId) -> Result<MemberName, SourceError> {
        Ok(MemberName::from(id.0.clone()))
    }

    fn board_members(&self) -> Result<&[BoardMembers], SourceError> {
        if let Some(boards) = self.board_members.get() {
            return Ok(boards);
        }
        let resolved = self.collect_board_members()?;
        Ok(self.board_members.get_or_init(|| resolved))
    }
}

struct FixtureRoster(MemberSet);

impl RosterSource for FixtureRoster {
    fn members(&self) -> Result<&MemberSet, SourceError> {
        Ok(&self.0)
    }
}

struct OfflineRoster;

impl RosterSource for OfflineRoster {
    fn members(&self) -> Result<&MemberSet, SourceError> {
        Err(SourceError::Transport {
            url: "https://spreadsheets.google.com/feeds/list/k/1/public/values".into(),
            message: "connection refused".into(),
        })
    }
}

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

#[test]
fn text_report_for_reference_scenario() {
    let org = FixtureOrganization::new(&["A", "B"], &[("X", &["A", "B", "D"])]);
    let roster = FixtureRoster(set(&["B", "C"]));
    let report = AuditReport::collect(&Auditor::new(&org, &roster)).expect("collect");

    let mut out = Vec::new();
    render_text(&report, &mut out).expect("render");
    let text = String::from_utf8(out).expect("utf8");

    assert!(text.contains("Extra members of board X to organization: D\n"));
    assert!(text.contains("Extra members of Google to Trello organization: A\n"));
    assert!(text.contains("Extra members of Trello organization to Google: C\n"));
    assert!(!text.contains("(None)"));
}

#[test]
fn source_failure_aborts_before_any_output() {
    let org = FixtureOrganization::new(&["A"], &[]);
    let err = AuditReport::collect(&Auditor::new(&org, &OfflineRoster)).unwrap_err();
    assert!(matches!(err, ReportError::Source(ref e) if e.is_transport()), "got: {err}");
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

#[test]
fn csv_cells_match_membership() {
    let org = FixtureOrganization::new(
        &["alice", "bob"],
        &[("Roadmap", &["alice", "guest"]), ("Ops", &["bob"])],
    );
    let roster = FixtureRoster(set(&["bob", "carol"]));
    let auditor = Auditor::new(&org, &roster);
    let matrix = MembershipMatrix::collect(&auditor).expect("matrix");

    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("report.csv");
    write_csv_at(&path, &matrix).expect("write");

    let mut reader = csv::Reader::from_path(&path).expect("open csv");
    let header: Vec<String> = reader
        .headers()
        .expect("header")
        .iter()
        .map(str::to_string)
        .collect();
    assert_eq!(header[0], "name");

    let columns: HashSet<&str> = header[1..].iter().map(String::as_str).collect();
    let expected: HashSet<&str> = ["alice", "bob", "carol", "guest"].into_iter().collect();
    assert_eq!(columns, expected, "columns are the union of every source");

    let view = auditor.get_members().expect("view");
    let mut row_sets: HashMap<String, MemberSet> = view
        .boards
        .iter()
        .map(|b| (b.name.to_string(), b.members.clone()))
        .collect();
    row_sets.insert("google".into(), view.roster.clone());
    row_sets.insert("trello".into(), view.organization.clone());

    let mut seen = HashSet::new();
    for record in reader.records() {
        let record = record.expect("record");
        let row = record[0].to_string();
        assert!(seen.insert(row.clone()), "row names are unique: {row}");
        let members = &row_sets[&row];
        for (column, cell) in header[1..].iter().zip(record.iter().skip(1)) {
            let expected = members.contains(&MemberName::from(column.as_str()));
            assert_eq!(cell, expected.to_string(), "row {row}, column {column}");
        }
    }
    assert_eq!(seen.len(), 4);
}
