//! Line-oriented text report.
//!
//! ```text
//! Members of Google roster: B, C
//! Extra members of board X to organization: D
//! Extra members of Google to Trello organization: A
//! Extra members of Trello organization to Google: C
//! ```
//!
//! The last two lines keep the wording of the original audit script: the
//! first lists organization members missing from the roster, the second
//! roster members missing from the organization.

use std::io::Write;

use rollcall_core::{MemberName, MemberSet};

use crate::context::AuditReport;
use crate::error::{io_err, ReportError};

/// Printed in place of an empty member list.
pub const NONE_MARKER: &str = "(None)";

/// `", "`-joined names, or [`NONE_MARKER`] when the set is empty.
pub fn format_names(names: &MemberSet) -> String {
    if names.is_empty() {
        return NONE_MARKER.to_string();
    }
    names
        .iter()
        .map(MemberName::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Write the text report to `out`.
pub fn render_text(report: &AuditReport, out: &mut impl Write) -> Result<(), ReportError> {
    write_report(report, out).map_err(|e| io_err("<output>", e))
}

fn write_report(report: &AuditReport, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "Members of Google roster: {}", format_names(&report.roster))?;
    for (board, extra) in &report.boards {
        writeln!(
            out,
            "Extra members of board {board} to organization: {}",
            format_names(extra)
        )?;
    }
    writeln!(
        out,
        "Extra members of Google to Trello organization: {}",
        format_names(&report.drift.organization_only)
    )?;
    writeln!(
        out,
        "Extra members of Trello organization to Google: {}",
        format_names(&report.drift.roster_only)
    )?;
    out.flush()
}
