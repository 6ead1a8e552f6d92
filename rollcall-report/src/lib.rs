//! # rollcall-report
//!
//! Text and CSV renderers for membership audits.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rollcall_core::{Auditor, OrganizationSource, RosterSource};
//! use rollcall_report::{render_text, AuditReport, ReportError};
//!
//! fn print<O: OrganizationSource, R: RosterSource>(org: &O, roster: &R) -> Result<(), ReportError> {
//!     let auditor = Auditor::new(org, roster);
//!     let report = AuditReport::collect(&auditor)?;
//!     render_text(&report, &mut std::io::stdout().lock())
//! }
//! ```

pub mod context;
pub mod error;
pub mod matrix;
pub mod text;

pub use context::{
    AuditReport, MatrixRow, MembershipMatrix, NAME_COLUMN, ORGANIZATION_ROW, ROSTER_ROW,
};
pub use error::ReportError;
pub use matrix::{write_csv, write_csv_at, DEFAULT_CSV_PATH};
pub use text::{format_names, render_text, NONE_MARKER};
