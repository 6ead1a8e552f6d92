//! rollcall core library — domain types, source traits, errors, auditor.
//!
//! - [`types`] — newtypes and board records
//! - [`source`] — [`OrganizationSource`] / [`RosterSource`] traits
//! - [`audit`] — [`Auditor`] set reconciliation
//! - [`error`] — [`SourceError`]

pub mod audit;
pub mod error;
pub mod source;
pub mod types;

pub use audit::{Auditor, MembershipView, OrganizationDrift};
pub use error::SourceError;
pub use source::{OrganizationSource, RosterSource};
pub use types::{BoardMembers, BoardName, BoardRecord, MemberId, MemberName, MemberSet};
