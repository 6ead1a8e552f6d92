//! # rollcall-fetch
//!
//! Network-backed membership sources.
//!
//! [`TrelloOrganization`] and [`GoogleRoster`] implement the core source
//! traits over any [`HttpGet`]; [`UreqClient`] is the production transport.
//! [`credentials`] owns the Trello key/token files.

pub mod cache;
pub mod credentials;
pub mod google;
pub mod http;
pub mod trello;

#[cfg(test)]
pub(crate) mod testing;

pub use google::{GoogleRoster, SheetLocation};
pub use http::{HttpGet, UreqClient};
pub use trello::{TrelloCredentials, TrelloOrganization};
