//! Blocking JSON-over-HTTP transport.
//!
//! Sources talk to the network only through [`HttpGet`], so tests can swap in
//! a scripted client and count calls.

use std::cell::Cell;
use std::io::ErrorKind;

use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use rollcall_core::SourceError;

/// A client able to GET a URL and parse the body as JSON.
pub trait HttpGet {
    fn get_json(&self, url: &Url) -> Result<Value, SourceError>;
}

impl<C: HttpGet + ?Sized> HttpGet for &C {
    fn get_json(&self, url: &Url) -> Result<Value, SourceError> {
        (**self).get_json(url)
    }
}

/// [`HttpGet`] backed by a `ureq` agent. Counts every request it issues.
pub struct UreqClient {
    agent: ureq::Agent,
    requests: Cell<usize>,
}

impl UreqClient {
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
            requests: Cell::new(0),
        }
    }

    /// Number of requests issued so far, successful or not.
    pub fn request_count(&self) -> usize {
        self.requests.get()
    }
}

impl Default for UreqClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpGet for UreqClient {
    fn get_json(&self, url: &Url) -> Result<Value, SourceError> {
        self.requests.set(self.requests.get() + 1);
        let shown = redacted(url);
        tracing::debug!(url = %shown, "GET");

        let response = match self.agent.get(url.as_str()).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(status, _)) => {
                return Err(SourceError::Status { url: shown, status });
            }
            Err(ureq::Error::Transport(transport)) => {
                return Err(SourceError::Transport {
                    url: shown,
                    message: transport.to_string(),
                });
            }
        };

        response.into_json::<Value>().map_err(|e| {
            if e.kind() == ErrorKind::InvalidData {
                SourceError::schema(shown.clone(), format!("body is not JSON: {e}"))
            } else {
                SourceError::Transport {
                    url: shown.clone(),
                    message: e.to_string(),
                }
            }
        })
    }
}

/// The URL without its query string. Trello credentials travel in the query.
pub fn redacted(url: &Url) -> String {
    let mut shown = url.clone();
    shown.set_query(None);
    shown.to_string()
}

/// Append path segments to `base`, keeping whatever path it already has.
pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, SourceError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| SourceError::Transport {
            url: base.to_string(),
            message: "base URL cannot carry a path".to_string(),
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Deserialize a JSON payload, reporting shape mismatches as schema errors.
pub(crate) fn decode<T: DeserializeOwned>(value: Value, context: &str) -> Result<T, SourceError> {
    serde_json::from_value(value).map_err(|e| SourceError::schema(context, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacted_drops_credentials() {
        let url = Url::parse("https://api.trello.com/1/members/abc?key=k&token=secret").unwrap();
        let shown = redacted(&url);
        assert_eq!(shown, "https://api.trello.com/1/members/abc");
        assert!(!shown.contains("secret"));
    }

    #[test]
    fn endpoint_extends_base_path() {
        let base = Url::parse("https://api.trello.com/1").unwrap();
        let url = endpoint(&base, &["organizations", "my org", "members"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.trello.com/1/organizations/my%20org/members"
        );
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let base = Url::parse("http://127.0.0.1:8080/").unwrap();
        let url = endpoint(&base, &["members", "x"]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/members/x");
    }

    #[test]
    fn endpoint_rejects_cannot_be_a_base() {
        let base = Url::parse("mailto:someone@example.com").unwrap();
        let err = endpoint(&base, &["members"]).unwrap_err();
        assert!(err.is_transport());
    }

    #[test]
    fn decode_reports_missing_field_as_schema() {
        #[derive(serde::Deserialize, Debug)]
        struct Named {
            #[allow(dead_code)]
            username: String,
        }
        let err = decode::<Named>(serde_json::json!({"id": "1"}), "member").unwrap_err();
        assert!(matches!(err, SourceError::Schema { .. }), "got: {err}");
        assert!(err.to_string().contains("username"));
    }
}
