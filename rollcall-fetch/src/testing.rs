//! Scripted [`HttpGet`] for unit tests.

use std::cell::RefCell;
use std::collections::HashMap;

use serde_json::Value;
use url::Url;

use rollcall_core::SourceError;

use crate::http::{redacted, HttpGet};

/// Answers by URL path; unknown paths return HTTP 404. Records every request.
#[derive(Default)]
pub(crate) struct ScriptedHttp {
    routes: HashMap<String, Value>,
    requests: RefCell<Vec<Url>>,
}

impl ScriptedHttp {
    pub(crate) fn route(mut self, path: &str, body: Value) -> Self {
        self.routes.insert(path.to_string(), body);
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.requests.borrow().len()
    }

    pub(crate) fn calls_to(&self, path: &str) -> usize {
        self.requests
            .borrow()
            .iter()
            .filter(|url| url.path() == path)
            .count()
    }

    pub(crate) fn last_request(&self) -> Option<Url> {
        self.requests.borrow().last().cloned()
    }
}

impl HttpGet for ScriptedHttp {
    fn get_json(&self, url: &Url) -> Result<Value, SourceError> {
        self.requests.borrow_mut().push(url.clone());
        self.routes
            .get(url.path())
            .cloned()
            .ok_or_else(|| SourceError::Status {
                url: redacted(url),
                status: 404,
            })
    }
}
