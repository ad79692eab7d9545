//! Prober test utilities

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use tempfile::TempDir;

use panos_scanner::probe::{DateHeaders, ProbeError, Prober};
use panos_scanner::table::{VersionTable, load_version_table};

/// Canned response for one resource
#[derive(Clone)]
enum Response {
    Headers(DateHeaders),
    Unreachable,
}

/// Fake prober for testing; unknown resources behave like a 404
#[derive(Default)]
pub struct FakeProber {
    responses: HashMap<String, Response>,
    requested: Mutex<Vec<String>>,
}

impl FakeProber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_etag(mut self, resource: &str, etag: &str) -> Self {
        self.responses.insert(
            resource.to_string(),
            Response::Headers(DateHeaders {
                etag: Some(etag.to_string()),
                last_modified: None,
            }),
        );
        self
    }

    pub fn with_last_modified(mut self, resource: &str, last_modified: &str) -> Self {
        self.responses.insert(
            resource.to_string(),
            Response::Headers(DateHeaders {
                etag: None,
                last_modified: Some(last_modified.to_string()),
            }),
        );
        self
    }

    pub fn with_unreachable(mut self, resource: &str) -> Self {
        self.responses
            .insert(resource.to_string(), Response::Unreachable);
        self
    }

    /// Resources requested so far, in order
    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl Prober for &FakeProber {
    async fn fetch_date_headers(&self, resource: &str) -> Result<Option<DateHeaders>, ProbeError> {
        self.requested.lock().unwrap().push(resource.to_string());
        match self.responses.get(resource) {
            Some(Response::Headers(headers)) => Ok(Some(headers.clone())),
            Some(Response::Unreachable) => Err(ProbeError::Connection {
                url: format!("https://192.0.2.1/{resource}"),
                reason: "tls handshake eof".to_string(),
            }),
            None => Ok(None),
        }
    }
}

/// Write `content` as a version table file and load it
pub fn create_test_table(content: &str) -> (TempDir, VersionTable) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("version-table.txt");
    std::fs::write(&path, content).unwrap();
    let table = load_version_table(&path).unwrap();
    (temp_dir, table)
}
