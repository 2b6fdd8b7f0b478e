use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use serde_json::Value;
use url::Url;

use crate::domain::AppError;
use crate::ports::HttpTransport;

/// In-memory transport recording every request.
///
/// HEAD succeeds unless the URL was registered as broken; GET serves
/// registered documents and answers 404 otherwise.
#[derive(Clone, Default)]
pub struct FakeTransport {
    broken_links: HashSet<String>,
    documents: HashMap<String, Value>,
    heads: Arc<Mutex<Vec<String>>>,
    gets: Arc<Mutex<Vec<String>>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_broken_link(mut self, url: impl Into<String>) -> Self {
        self.broken_links.insert(url.into());
        self
    }

    pub fn with_document(mut self, url: impl Into<String>, document: Value) -> Self {
        self.documents.insert(url.into(), document);
        self
    }

    pub fn head_requests(&self) -> Vec<String> {
        self.heads.lock().unwrap().clone()
    }

    pub fn get_requests(&self) -> Vec<String> {
        self.gets.lock().unwrap().clone()
    }
}

impl HttpTransport for FakeTransport {
    fn head(&self, url: &Url) -> Result<(), AppError> {
        self.heads.lock().unwrap().push(url.to_string());
        if self.broken_links.contains(url.as_str()) {
            return Err(AppError::http_status(url.as_str(), 404, "Not Found"));
        }
        Ok(())
    }

    fn get_json(&self, url: &Url) -> Result<Value, AppError> {
        self.gets.lock().unwrap().push(url.to_string());
        self.documents
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| AppError::http_status(url.as_str(), 404, "Not Found"))
    }
}
