//! In-memory GitLab used by the tests.

use crate::gitlab::transport::Response;
use crate::gitlab::{GitlabClient, RateLimiter, Transport};
use crate::model::{Config, Error, Result};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Url;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const BASE_URL: &str = "http://gitlab.test/api/v4/";
pub const TOKEN: &str = "test-token";

#[derive(Debug, Default)]
pub struct MockTransport {
    routes: HashMap<String, Vec<Value>>,
    failures: Vec<(String, u32)>,
    omit_total_pages: bool,
    requests: Mutex<Vec<(Url, String)>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// `pages[0]` answers `page=1`, and so on. Pages past the end are empty.
    pub fn route(mut self, path: &str, pages: Vec<Value>) -> Self {
        self.routes.insert(path.to_string(), pages);
        self
    }

    pub fn fail_page(mut self, path: &str, page: u32) -> Self {
        self.failures.push((path.to_string(), page));
        self
    }

    pub fn without_total_pages(mut self) -> Self {
        self.omit_total_pages = true;
        self
    }

    pub fn requests(&self) -> Vec<Url> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(url, _)| url.clone())
            .collect()
    }

    pub fn tokens(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(_, token)| token.clone())
            .collect()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests().iter().map(relative_path).collect()
    }
}

impl Transport for MockTransport {
    async fn get(&self, url: &Url, token: &str) -> Result<Response> {
        self.requests
            .lock()
            .unwrap()
            .push((url.clone(), token.to_string()));

        let path = relative_path(url);
        let page = page_of(url);
        if self.failures.contains(&(path.clone(), page)) {
            return Err(Error::Status {
                url: url.to_string(),
                status: 500,
            });
        }
        let Some(pages) = self.routes.get(&path) else {
            return Err(Error::Status {
                url: url.to_string(),
                status: 404,
            });
        };

        let body = pages
            .get(page as usize - 1)
            .cloned()
            .unwrap_or_else(|| Value::Array(vec![]));
        let mut headers = HeaderMap::new();
        if !self.omit_total_pages {
            headers.insert(
                "x-total-pages",
                HeaderValue::from_str(&pages.len().max(1).to_string()).unwrap(),
            );
        }
        Ok(Response {
            body: body.to_string(),
            headers,
        })
    }
}

pub fn client(transport: MockTransport) -> GitlabClient<MockTransport> {
    limited_client(transport, RateLimiter::per_second(1_000).unwrap())
}

pub fn limited_client(transport: MockTransport, limiter: RateLimiter) -> GitlabClient<MockTransport> {
    let config = Config::new(BASE_URL, TOKEN).unwrap();
    GitlabClient::new(transport, Arc::new(limiter), &config)
}

pub fn page_of(url: &Url) -> u32 {
    url.query_pairs()
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| value.parse().ok())
        .unwrap_or(1)
}

pub fn query_of(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.into_owned())
}

fn relative_path(url: &Url) -> String {
    url.path()
        .trim_start_matches("/api/v4/")
        .to_string()
}
