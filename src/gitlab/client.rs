use crate::gitlab::{RateLimiter, ResourcePath, Transport};
use crate::model::{Config, Error, Result};
use futures::{stream, StreamExt, TryStreamExt};
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const DEFAULT_PER_PAGE: u32 = 100;
pub const DEFAULT_PARALLEL: usize = 4;
pub const TOTAL_PAGES_HEADER: &str = "x-total-pages";

#[derive(Debug, Clone, Copy)]
pub struct FetchTask<'a> {
    pub resource: &'a ResourcePath,
    pub page: u32,
    pub per_page: u32,
}

impl<'a> FetchTask<'a> {
    fn new(resource: &'a ResourcePath, page: u32, per_page: u32) -> Self {
        Self {
            resource,
            page,
            per_page,
        }
    }
}

#[derive(Debug)]
struct Page<I> {
    items: Vec<I>,
    // None when the header is missing or garbled.
    total_pages: Option<u32>,
}

impl<I> Page<I> {
    // GitLab drops the header on listings over 10,000 rows.
    fn may_be_truncated(&self, per_page: u32) -> bool {
        self.total_pages.is_none() && self.items.len() >= per_page as usize
    }
}

#[derive(Debug)]
pub struct GitlabClient<T> {
    transport: T,
    limiter: Arc<RateLimiter>,
    base_url: Url,
    token: String,
    per_page: u32,
    parallel: usize,
}

// Create
impl<T: Transport> GitlabClient<T> {
    pub fn new(transport: T, limiter: Arc<RateLimiter>, config: &Config) -> Self {
        Self {
            transport,
            limiter,
            base_url: config.url.clone(),
            token: config.token.clone(),
            per_page: DEFAULT_PER_PAGE,
            parallel: DEFAULT_PARALLEL,
        }
    }

    pub fn with_paging(self, per_page: u32, parallel: usize) -> Self {
        Self {
            per_page: per_page.max(1),
            parallel: parallel.max(1),
            ..self
        }
    }

    pub fn parallel(&self) -> usize {
        self.parallel
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }
}

// Pagination
impl<T: Transport> GitlabClient<T> {
    pub async fn fetch_all<I: DeserializeOwned>(&self, resource: &ResourcePath) -> Result<Vec<I>> {
        self.fetch_all_with(resource, self.per_page, self.parallel)
            .await
    }

    /// The first page tells how many pages exist, the rest are fetched with at
    /// most `concurrency` requests in flight. Items keep their order within a
    /// page, pages land in completion order. Any failed page fails the call.
    pub async fn fetch_all_with<I: DeserializeOwned>(
        &self,
        resource: &ResourcePath,
        per_page: u32,
        concurrency: usize,
    ) -> Result<Vec<I>> {
        let first = self
            .fetch_page::<I>(FetchTask::new(resource, 1, per_page))
            .await?;
        if first.may_be_truncated(per_page) {
            warn!(
                path = resource.path(),
                "no {TOTAL_PAGES_HEADER} header on a full first page, later pages are skipped"
            );
        }
        let total_pages = first.total_pages.unwrap_or(1);
        if total_pages <= 1 {
            info!(path = resource.path(), items = first.items.len(), "fetched");
            return Ok(first.items);
        }

        let tasks = (2..=total_pages).map(|page| FetchTask::new(resource, page, per_page));
        let pages = stream::iter(tasks)
            .map(|task| self.fetch_page::<I>(task))
            .buffer_unordered(concurrency.max(1))
            .try_collect::<Vec<_>>()
            .await?;

        let items = pages.into_iter().fold(first.items, |mut acc, page| {
            acc.extend(page.items);
            acc
        });
        info!(path = resource.path(), pages = total_pages, items = items.len(), "fetched");
        Ok(items)
    }

    async fn fetch_page<I: DeserializeOwned>(&self, task: FetchTask<'_>) -> Result<Page<I>> {
        let url = task
            .resource
            .page_url(&self.base_url, task.page, task.per_page)?;
        debug!(path = task.resource.path(), page = task.page, "fetching page");
        let response = self
            .limiter
            .schedule(|| self.transport.get(&url, &self.token))
            .await?;

        let items = serde_json::from_str::<Vec<I>>(&response.body).map_err(|e| Error::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        let total_pages = response
            .headers
            .get(TOTAL_PAGES_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u32>().ok());
        Ok(Page { items, total_pages })
    }
}
