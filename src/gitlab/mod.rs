mod client;
mod issues;
mod merge_requests;
mod notes;
mod query;
mod rate_limiter;
mod transport;
mod users;

#[cfg(test)]
pub mod mock;

pub use client::{GitlabClient, DEFAULT_PARALLEL, DEFAULT_PER_PAGE};
pub use issues::IssueRequester;
pub use merge_requests::MergeRequestRequester;
pub use notes::NoteRequester;
pub use query::ResourcePath;
pub use rate_limiter::{RateLimiter, DEFAULT_REQUESTS_PER_SECOND};
pub use transport::{HttpTransport, Transport};
pub use users::UserRequester;
