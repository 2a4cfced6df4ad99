mod config;
mod error;
mod filters;
mod issue;
mod note;
mod user;

pub use config::Config;
pub use error::{Error, Result};
pub use filters::{parse_datetime, IssuesFilters};
pub use issue::{Issue, MentionedUser, MergeRequest, TimeStats, TrackedItem, UserBrief};
pub use note::Note;
pub use user::User;
