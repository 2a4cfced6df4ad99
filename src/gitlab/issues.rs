use crate::gitlab::{GitlabClient, ResourcePath, Transport};
use crate::model::{Issue, IssuesFilters, Result};
use chrono::{DateTime, Utc};

pub const MULTI_ASSIGN_LABEL: &str = "multiple assignees";

pub trait IssueRequester {
    async fn fetch_issues(&self, filters: &IssuesFilters) -> Result<Vec<Issue>>;

    /// Issues labelled [`MULTI_ASSIGN_LABEL`]. Not filtered by assignee: the
    /// people who worked on them are found through their notes.
    async fn fetch_multi_assign_issues(&self, filters: &IssuesFilters) -> Result<Vec<Issue>>;

    async fn fetch_user_issues(
        &self,
        username: &str,
        updated_after: &DateTime<Utc>,
    ) -> Result<Vec<Issue>>;
}

impl<T: Transport> IssueRequester for GitlabClient<T> {
    async fn fetch_issues(&self, filters: &IssuesFilters) -> Result<Vec<Issue>> {
        self.fetch_all(&issues_path(filters)).await
    }

    async fn fetch_multi_assign_issues(&self, filters: &IssuesFilters) -> Result<Vec<Issue>> {
        self.fetch_all(&multi_assign_issues_path(filters)).await
    }

    async fn fetch_user_issues(
        &self,
        username: &str,
        updated_after: &DateTime<Utc>,
    ) -> Result<Vec<Issue>> {
        let resource = ResourcePath::new("issues")
            .param("assignee_username", username)
            .updated_after(Some(updated_after))
            .param("scope", "all");
        self.fetch_all(&resource).await
    }
}

fn state(filters: &IssuesFilters) -> &'static str {
    if filters.just_closed {
        "closed"
    } else {
        "all"
    }
}

pub fn issues_path(filters: &IssuesFilters) -> ResourcePath {
    ResourcePath::new("issues")
        .param("state", state(filters))
        .labels(&filters.labels)
        .param("scope", "all")
        .param_opt("assignee_username", filters.username.as_deref())
        .updated_after(filters.closed_after.as_ref())
        .param_opt("milestone", filters.milestone.as_deref())
}

pub fn multi_assign_issues_path(filters: &IssuesFilters) -> ResourcePath {
    ResourcePath::new("issues")
        .param("state", state(filters))
        .param("labels", MULTI_ASSIGN_LABEL)
        .param("scope", "all")
        .updated_after(filters.closed_after.as_ref())
        .param_opt("milestone", filters.milestone.as_deref())
}
