use crate::gitlab::{GitlabClient, ResourcePath, Transport};
use crate::model::{IssuesFilters, MergeRequest, Result};

pub trait MergeRequestRequester {
    async fn fetch_merge_requests(&self, filters: &IssuesFilters) -> Result<Vec<MergeRequest>>;
}

impl<T: Transport> MergeRequestRequester for GitlabClient<T> {
    async fn fetch_merge_requests(&self, filters: &IssuesFilters) -> Result<Vec<MergeRequest>> {
        self.fetch_all(&merge_requests_path(filters)).await
    }
}

pub fn merge_requests_path(filters: &IssuesFilters) -> ResourcePath {
    let state = if filters.just_closed { "merged" } else { "all" };
    ResourcePath::new("merge_requests")
        .param("state", state)
        .labels(&filters.labels)
        .param("scope", "all")
        .param_opt("assignee_username", filters.username.as_deref())
        .updated_after(filters.closed_after.as_ref())
        .param_opt("milestone", filters.milestone.as_deref())
}
