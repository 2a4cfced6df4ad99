use crate::analyze::multi_assign;
use crate::analyze::ReportData;
use crate::gitlab::{GitlabClient, IssueRequester, MergeRequestRequester, Transport, UserRequester};
use crate::model::{Issue, IssuesFilters, Result};
use tracing::info;

pub async fn collect<T: Transport>(
    client: &GitlabClient<T>,
    filters: &IssuesFilters,
) -> Result<ReportData> {
    if let Some(username) = filters.username.as_deref() {
        client.validate_username(username).await?;
    }

    let (issues, merge_requests, multi_assign_issues) = futures::try_join!(
        client.fetch_issues(filters),
        client.fetch_merge_requests(filters),
        fetch_multi_assign_issues(client, filters),
    )?;
    info!(
        issues = issues.len(),
        merge_requests = merge_requests.len(),
        multi_assign_issues = multi_assign_issues.len(),
        "report data collected"
    );
    Ok(ReportData::new(issues, merge_requests, multi_assign_issues))
}

async fn fetch_multi_assign_issues<T: Transport>(
    client: &GitlabClient<T>,
    filters: &IssuesFilters,
) -> Result<Vec<Issue>> {
    let issues = client.fetch_multi_assign_issues(filters).await?;
    multi_assign::enrich(client, issues, filters).await
}
