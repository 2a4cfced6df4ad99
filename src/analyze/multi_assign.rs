use crate::gitlab::{GitlabClient, NoteRequester, Transport};
use crate::model::{Error, Issue, IssuesFilters, MentionedUser, Note, Result};
use futures::{stream, StreamExt, TryStreamExt};
use tracing::{debug, info};

/// Keeps the issues worth crediting, then attaches the users who tagged
/// themselves in the issue notes. Input order is kept.
pub async fn enrich<T: Transport>(
    client: &GitlabClient<T>,
    issues: Vec<Issue>,
    filters: &IssuesFilters,
) -> Result<Vec<Issue>> {
    let issues = filter_multi_assign(issues, filters);
    let enriched = stream::iter(issues)
        .map(|issue| async move {
            let notes = client.fetch_issue_notes(&issue).await?;
            let mentioned_users = mentioned_users(&notes);
            debug!(issue = issue.id, mentions = mentioned_users.len(), "notes scanned");
            Ok::<_, Error>(issue.with_mentioned_users(mentioned_users))
        })
        .buffered(client.parallel())
        .try_collect::<Vec<_>>()
        .await?;
    info!(issues = enriched.len(), "multi-assign issues enriched");
    Ok(enriched)
}

pub fn filter_multi_assign(issues: Vec<Issue>, filters: &IssuesFilters) -> Vec<Issue> {
    issues
        .into_iter()
        .filter(|issue| issue.time_stats.total_time_spent > 0)
        .filter(|issue| filters.in_window(issue.closed_at.as_ref()))
        .collect()
}

pub fn mentioned_users(notes: &[Note]) -> Vec<MentionedUser> {
    notes
        .iter()
        .filter(|note| mentioned_username(&note.body) == Some(note.author.username.as_str()))
        .map(|note| MentionedUser::from(&note.author))
        .collect()
}

fn mentioned_username(body: &str) -> Option<&str> {
    let handle = body.trim().strip_prefix('@')?;
    handle.split_whitespace().next()
}
