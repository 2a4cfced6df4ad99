use crate::gitlab::{GitlabClient, IssueRequester, NoteRequester, Transport, UserRequester};
use crate::model::{Error, Issue, Note, Result};
use chrono::{DateTime, Utc};
use futures::{stream, StreamExt, TryStreamExt};
use regex::Regex;
use std::sync::LazyLock;
use tracing::info;

static ADDED_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)added (.*) of time spent(?: at (.*))?").expect("time spent pattern")
});
static REMOVED_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)removed time spent").expect("removed time pattern"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLogEntry {
    pub username: String,
    pub note_url: String,
    pub body: String,
}

/// Time tracking notes on the issues `username` is assigned to, updated
/// after `since`.
pub async fn fetch_time_log<T: Transport>(
    client: &GitlabClient<T>,
    username: &str,
    since: &DateTime<Utc>,
) -> Result<Vec<TimeLogEntry>> {
    client.validate_username(username).await?;
    let issues = client.fetch_user_issues(username, since).await?;
    let entries = stream::iter(&issues)
        .map(|issue| async move {
            let notes = client.fetch_issue_notes(issue).await?;
            Ok::<_, Error>(time_log_entries(issue, &notes, since))
        })
        .buffered(client.parallel())
        .try_concat()
        .await?;
    info!(issues = issues.len(), entries = entries.len(), "time log collected");
    Ok(entries)
}

pub fn time_log_entries(issue: &Issue, notes: &[Note], since: &DateTime<Utc>) -> Vec<TimeLogEntry> {
    notes
        .iter()
        .filter(|note| is_time_note(note))
        .filter(|note| note.updated_at > *since)
        .map(|note| TimeLogEntry {
            username: note.author.username.clone(),
            note_url: format!("{}#{}", issue.web_url, note.id),
            body: note.body.clone(),
        })
        .collect()
}

fn is_time_note(note: &Note) -> bool {
    note.system && (ADDED_TIME.is_match(&note.body) || REMOVED_TIME.is_match(&note.body))
}
