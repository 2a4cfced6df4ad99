use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserBrief {
    pub id: u64,
    pub name: String,
    pub username: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct TimeStats {
    #[serde(default)]
    pub time_estimate: u64,
    #[serde(default)]
    pub total_time_spent: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionedUser {
    pub id: u64,
    pub username: String,
    pub name: String,
}

impl From<&UserBrief> for MentionedUser {
    fn from(user: &UserBrief) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            name: user.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Issue {
    pub id: u64,
    pub iid: u64,
    pub project_id: u64,
    pub title: String,
    pub closed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub assignees: Vec<UserBrief>,
    #[serde(default)]
    pub time_stats: TimeStats,
    pub web_url: String,
    #[serde(skip)]
    pub mentioned_users: Vec<MentionedUser>,
}

impl Issue {
    pub fn with_mentioned_users(self, mentioned_users: Vec<MentionedUser>) -> Self {
        Self {
            mentioned_users,
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MergeRequest {
    pub id: u64,
    pub title: String,
    pub merged_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub assignees: Vec<UserBrief>,
    #[serde(default)]
    pub time_stats: TimeStats,
    pub web_url: String,
}

pub trait TrackedItem {
    fn id(&self) -> u64;
    fn title(&self) -> &str;
    fn web_url(&self) -> &str;
    fn time_stats(&self) -> TimeStats;
    fn assignees(&self) -> &[UserBrief];
    fn finished_at(&self) -> Option<&DateTime<Utc>>;

    fn primary_assignee(&self) -> Option<&UserBrief> {
        self.assignees().first()
    }
}

impl TrackedItem for Issue {
    fn id(&self) -> u64 {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn web_url(&self) -> &str {
        &self.web_url
    }

    fn time_stats(&self) -> TimeStats {
        self.time_stats
    }

    fn assignees(&self) -> &[UserBrief] {
        &self.assignees
    }

    fn finished_at(&self) -> Option<&DateTime<Utc>> {
        self.closed_at.as_ref()
    }
}

impl TrackedItem for MergeRequest {
    fn id(&self) -> u64 {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn web_url(&self) -> &str {
        &self.web_url
    }

    fn time_stats(&self) -> TimeStats {
        self.time_stats
    }

    fn assignees(&self) -> &[UserBrief] {
        &self.assignees
    }

    fn finished_at(&self) -> Option<&DateTime<Utc>> {
        self.merged_at.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_gitlab_issue_payload() {
        let payload = json!({
            "id": 901,
            "iid": 12,
            "project_id": 7,
            "title": "Fix login",
            "state": "closed",
            "labels": ["backend"],
            "closed_at": "2021-03-01T10:15:00.000Z",
            "updated_at": "2021-03-01T10:15:00.000Z",
            "assignees": [
                {"id": 5, "name": "Alice", "username": "alice", "state": "active"},
                {"id": 6, "name": "Bob", "username": "bob", "state": "active"}
            ],
            "time_stats": {
                "time_estimate": 3600,
                "total_time_spent": 1800,
                "human_time_estimate": "1h",
                "human_total_time_spent": "30m"
            },
            "web_url": "https://gitlab.test/group/app/-/issues/12"
        });
        let issue: Issue = serde_json::from_value(payload).unwrap();
        assert_eq!(issue.primary_assignee().map(|a| a.id), Some(5));
        assert_eq!(issue.time_stats.total_time_spent, 1800);
        assert!(issue.finished_at().is_some());
        assert!(issue.mentioned_users.is_empty());
    }

    #[test]
    fn open_merge_request_has_no_finish_time() {
        let payload = json!({
            "id": 31,
            "iid": 3,
            "project_id": 7,
            "title": "Add cache",
            "state": "opened",
            "merged_at": null,
            "assignees": [],
            "time_stats": {"time_estimate": 0, "total_time_spent": 0},
            "web_url": "https://gitlab.test/group/app/-/merge_requests/3"
        });
        let merge_request: MergeRequest = serde_json::from_value(payload).unwrap();
        assert!(merge_request.finished_at().is_none());
        assert!(merge_request.primary_assignee().is_none());
    }
}
