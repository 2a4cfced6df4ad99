use crate::model::{Issue, MentionedUser, MergeRequest, TimeStats, TrackedItem, UserBrief};
use indexmap::IndexMap;
use serde::Serialize;
use crate::utils::ratio;
use std::fmt;

#[derive(Debug, Clone, Default)]
pub struct ReportData {
    pub issues: Vec<Issue>,
    pub merge_requests: Vec<MergeRequest>,
    pub multi_assign_issues: Vec<Issue>,
}

impl ReportData {
    pub fn new(
        issues: Vec<Issue>,
        merge_requests: Vec<MergeRequest>,
        multi_assign_issues: Vec<Issue>,
    ) -> Self {
        Self {
            issues,
            merge_requests,
            multi_assign_issues,
        }
    }
}

pub type GroupReports = IndexMap<u64, GroupReport>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupReport {
    pub name: String,
    pub total_issue: usize,
    pub total_merge_request: usize,
    pub total_spend_seconds: u64,
    pub total_estimate_seconds: u64,
}

impl GroupReport {
    pub fn new(name: impl ToString) -> Self {
        Self {
            name: name.to_string(),
            total_issue: 0,
            total_merge_request: 0,
            total_spend_seconds: 0,
            total_estimate_seconds: 0,
        }
    }

    pub fn credit(&mut self, credit: &Credit<'_>) {
        match credit.kind {
            CreditKind::Issue => self.total_issue += 1,
            CreditKind::MergeRequest => self.total_merge_request += 1,
        }
        self.total_spend_seconds += credit.time_stats.total_time_spent;
        self.total_estimate_seconds += credit.time_stats.time_estimate;
    }

    pub fn ratio(&self) -> u64 {
        ratio(self.total_estimate_seconds, self.total_spend_seconds)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum IssueType {
    Normal,
    MultiAssign,
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueType::Normal => write!(f, "normal"),
            IssueType::MultiAssign => write!(f, "multiAssign"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullReportRow {
    pub user_name: String,
    pub task_name: String,
    pub task_url: String,
    pub issue_type: IssueType,
    pub estimate_seconds: u64,
    pub spent_seconds: u64,
}

impl From<Credit<'_>> for FullReportRow {
    fn from(credit: Credit<'_>) -> Self {
        Self {
            user_name: credit.user_name.to_string(),
            task_name: credit.task_name.to_string(),
            task_url: credit.task_url.to_string(),
            issue_type: credit.issue_type,
            estimate_seconds: credit.time_stats.time_estimate,
            spent_seconds: credit.time_stats.total_time_spent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditKind {
    Issue,
    MergeRequest,
}

/// An item's tracked time credited to one user. Both reports are built from
/// the same stream of credits.
#[derive(Debug, Clone, Copy)]
pub struct Credit<'a> {
    pub user_id: u64,
    pub user_name: &'a str,
    pub kind: CreditKind,
    pub issue_type: IssueType,
    pub task_name: &'a str,
    pub task_url: &'a str,
    pub time_stats: TimeStats,
}

impl<'a> Credit<'a> {
    pub fn assignee<I: TrackedItem>(item: &'a I, assignee: &'a UserBrief, kind: CreditKind) -> Self {
        Self {
            user_id: assignee.id,
            user_name: &assignee.name,
            kind,
            issue_type: IssueType::Normal,
            task_name: item.title(),
            task_url: item.web_url(),
            time_stats: item.time_stats(),
        }
    }

    pub fn mention(issue: &'a Issue, user: &'a MentionedUser) -> Self {
        Self {
            user_id: user.id,
            user_name: &user.name,
            kind: CreditKind::Issue,
            issue_type: IssueType::MultiAssign,
            task_name: &issue.title,
            task_url: &issue.web_url,
            time_stats: issue.time_stats,
        }
    }
}
