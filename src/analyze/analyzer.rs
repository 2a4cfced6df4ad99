use crate::analyze::{Credit, CreditKind, FullReportRow, GroupReport, GroupReports, ReportData};
use crate::model::{Issue, IssuesFilters, MentionedUser, MergeRequest, TrackedItem};
use itertools::Itertools;
use tracing::trace;

pub trait Analyzer {
    fn group_report(&self, filters: &IssuesFilters) -> GroupReports;
    fn full_report(&self, filters: &IssuesFilters) -> Vec<FullReportRow>;
}

impl Analyzer for ReportData {
    fn group_report(&self, filters: &IssuesFilters) -> GroupReports {
        aggregate(
            &self.issues,
            &self.merge_requests,
            &self.multi_assign_issues,
            filters,
        )
    }

    fn full_report(&self, filters: &IssuesFilters) -> Vec<FullReportRow> {
        build_full_report(
            &self.issues,
            &self.merge_requests,
            &self.multi_assign_issues,
            filters,
        )
    }
}

/// Folds every credit into per-user totals. Sources commute: the result only
/// depends on which (item, user) pairs pass the filters.
pub fn aggregate(
    issues: &[Issue],
    merge_requests: &[MergeRequest],
    multi_assign_issues: &[Issue],
    filters: &IssuesFilters,
) -> GroupReports {
    credits(issues, merge_requests, multi_assign_issues, filters).fold(
        GroupReports::new(),
        |mut reports, credit| {
            reports
                .entry(credit.user_id)
                .or_insert_with(|| GroupReport::new(credit.user_name))
                .credit(&credit);
            reports
        },
    )
}

pub fn build_full_report(
    issues: &[Issue],
    merge_requests: &[MergeRequest],
    multi_assign_issues: &[Issue],
    filters: &IssuesFilters,
) -> Vec<FullReportRow> {
    credits(issues, merge_requests, multi_assign_issues, filters)
        .map(FullReportRow::from)
        .sorted_by(|a, b| a.user_name.cmp(&b.user_name))
        .collect()
}

fn credits<'a>(
    issues: &'a [Issue],
    merge_requests: &'a [MergeRequest],
    multi_assign_issues: &'a [Issue],
    filters: &'a IssuesFilters,
) -> impl Iterator<Item = Credit<'a>> {
    assignee_credits(issues, CreditKind::Issue, filters)
        .chain(assignee_credits(merge_requests, CreditKind::MergeRequest, filters))
        .chain(mention_credits(multi_assign_issues, filters))
}

fn assignee_credits<'a, I: TrackedItem>(
    items: &'a [I],
    kind: CreditKind,
    filters: &'a IssuesFilters,
) -> impl Iterator<Item = Credit<'a>> {
    items
        .iter()
        .filter(|item| item.time_stats().total_time_spent > 0)
        .filter(|item| filters.in_window(item.finished_at()))
        .filter_map(move |item| {
            let Some(assignee) = item.primary_assignee() else {
                trace!(id = item.id(), "no assignee, skipped");
                return None;
            };
            Some(Credit::assignee(item, assignee, kind))
        })
}

/// With a username filter only that user is credited, otherwise every
/// mentioned user gets the issue's full time.
fn mention_credits<'a>(
    issues: &'a [Issue],
    filters: &'a IssuesFilters,
) -> impl Iterator<Item = Credit<'a>> {
    issues.iter().flat_map(move |issue| {
        let credited: Vec<&MentionedUser> = match filters.username.as_deref() {
            Some(username) => issue
                .mentioned_users
                .iter()
                .find(|user| user.username == username)
                .into_iter()
                .collect(),
            None => issue.mentioned_users.iter().collect(),
        };
        credited
            .into_iter()
            .map(move |user| Credit::mention(issue, user))
    })
}
