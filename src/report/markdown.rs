use crate::analyze::{FullReportRow, GroupReports, TimeLogEntry};
use crate::model::{Error, Result};
use crate::utils::{human_duration, ratio};
use itertools::Itertools;
use markdown_builder::Markdown;
use markdown_table::{Heading, MarkdownTable};
use std::cmp::Reverse;

pub trait MarkdownReport {
    fn report_create(&self) -> Result<String>;
}

impl MarkdownReport for GroupReports {
    fn report_create(&self) -> Result<String> {
        let rows = self
            .values()
            .sorted_by_key(|report| Reverse(report.ratio()))
            .map(|report| {
                vec![
                    report.name.clone(),
                    report.total_issue.to_string(),
                    report.total_merge_request.to_string(),
                    human_duration(report.total_spend_seconds),
                    human_duration(report.total_estimate_seconds),
                    report.ratio().to_string(),
                ]
            })
            .collect::<Vec<_>>();

        let mut doc = Markdown::new();
        doc.header1("Time report");
        doc.add_table(
            &[
                "user",
                "total number of issues",
                "total number of merge requests",
                "total time spent",
                "total time estimate",
                "ratio (%)",
            ],
            rows,
        )?;
        Ok(doc.render())
    }
}

impl MarkdownReport for Vec<FullReportRow> {
    fn report_create(&self) -> Result<String> {
        let rows = self
            .iter()
            .map(|row| {
                vec![
                    row.user_name.clone(),
                    row.task_url.clone(),
                    row.issue_type.to_string(),
                    human_duration(row.estimate_seconds),
                    human_duration(row.spent_seconds),
                    ratio(row.estimate_seconds, row.spent_seconds).to_string(),
                ]
            })
            .collect::<Vec<_>>();

        let mut doc = Markdown::new();
        doc.header1("Detailed time report");
        doc.add_table(
            &[
                "user",
                "task url",
                "issue type",
                "time estimate",
                "time spent",
                "ratio (%)",
            ],
            rows,
        )?;
        Ok(doc.render())
    }
}

impl MarkdownReport for Vec<TimeLogEntry> {
    fn report_create(&self) -> Result<String> {
        let rows = self
            .iter()
            .map(|entry| vec![entry.username.clone(), entry.note_url.clone(), entry.body.clone()])
            .collect::<Vec<_>>();

        let mut doc = Markdown::new();
        doc.header1("Time log");
        doc.add_table(&["user", "issue", "time log"], rows)?;
        Ok(doc.render())
    }
}

trait MarkdownExt {
    fn add_table(&mut self, headings: &[&str], rows: Vec<Vec<String>>) -> Result<()>;
}

impl MarkdownExt for Markdown {
    fn add_table(&mut self, headings: &[&str], rows: Vec<Vec<String>>) -> Result<()> {
        if rows.is_empty() {
            self.paragraph("Nothing to report.".to_string());
            return Ok(());
        }
        let headings = headings
            .iter()
            .map(|heading| Heading::new(heading.to_string(), None))
            .collect::<Vec<_>>();
        let mut table = MarkdownTable::new(rows);
        table.with_headings(headings);
        let table = table
            .as_markdown()
            .map_err(|e| Error::Render(format!("{e:?}")))?;
        self.paragraph(table);
        Ok(())
    }
}
