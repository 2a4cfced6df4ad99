use crate::analyze::{FullReportRow, IssueType};
use crate::model::Result;
use crate::utils::{human_duration, ratio};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRecord {
    pub user: String,
    pub task_name: String,
    pub task_url: String,
    pub issue_type: IssueType,
    pub time_estimate: String,
    pub time_spent: String,
    pub ratio: u64,
}

impl From<&FullReportRow> for ExportRecord {
    fn from(row: &FullReportRow) -> Self {
        Self {
            user: row.user_name.clone(),
            task_name: row.task_name.clone(),
            task_url: row.task_url.clone(),
            issue_type: row.issue_type,
            time_estimate: human_duration(row.estimate_seconds),
            time_spent: human_duration(row.spent_seconds),
            ratio: ratio(row.estimate_seconds, row.spent_seconds),
        }
    }
}

pub fn write_export(path: &Path, rows: &[FullReportRow]) -> Result<()> {
    let records = rows.iter().map(ExportRecord::from).collect::<Vec<_>>();
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(&records)?)?;
    info!(path = %path.display(), records = records.len(), "report exported");
    Ok(())
}
