use crate::model::UserBrief;
use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Note {
    pub id: u64,
    #[serde(default)]
    pub body: String,
    pub author: UserBrief,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub system: bool,
}
