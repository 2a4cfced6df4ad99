use crate::model::{Error, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::Url;

/// A resource path plus the query parameters that select it. Parameters are
/// emitted in insertion order; unset optional filters are never emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourcePath {
    path: String,
    params: Vec<(&'static str, String)>,
}

impl ResourcePath {
    pub fn new(path: impl ToString) -> Self {
        Self {
            path: path.to_string(),
            params: vec![],
        }
    }

    pub fn param(mut self, key: &'static str, value: impl ToString) -> Self {
        self.params.push((key, value.to_string()));
        self
    }

    pub fn param_opt(self, key: &'static str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    pub fn labels(self, labels: &[String]) -> Self {
        if labels.is_empty() {
            return self;
        }
        self.param("labels", labels.join(","))
    }

    pub fn updated_after(self, datetime: Option<&DateTime<Utc>>) -> Self {
        self.param_opt(
            "updated_after",
            datetime.map(|datetime| datetime.to_rfc3339_opts(SecondsFormat::Millis, true)),
        )
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn page_url(&self, base: &Url, page: u32, per_page: u32) -> Result<Url> {
        let mut url = base
            .join(&self.path)
            .map_err(|e| Error::Config(format!("invalid resource path `{}`: {e}", self.path)))?;
        url.query_pairs_mut()
            .extend_pairs(self.params.iter().map(|(key, value)| (*key, value.as_str())))
            .append_pair("page", &page.to_string())
            .append_pair("per_page", &per_page.to_string());
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn base() -> Url {
        Url::parse("https://gitlab.test/api/v4/").unwrap()
    }

    #[test]
    fn page_cursor_is_appended_after_filters() {
        let url = ResourcePath::new("issues")
            .param("state", "all")
            .param("scope", "all")
            .page_url(&base(), 3, 100)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://gitlab.test/api/v4/issues?state=all&scope=all&page=3&per_page=100"
        );
    }

    #[test]
    fn unset_optional_filters_are_skipped() {
        let resource = ResourcePath::new("merge_requests")
            .labels(&[])
            .param_opt("milestone", None::<String>)
            .updated_after(None)
            .param("scope", "all");
        let url = resource.page_url(&base(), 1, 100).unwrap();
        assert_eq!(url.query(), Some("scope=all&page=1&per_page=100"));
    }

    #[test]
    fn labels_and_dates_are_encoded() {
        let after = Utc.with_ymd_and_hms(2021, 3, 1, 0, 0, 0).unwrap();
        let url = ResourcePath::new("issues")
            .labels(&["multiple assignees".to_string(), "backend".to_string()])
            .updated_after(Some(&after))
            .page_url(&base(), 1, 20)
            .unwrap();
        assert_eq!(
            url.query(),
            Some("labels=multiple+assignees%2Cbackend&updated_after=2021-03-01T00%3A00%3A00.000Z&page=1&per_page=20")
        );
    }

    #[test]
    fn nested_paths_stay_under_the_api_root() {
        let url = ResourcePath::new("projects/7/issues/12/notes")
            .page_url(&base(), 1, 100)
            .unwrap();
        assert_eq!(url.path(), "/api/v4/projects/7/issues/12/notes");
    }
}
