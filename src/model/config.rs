use crate::model::{Error, Result};
use reqwest::Url;
use std::env;

pub const DEFAULT_URL: &str = "https://gitlab.com/api/v4/";
pub const URL_ENV: &str = "GITLAB_URL";
pub const TOKEN_ENV: &str = "GITLAB_TOKEN";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub url: Url,
    pub token: String,
}

// Create
impl Config {
    pub fn from_env(url: Option<String>, token: Option<String>) -> Result<Self> {
        let url = url
            .or_else(|| env::var(URL_ENV).ok())
            .unwrap_or_else(|| DEFAULT_URL.to_string());
        let Some(token) = token.or_else(|| env::var(TOKEN_ENV).ok()) else {
            return Err(Error::Config(format!(
                "no access token, pass --token or set {TOKEN_ENV}"
            )));
        };
        Self::new(&url, token)
    }

    pub fn new(url: &str, token: impl ToString) -> Result<Self> {
        let token = token.to_string();
        if token.trim().is_empty() {
            return Err(Error::Config("access token is empty".to_string()));
        }
        let url = if url.ends_with('/') {
            url.to_string()
        } else {
            format!("{url}/")
        };
        let Ok(url) = Url::parse(&url) else {
            return Err(Error::Config(format!("not a valid url: {url}")));
        };
        Ok(Self { url, token })
    }
}
