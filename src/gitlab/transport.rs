use crate::model::{Error, Result};
use reqwest::header::HeaderMap;
use reqwest::{Client, Url};

pub const TOKEN_HEADER: &str = "PRIVATE-TOKEN";

#[derive(Debug, Clone)]
pub struct Response {
    pub body: String,
    pub headers: HeaderMap,
}

pub trait Transport {
    async fn get(&self, url: &Url, token: &str) -> Result<Response>;
}

#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &Url, token: &str) -> Result<Response> {
        let response = self
            .client
            .get(url.clone())
            .header(TOKEN_HEADER, token)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let headers = response.headers().clone();
        let body = response.text().await?;
        Ok(Response { body, headers })
    }
}
