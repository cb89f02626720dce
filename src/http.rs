use crate::error::{Error, Result};
use std::time::Duration;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The two outbound calls a run can make. Transport failures are errors,
/// HTTP error statuses are not.
#[cfg_attr(test, mockall::automock)]
pub trait HttpClient {
    fn get(&self, url: &str) -> Result<HttpResponse>;

    fn post_form<'a>(&self, url: &str, params: &[(&'a str, &'a str)]) -> Result<HttpResponse>;
}

pub struct ReqwestHttpClient {
    client: reqwest::blocking::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Unexpected(format!("Unable to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl HttpClient for ReqwestHttpClient {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        let response = self.client.get(url).send()?;
        into_response(response)
    }

    fn post_form<'a>(&self, url: &str, params: &[(&'a str, &'a str)]) -> Result<HttpResponse> {
        let response = self.client.post(url).form(params).send()?;
        into_response(response)
    }
}

fn into_response(response: reqwest::blocking::Response) -> Result<HttpResponse> {
    let status = response.status().as_u16();

    let body = response
        .text()
        .map_err(|e| Error::Unexpected(format!("Unable to read response body: {}", e)))?;

    Ok(HttpResponse { status, body })
}
