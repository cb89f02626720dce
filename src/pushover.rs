use crate::config::PushoverCredentials;
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::log::Logger;
use serde::Deserialize;

pub const PUSHOVER_API_URL: &str = "https://api.pushover.net/1/messages.json";
pub const DEFAULT_TITLE: &str = "HYROX Crawler Alert";

const STATUS_ACCEPTED: i64 = 1;

#[derive(Debug, Clone)]
pub struct Message {
    pub title: String,
    pub message: String,
    pub priority: Option<i8>,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            message: message.into(),
            priority: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_priority(mut self, priority: i8) -> Self {
        self.priority = Some(priority);
        self
    }
}

#[derive(Deserialize)]
struct PushoverResponse {
    status: Option<i64>,
    #[serde(default)]
    errors: Vec<String>,
}

pub struct Pushover<'a> {
    http: &'a dyn HttpClient,
    credentials: &'a PushoverCredentials,
    log: &'a dyn Logger,
}

impl<'a> Pushover<'a> {
    pub fn new(
        http: &'a dyn HttpClient,
        credentials: &'a PushoverCredentials,
        log: &'a dyn Logger,
    ) -> Self {
        Self {
            http,
            credentials,
            log,
        }
    }

    /// Sends `message` once. Every failure is logged and reported as `false`.
    pub fn send(&self, message: &Message) -> bool {
        match self.try_send(message) {
            Ok(()) => {
                self.log.info("📱 Pushover notification sent successfully!");
                true
            }
            Err(e) => {
                self.log
                    .error(&format!("Failed to send Pushover notification: {}", e));
                false
            }
        }
    }

    fn try_send(&self, message: &Message) -> Result<()> {
        let priority = message.priority.map(|p| p.to_string());

        let mut params = vec![
            ("token", self.credentials.app_token.as_str()),
            ("user", self.credentials.user_key.as_str()),
            ("message", message.message.as_str()),
            ("title", message.title.as_str()),
        ];

        if let Some(priority) = &priority {
            params.push(("priority", priority.as_str()));
        }

        let response = self
            .http
            .post_form(PUSHOVER_API_URL, &params)
            .map_err(|e| Error::Notification(format!("POST failed: {}", e)))?;

        if !response.is_success() {
            return Err(Error::Notification(format!(
                "Pushover API returned status {}: {}",
                response.status, response.body
            )));
        }

        let result = serde_json::from_str::<PushoverResponse>(&response.body)
            .map_err(|e| Error::Notification(format!("Invalid Pushover response: {}", e)))?;

        match result.status {
            Some(STATUS_ACCEPTED) => Ok(()),
            _ if !result.errors.is_empty() => Err(Error::Notification(format!(
                "Pushover API error: {}",
                result.errors.join(", ")
            ))),
            status => Err(Error::Notification(format!(
                "Pushover API error: unexpected status {:?}",
                status
            ))),
        }
    }
}
