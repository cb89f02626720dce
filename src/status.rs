use crate::config::Config;
use crate::crawler;
use crate::error::Result;
use crate::http::HttpClient;
use crate::log::Logger;
use crate::matcher::MatchResult;
use crate::pushover::{Message, Pushover};
use chrono::{DateTime, TimeZone};

pub const STATUS_TITLE: &str = "🏃‍♂️ HYROX Crawler Daily Status";
pub const HEALTHY: &str = "✅ HEALTHY";
pub const FAILED: &str = "❌ FAILED";

const STATUS_PRIORITY: i8 = 0;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn build_report<Tz: TimeZone>(
    now: &DateTime<Tz>,
    config: &Config,
    result: &Result<MatchResult>,
) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let crawler_status = if result.is_ok() { HEALTHY } else { FAILED };

    let search_status = match result {
        Ok(MatchResult { present: true, .. }) => {
            "🚫 No tickets available yet - the search term is still on the page".to_string()
        }
        Ok(MatchResult { present: false, .. }) => {
            "🎉 The search term is gone - tickets may be on sale!".to_string()
        }
        Err(e) => format!("⚠️ Could not check the page: {}", e),
    };

    format!(
        "🤖 Daily HYROX Crawler Status Report\n\
         \n\
         📅 Date: {}\n\
         🩺 Crawler: {}\n\
         {}\n\
         \n\
         🔗 Target: {}\n\
         📋 Current search: \"{}\"",
        now.format(TIMESTAMP_FORMAT),
        crawler_status,
        search_status,
        config.crawl_url,
        config.search_term,
    )
}

/// Self-tests the crawler and always tries to deliver the heartbeat. Returns
/// whether the heartbeat was delivered.
pub fn run_status_ping<Tz: TimeZone>(
    http: &dyn HttpClient,
    config: &Config,
    log: &dyn Logger,
    now: &DateTime<Tz>,
) -> bool
where
    Tz::Offset: std::fmt::Display,
{
    let result = crawler::check(http, config, log);

    if let Err(e) = &result {
        log.error(&format!("Crawler self-test failed: {}", e));
    }

    let report = build_report(now, config, &result);
    log.info(&report);

    let Some(credentials) = &config.pushover else {
        log.error("Daily status not sent: Pushover credentials missing");
        return false;
    };

    let heartbeat = Message::new(report)
        .with_title(STATUS_TITLE)
        .with_priority(STATUS_PRIORITY);

    Pushover::new(http, credentials, log).send(&heartbeat)
}
