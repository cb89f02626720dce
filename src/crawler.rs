use crate::config::Config;
use crate::error::Result;
use crate::fetch;
use crate::http::HttpClient;
use crate::log::Logger;
use crate::matcher::{self, MatchResult};
use crate::pushover::{Message, Pushover};

pub const ALERT_TITLE: &str = "HYROX Tickets Available!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The placeholder is gone, so tickets may be on sale.
    PhraseAbsent,
    PhrasePresent,
    Failed,
}

/// Fetches the page once and searches it for the configured term.
pub fn check(http: &dyn HttpClient, config: &Config, log: &dyn Logger) -> Result<MatchResult> {
    log.info(&format!("🔍 Crawling: {}", config.crawl_url));

    let page = fetch::fetch_page(http, &config.crawl_url)?;
    log.info(&format!(
        "✅ Successfully fetched the page (Status: {})",
        page.status
    ));

    let page_text = fetch::extract_text(&page.body);
    let result = matcher::find_phrase(&page_text, &config.search_term);

    if result.present {
        log.info(&format!(
            "📌 STILL PRESENT: '{}' was found on the page.",
            config.search_term
        ));

        if let Some(context) = &result.context {
            log.info(&format!(
                "📍 Context (line {}): {}",
                context.number, context.text
            ));
        }
    } else {
        log.info(&format!(
            "🎯 GONE: '{}' is no longer on the page!",
            config.search_term
        ));
    }

    Ok(result)
}

/// Runs the check and alerts once if the search term has disappeared.
pub fn crawl(http: &dyn HttpClient, config: &Config, log: &dyn Logger) -> CheckOutcome {
    let result = match check(http, config, log) {
        Ok(result) => result,
        Err(e) => {
            log.error(&format!("Error checking the website: {}", e));
            return CheckOutcome::Failed;
        }
    };

    if result.present {
        return CheckOutcome::PhrasePresent;
    }

    let Some(credentials) = &config.pushover else {
        log.info("📱 Pushover credentials not provided - skipping notification");
        return CheckOutcome::PhraseAbsent;
    };

    Pushover::new(http, credentials, log).send(&alert_message(config));

    CheckOutcome::PhraseAbsent
}

// Sent only once the term is gone, so there is no context line to include
fn alert_message(config: &Config) -> Message {
    Message::new(format!(
        "🎉 HYROX tickets update!\n\nNo longer found: '{}'\nURL: {}",
        config.search_term, config.crawl_url,
    ))
    .with_title(ALERT_TITLE)
}
