use anyhow::Result;
use hyrox_notifier::crawler::{self, CheckOutcome};
use hyrox_notifier::http::ReqwestHttpClient;
use hyrox_notifier::log;

const APP_NAME: &str = "🏃‍♂️ HYROX Frankfurt Website Crawler";

fn main() -> Result<()> {
    let config = hyrox_notifier::get_config();
    let log = log::get_logger(APP_NAME);

    std::panic::set_hook(Box::new(|info| {
        log::get_logger(APP_NAME).panic(info);
    }));

    log.start();
    log.info(&format!("Target URL: {}", config.crawl_url));
    log.info(&format!("Searching for: '{}'", config.search_term));
    log.info(&format!(
        "Pushover notifications: {}",
        if config.notifications_enabled() {
            "Enabled"
        } else {
            "Disabled (missing credentials)"
        }
    ));
    log.info(&log::rule());

    // Every outcome exits 0, the next scheduled run is the retry
    let http = match ReqwestHttpClient::new() {
        Ok(http) => http,
        Err(e) => {
            log.error(&e.to_string());
            return Ok(());
        }
    };

    let outcome = crawler::crawl(&http, &config, log.as_ref());

    log.info(&format!("\n{}", log::rule()));
    match outcome {
        CheckOutcome::PhraseAbsent => log.info("🎉 SUCCESS: The target term was not found!"),
        CheckOutcome::PhrasePresent => log.info("😞 RESULT: The target term was found."),
        CheckOutcome::Failed => log.error("FAILED: The page could not be checked."),
    }

    Ok(())
}
