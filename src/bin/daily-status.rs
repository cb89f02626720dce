use anyhow::Result;
use hyrox_notifier::http::ReqwestHttpClient;
use hyrox_notifier::log;
use hyrox_notifier::status;
use std::process::ExitCode;

const APP_NAME: &str = "🤖 HYROX Crawler Daily Status";

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            log::get_logger(APP_NAME).error(&format!("{:?}", e));
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<bool> {
    let config = hyrox_notifier::get_config();
    let log = log::get_logger(APP_NAME);

    std::panic::set_hook(Box::new(|info| {
        log::get_logger(APP_NAME).panic(info);
    }));

    log.start();

    let http = ReqwestHttpClient::new()?;
    let now = chrono::Local::now();

    Ok(status::run_status_ping(&http, &config, log.as_ref(), &now))
}
