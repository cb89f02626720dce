pub const DEFAULT_CRAWL_URL: &str = "https://hyrox.com/event/hyrox-frankfurt/";
pub const DEFAULT_SEARCH_TERM: &str = "Ticket sales start soon!";

const CRAWL_URL_VAR: &str = "CRAWL_URL";
const SEARCH_TERM_VAR: &str = "SEARCH_TERM";
const USER_KEY_VAR: &str = "PUSHOVER_USER_KEY";
const APP_TOKEN_VAR: &str = "PUSHOVER_APP_TOKEN";

#[derive(Clone, PartialEq, Eq)]
pub struct PushoverCredentials {
    pub user_key: String,
    pub app_token: String,
}

// Keep credentials out of logs.
impl std::fmt::Debug for PushoverCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PushoverCredentials").finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub crawl_url: String,
    pub search_term: String,
    pub pushover: Option<PushoverCredentials>,
}

impl Config {
    pub fn notifications_enabled(&self) -> bool {
        self.pushover.is_some()
    }
}

pub fn get_config() -> Config {
    config_from(|key| std::env::var(key).ok())
}

fn config_from(lookup: impl Fn(&str) -> Option<String>) -> Config {
    // An empty variable counts as unset
    let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

    let pushover = match (var(USER_KEY_VAR), var(APP_TOKEN_VAR)) {
        (Some(user_key), Some(app_token)) => Some(PushoverCredentials {
            user_key,
            app_token,
        }),
        _ => None,
    };

    Config {
        crawl_url: var(CRAWL_URL_VAR).unwrap_or_else(|| DEFAULT_CRAWL_URL.to_string()),
        search_term: var(SEARCH_TERM_VAR).unwrap_or_else(|| DEFAULT_SEARCH_TERM.to_string()),
        pushover,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        config_from(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_apply_when_unset() {
        let config = config_with(&[]);

        assert_eq!(config.crawl_url, DEFAULT_CRAWL_URL);
        assert_eq!(config.search_term, DEFAULT_SEARCH_TERM);
        assert!(!config.notifications_enabled());
    }

    #[test]
    fn test_reads_all_variables() {
        let config = config_with(&[
            ("CRAWL_URL", "https://example.com/event"),
            ("SEARCH_TERM", "Coming soon"),
            ("PUSHOVER_USER_KEY", "user"),
            ("PUSHOVER_APP_TOKEN", "token"),
        ]);

        assert_eq!(config.crawl_url, "https://example.com/event");
        assert_eq!(config.search_term, "Coming soon");
        assert_eq!(
            config.pushover,
            Some(PushoverCredentials {
                user_key: "user".to_string(),
                app_token: "token".to_string(),
            })
        );
    }

    #[test]
    fn test_one_credential_disables_notifications() {
        let config = config_with(&[("PUSHOVER_USER_KEY", "user")]);
        assert!(config.pushover.is_none());

        let config = config_with(&[("PUSHOVER_APP_TOKEN", "token")]);
        assert!(config.pushover.is_none());
    }

    #[test]
    fn test_empty_values_are_treated_as_unset() {
        let config = config_with(&[
            ("SEARCH_TERM", ""),
            ("PUSHOVER_USER_KEY", ""),
            ("PUSHOVER_APP_TOKEN", "token"),
        ]);

        assert_eq!(config.search_term, DEFAULT_SEARCH_TERM);
        assert!(config.pushover.is_none());
    }

    #[test]
    fn test_debug_output_hides_credentials() {
        let config = config_with(&[
            ("PUSHOVER_USER_KEY", "secret-user"),
            ("PUSHOVER_APP_TOKEN", "secret-token"),
        ]);

        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret-user"));
        assert!(!debug.contains("secret-token"));
    }
}
