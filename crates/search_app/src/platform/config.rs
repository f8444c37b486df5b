//! Startup configuration, read once from the environment.

use std::time::Duration;

use log::LevelFilter;
use search_engine::{ApiSettings, DEFAULT_BASE_URL};

use super::logging::LogDestination;

pub const ENV_API_URL: &str = "SEARCH_API_URL";
pub const ENV_API_TIMEOUT_SECS: &str = "SEARCH_API_TIMEOUT_SECS";
pub const ENV_LOG: &str = "SEARCH_CLIENT_LOG";
pub const ENV_LOG_LEVEL: &str = "SEARCH_CLIENT_LOG_LEVEL";

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api: ApiSettings,
    pub log_destination: LogDestination,
    pub log_level: LevelFilter,
    /// Problems found while reading the environment. Logged once the logger
    /// is up, since the logger itself depends on this config.
    pub warnings: Vec<String>,
}

impl ClientConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut warnings = Vec::new();
        let mut api = ApiSettings::default();

        api.base_url = lookup(ENV_API_URL)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        if let Some(raw) = lookup(ENV_API_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => api.request_timeout = Duration::from_secs(secs),
                _ => warnings.push(format!(
                    "ignoring {ENV_API_TIMEOUT_SECS}={raw:?}; using {}s",
                    api.request_timeout.as_secs()
                )),
            }
        }

        let log_destination = match lookup(ENV_LOG) {
            None => LogDestination::File,
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "file" => LogDestination::File,
                "terminal" => LogDestination::Terminal,
                "both" => LogDestination::Both,
                _ => {
                    warnings.push(format!("ignoring {ENV_LOG}={raw:?}; logging to file"));
                    LogDestination::File
                }
            },
        };

        let log_level = match lookup(ENV_LOG_LEVEL) {
            None => DEFAULT_LOG_LEVEL,
            Some(raw) => raw.trim().parse::<LevelFilter>().unwrap_or_else(|_| {
                warnings.push(format!(
                    "ignoring {ENV_LOG_LEVEL}={raw:?}; using {DEFAULT_LOG_LEVEL}"
                ));
                DEFAULT_LOG_LEVEL
            }),
        };

        Self {
            api,
            log_destination,
            log_level,
            warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> ClientConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ClientConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]);

        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.request_timeout, Duration::from_secs(30));
        assert_eq!(config.log_destination, LogDestination::File);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn base_url_is_trimmed() {
        let config = config_from(&[(ENV_API_URL, " http://backend:8000/ ")]);
        assert_eq!(config.api.base_url, "http://backend:8000");
        assert_eq!(
            config.api.search_endpoint().unwrap().as_str(),
            "http://backend:8000/api/search"
        );
    }

    #[test]
    fn blank_base_url_falls_back() {
        let config = config_from(&[(ENV_API_URL, "   ")]);
        assert_eq!(config.api.base_url, "http://localhost:8000");
    }

    #[test]
    fn timeout_and_log_destination_are_parsed() {
        let config = config_from(&[(ENV_API_TIMEOUT_SECS, "5"), (ENV_LOG, "Both")]);
        assert_eq!(config.api.request_timeout, Duration::from_secs(5));
        assert_eq!(config.log_destination, LogDestination::Both);
    }

    #[test]
    fn log_level_is_parsed() {
        assert_eq!(config_from(&[(ENV_LOG_LEVEL, "debug")]).log_level, LevelFilter::Debug);
        assert_eq!(config_from(&[(ENV_LOG_LEVEL, " TRACE ")]).log_level, LevelFilter::Trace);
        assert_eq!(config_from(&[(ENV_LOG_LEVEL, "off")]).log_level, LevelFilter::Off);
    }

    #[test]
    fn invalid_log_level_warns_and_keeps_info() {
        let config = config_from(&[(ENV_LOG_LEVEL, "loud")]);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(
            config.warnings,
            vec![format!("ignoring {ENV_LOG_LEVEL}=\"loud\"; using INFO")]
        );
    }

    #[test]
    fn invalid_values_warn_and_keep_defaults() {
        let config = config_from(&[(ENV_API_TIMEOUT_SECS, "soon"), (ENV_LOG, "syslog")]);
        assert_eq!(config.api.request_timeout, Duration::from_secs(30));
        assert_eq!(config.log_destination, LogDestination::File);
        assert_eq!(config.warnings.len(), 2);
    }
}
