use std::env;
use std::fmt;
use std::time::Duration;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const BACKEND_URL: &str = "http://localhost:8000";
const JAMAI_BASE_URL: &str = "https://api.jamaibase.com";
const STORAGE_PATH: &str = "data/local_storage.json";
const ACTIVITIES_PATH: &str = "data/activities.json";
const FRONTEND_URL: &str = "http://localhost:5173";
const ITINERARY_DELAY_MS: u64 = 1500;
const HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItineraryMode {
    /// Fixed delay, static payload.
    Simulated,
    /// `POST {backend}/api/itinerary`.
    Remote,
}

impl ItineraryMode {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "simulated" | "mock" => Some(ItineraryMode::Simulated),
            "remote" | "backend" => Some(ItineraryMode::Remote),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidUrl(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub backend_url: String,
    pub jamai_base_url: String,
    pub jamai_project_id: Option<String>,
    pub jamai_api_pat: Option<String>,
    pub storage_path: String,
    pub activities_path: String,
    pub frontend_url: String,
    pub itinerary_mode: ItineraryMode,
    pub itinerary_delay: Duration,
    pub http_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            backend_url: BACKEND_URL.to_string(),
            jamai_base_url: JAMAI_BASE_URL.to_string(),
            jamai_project_id: None,
            jamai_api_pat: None,
            storage_path: STORAGE_PATH.to_string(),
            activities_path: ACTIVITIES_PATH.to_string(),
            frontend_url: FRONTEND_URL.to_string(),
            itinerary_mode: ItineraryMode::Simulated,
            itinerary_delay: Duration::from_millis(ITINERARY_DELAY_MS),
            http_timeout: Duration::from_secs(HTTP_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    /// Read configuration from environment variables, falling back to defaults
    /// for anything missing or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            backend_url: env::var("BACKEND_URL").unwrap_or(defaults.backend_url),
            jamai_base_url: env::var("JAMAI_BASE_URL").unwrap_or(defaults.jamai_base_url),
            jamai_project_id: non_empty_var("JAMAI_PROJECT_ID"),
            jamai_api_pat: non_empty_var("JAMAI_API_PAT"),
            storage_path: env::var("STORAGE_PATH").unwrap_or(defaults.storage_path),
            activities_path: env::var("ACTIVITIES_PATH").unwrap_or(defaults.activities_path),
            frontend_url: env::var("FRONTEND_URL").unwrap_or(defaults.frontend_url),
            itinerary_mode: env::var("ITINERARY_MODE")
                .ok()
                .and_then(|s| ItineraryMode::parse(&s))
                .unwrap_or(defaults.itinerary_mode),
            itinerary_delay: env::var("ITINERARY_DELAY_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.itinerary_delay),
            http_timeout: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.http_timeout),
        }
    }

    /// Join `path` onto the recommendations/itinerary backend base URL.
    pub fn backend_endpoint(&self, path: &str) -> Result<url::Url, ConfigError> {
        join_url(&self.backend_url, path)
    }

    pub fn jamai_endpoint(&self, path: &str) -> Result<url::Url, ConfigError> {
        join_url(&self.jamai_base_url, path)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn join_url(base: &str, path: &str) -> Result<url::Url, ConfigError> {
    let base = url::Url::parse(base)
        .map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", base, e)))?;
    base.join(path)
        .map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", path, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_defaults_when_env_missing() {
        for key in ["PORT", "ITINERARY_MODE", "ITINERARY_DELAY_MS", "JAMAI_API_PAT"] {
            env::remove_var(key);
        }

        let config = AppConfig::from_env();
        assert_eq!(config.port, 8080);
        assert_eq!(config.itinerary_mode, ItineraryMode::Simulated);
        assert_eq!(config.itinerary_delay, Duration::from_millis(1500));
        assert!(config.jamai_api_pat.is_none());
    }

    #[test]
    #[serial]
    fn test_env_overrides_and_bad_values() {
        env::set_var("PORT", "not-a-port");
        env::set_var("ITINERARY_MODE", "Remote");
        env::set_var("ITINERARY_DELAY_MS", "10");
        env::set_var("JAMAI_API_PAT", "   ");

        let config = AppConfig::from_env();
        assert_eq!(config.port, 8080);
        assert_eq!(config.itinerary_mode, ItineraryMode::Remote);
        assert_eq!(config.itinerary_delay, Duration::from_millis(10));
        assert!(config.jamai_api_pat.is_none());

        for key in ["PORT", "ITINERARY_MODE", "ITINERARY_DELAY_MS", "JAMAI_API_PAT"] {
            env::remove_var(key);
        }
    }

    #[test]
    fn test_backend_endpoint_join() {
        let config = AppConfig {
            backend_url: "http://localhost:8000".to_string(),
            ..AppConfig::default()
        };
        let url = config
            .backend_endpoint("/api/recommendations/quick")
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/recommendations/quick");
    }
}
