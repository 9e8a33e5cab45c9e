use log::{debug, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

use crate::config::{AppConfig, ConfigError};
use crate::models::activity::Activity;
use crate::models::preferences::UserPreferences;
use crate::models::recommendation::QuickRecommendationsResponse;

const QUICK_PATH: &str = "/api/recommendations/quick";
pub const DEFAULT_TOP_N: u32 = 5;

/// Query forwarded to the quick recommendation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickQuery {
    pub dietary: String,
    pub accessibility: String,
    pub top_n: u32,
}

impl Default for QuickQuery {
    fn default() -> Self {
        Self {
            dietary: "No preference".to_string(),
            accessibility: "No preference".to_string(),
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl QuickQuery {
    pub fn for_preferences(preferences: Option<&UserPreferences>) -> Self {
        match preferences {
            Some(prefs) => Self {
                dietary: prefs.dietary_param().to_string(),
                accessibility: prefs.accessibility_param().to_string(),
                top_n: DEFAULT_TOP_N,
            },
            None => Self::default(),
        }
    }
}

#[derive(Debug)]
pub enum RecommendationError {
    HttpError(reqwest::Error),
    ResponseError(String),
    ConfigError(ConfigError),
}

impl fmt::Display for RecommendationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecommendationError::HttpError(err) => write!(f, "HTTP error: {}", err),
            RecommendationError::ResponseError(msg) => write!(f, "Response error: {}", msg),
            RecommendationError::ConfigError(err) => write!(f, "{}", err),
        }
    }
}

impl Error for RecommendationError {}

impl From<reqwest::Error> for RecommendationError {
    fn from(err: reqwest::Error) -> Self {
        RecommendationError::HttpError(err)
    }
}

impl From<ConfigError> for RecommendationError {
    fn from(err: ConfigError) -> Self {
        RecommendationError::ConfigError(err)
    }
}

pub struct RecommendationService {
    client: Client,
    endpoint: url::Url,
}

impl RecommendationService {
    pub fn new(config: &AppConfig) -> Result<Self, RecommendationError> {
        let client = Client::builder().timeout(config.http_timeout).build()?;
        let endpoint = config.backend_endpoint(QUICK_PATH)?;
        Ok(Self { client, endpoint })
    }

    pub async fn fetch_quick(
        &self,
        query: &QuickQuery,
    ) -> Result<Vec<Activity>, RecommendationError> {
        debug!("Fetching quick recommendations: {:?}", query);
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(RecommendationError::ResponseError(format!(
                "Recommendations request failed with status {}: {}",
                status, error_text
            )));
        }

        let parsed: QuickRecommendationsResponse = response.json().await.map_err(|e| {
            RecommendationError::ResponseError(format!("Failed to parse response: {}", e))
        })?;
        Ok(parsed.into_activities())
    }

    /// For-You row contents. Any failure degrades to an empty row.
    pub async fn for_you(&self, preferences: Option<&UserPreferences>) -> Vec<Activity> {
        let query = QuickQuery::for_preferences(preferences);
        match self.fetch_quick(&query).await {
            Ok(activities) => activities,
            Err(e) => {
                warn!("Quick recommendations unavailable: {}", e);
                Vec::new()
            }
        }
    }
}
