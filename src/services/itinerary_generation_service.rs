use futures::future::BoxFuture;
use log::{debug, info};
use std::fmt;
use std::time::Duration;

use crate::config::{AppConfig, ConfigError, ItineraryMode};
use crate::models::itinerary::{ItineraryItem, ItineraryResponse, TripParams};

const ITINERARY_PATH: &str = "/api/itinerary";

#[derive(Debug)]
pub enum ItineraryError {
    InvalidParams(String),
    HttpError(reqwest::Error),
    ResponseError(String),
    ConfigError(ConfigError),
}

impl fmt::Display for ItineraryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItineraryError::InvalidParams(msg) => write!(f, "Invalid trip parameters: {}", msg),
            ItineraryError::HttpError(err) => write!(f, "HTTP error: {}", err),
            ItineraryError::ResponseError(msg) => write!(f, "Response error: {}", msg),
            ItineraryError::ConfigError(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ItineraryError {}

impl From<reqwest::Error> for ItineraryError {
    fn from(err: reqwest::Error) -> Self {
        ItineraryError::HttpError(err)
    }
}

impl From<ConfigError> for ItineraryError {
    fn from(err: ConfigError) -> Self {
        ItineraryError::ConfigError(err)
    }
}

/// Something that turns trip parameters into an itinerary.
pub trait ItineraryBackend: Send + Sync {
    fn name(&self) -> &'static str;

    fn generate<'a>(
        &'a self,
        params: &'a TripParams,
    ) -> BoxFuture<'a, Result<ItineraryResponse, ItineraryError>>;
}

/// Waits `delay`, then returns the fixed Kuala Lumpur day plan.
pub struct SimulatedItineraryBackend {
    delay: Duration,
}

impl SimulatedItineraryBackend {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl ItineraryBackend for SimulatedItineraryBackend {
    fn name(&self) -> &'static str {
        "simulated"
    }

    fn generate<'a>(
        &'a self,
        params: &'a TripParams,
    ) -> BoxFuture<'a, Result<ItineraryResponse, ItineraryError>> {
        Box::pin(async move {
            debug!("Simulating itinerary for start time {}", params.start_time);
            tokio::time::sleep(self.delay).await;
            Ok(sample_itinerary())
        })
    }
}

pub fn sample_itinerary() -> ItineraryResponse {
    ItineraryResponse {
        itinerary: vec![
            ItineraryItem {
                time: "09:00".to_string(),
                place: "Nasi Lemak Wanjo".to_string(),
                item_type: "Breakfast".to_string(),
                reasoning: "Popular local breakfast spot with halal options".to_string(),
                image_url: "https://images.unsplash.com/photo-1604999333679-b86d54738315?w=800"
                    .to_string(),
                address: "Kampung Baru, Kuala Lumpur".to_string(),
                opening_hours: "6:00 AM - 12:00 PM".to_string(),
                price_range: "RM 5-15".to_string(),
                halal_status: "Halal".to_string(),
                description: "Authentic Malaysian breakfast experience".to_string(),
                accessibility_info: "Street-level access".to_string(),
                how_to_get_there: "LRT to Kampung Baru station, 5 min walk".to_string(),
            },
            ItineraryItem {
                time: "11:00".to_string(),
                place: "Batu Caves".to_string(),
                item_type: "Cultural Site".to_string(),
                reasoning: "Iconic landmark with cultural significance".to_string(),
                image_url: "https://images.unsplash.com/photo-1596422846543-75c6fc197f07?w=800"
                    .to_string(),
                address: "Gombak, Selangor".to_string(),
                opening_hours: "6:00 AM - 9:00 PM".to_string(),
                price_range: "Free entry".to_string(),
                halal_status: "N/A".to_string(),
                description: "Famous limestone hill with colorful stairs and Hindu temple"
                    .to_string(),
                accessibility_info: "272 steps to main cave - not wheelchair accessible"
                    .to_string(),
                how_to_get_there: "KTM Komuter to Batu Caves station".to_string(),
            },
        ],
        summary: "A perfect day exploring KL's culture and cuisine with convenient public transport connections.".to_string(),
        transport_notes: "Use Touch 'n Go card for seamless travel on LRT and KTM lines.".to_string(),
    }
}

/// Posts the parameters to the itinerary backend.
pub struct RemoteItineraryBackend {
    client: reqwest::Client,
    endpoint: url::Url,
}

impl RemoteItineraryBackend {
    pub fn new(config: &AppConfig) -> Result<Self, ItineraryError> {
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()?;
        let endpoint = config.backend_endpoint(ITINERARY_PATH)?;
        Ok(Self { client, endpoint })
    }
}

impl ItineraryBackend for RemoteItineraryBackend {
    fn name(&self) -> &'static str {
        "remote"
    }

    fn generate<'a>(
        &'a self,
        params: &'a TripParams,
    ) -> BoxFuture<'a, Result<ItineraryResponse, ItineraryError>> {
        Box::pin(async move {
            let response = self
                .client
                .post(self.endpoint.clone())
                .json(params)
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                return Err(ItineraryError::ResponseError(format!(
                    "Itinerary request failed with status {}: {}",
                    status, error_text
                )));
            }

            response
                .json::<ItineraryResponse>()
                .await
                .map_err(|e| ItineraryError::ResponseError(format!("Failed to parse response: {}", e)))
        })
    }
}

pub fn backend_from_config(
    config: &AppConfig,
) -> Result<Box<dyn ItineraryBackend>, ItineraryError> {
    let backend: Box<dyn ItineraryBackend> = match config.itinerary_mode {
        ItineraryMode::Simulated => Box::new(SimulatedItineraryBackend::new(config.itinerary_delay)),
        ItineraryMode::Remote => Box::new(RemoteItineraryBackend::new(config)?),
    };
    info!("Itinerary backend: {}", backend.name());
    Ok(backend)
}
