use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serialize};

/// Inputs to one generation request. Values match the planner's select options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct TripParams {
    pub start_time: String,
    pub dietary: String,
    pub transport: String,
    pub accessibility: String,
}

impl Default for TripParams {
    fn default() -> Self {
        Self {
            start_time: "09:00".to_string(),
            dietary: "No preference".to_string(),
            transport: "Public transport".to_string(),
            accessibility: "No preference".to_string(),
        }
    }
}

impl TripParams {
    /// `start_time` must be a 24h `HH:MM` value.
    pub fn has_valid_start_time(&self) -> bool {
        self.start_time.len() == 5 && NaiveTime::parse_from_str(&self.start_time, "%H:%M").is_ok()
    }
}

// The backend leaves unknown enrichment fields as `null`.
fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ItineraryItem {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub time: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub place: String,
    #[serde(rename = "type", default, deserialize_with = "deserialize_nullable_string")]
    pub item_type: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub reasoning: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub image_url: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub address: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub opening_hours: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub price_range: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub halal_status: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub accessibility_info: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub how_to_get_there: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ItineraryResponse {
    #[serde(default)]
    pub itinerary: Vec<ItineraryItem>,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub summary: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub transport_notes: String,
}
