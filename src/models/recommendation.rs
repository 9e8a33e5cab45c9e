use serde::{Deserialize, Serialize};

use crate::models::activity::{Activity, UNKNOWN_CATEGORY};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct QuickRecommendation {
    pub name: String,
    #[serde(rename = "type", default)]
    pub place_type: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub price_range: Option<String>,
    #[serde(default)]
    pub opening_hours: Option<String>,
    #[serde(default)]
    pub rating: Option<f32>,
}

#[derive(Debug, Deserialize, Default)]
pub struct QuickRecommendationsResponse {
    #[serde(default)]
    pub recommendations: Vec<QuickRecommendation>,
}

fn or_fallback(value: Option<&String>, fallback: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.clone(),
        _ => fallback.to_string(),
    }
}

impl QuickRecommendation {
    /// Map into the activity shape. The `name-index` id is a display key for
    /// this response only; it is not stable across requests.
    pub fn into_activity(self, index: usize) -> Activity {
        Activity {
            id: format!("{}-{}", self.name, index),
            category: or_fallback(self.place_type.as_ref(), UNKNOWN_CATEGORY),
            location: or_fallback(self.address.as_ref(), "Unknown location"),
            image: self.image_url.unwrap_or_default(),
            price: or_fallback(self.price_range.as_ref(), "N/A"),
            title: self.name,
            duration: None,
            rating: self.rating,
            halal: None,
        }
    }
}

impl QuickRecommendationsResponse {
    pub fn into_activities(self) -> Vec<Activity> {
        self.recommendations
            .into_iter()
            .enumerate()
            .map(|(index, rec)| rec.into_activity(index))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_entry_mapping() {
        let raw = r#"{"recommendations":[{"name":"X","type":"food"}]}"#;
        let response: QuickRecommendationsResponse = serde_json::from_str(raw).unwrap();
        let activities = response.into_activities();

        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].id, "X-0");
        assert_eq!(activities[0].title, "X");
        assert_eq!(activities[0].category, "food");
        assert_eq!(activities[0].location, "Unknown location");
        assert_eq!(activities[0].price, "N/A");
    }

    #[test]
    fn test_missing_type_and_extra_fields() {
        let raw = r#"{"recommendations":[
            {"name":"Jalan Alor","address":"Bukit Bintang","halal_status":"Mixed","rating":4.5},
            {"name":"Jalan Alor","type":"Food","price_range":"RM 10-30"}
        ],"generated_at":"2025-01-01T00:00:00"}"#;
        let response: QuickRecommendationsResponse = serde_json::from_str(raw).unwrap();
        let activities = response.into_activities();

        assert_eq!(activities[0].category, "Unknown");
        assert_eq!(activities[0].location, "Bukit Bintang");
        assert_eq!(activities[0].rating, Some(4.5));
        assert_eq!(activities[0].halal, None);
        // Repeated names stay distinct through the index suffix.
        assert_eq!(activities[1].id, "Jalan Alor-1");
        assert_eq!(activities[1].price, "RM 10-30");
    }
}
