use serde::Serialize;

use crate::models::itinerary::{ItineraryItem, ItineraryResponse};
use crate::services::localization::Localizer;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailLine {
    pub key: &'static str,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopCard {
    pub index: usize,
    pub time: String,
    pub place: String,
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub details: Vec<DetailLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItineraryView {
    pub title: String,
    pub stops: Vec<StopCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<DetailLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport_notes: Option<DetailLine>,
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn line(localizer: &Localizer, key: &'static str, value: &str) -> Option<DetailLine> {
    non_empty(value).map(|value| DetailLine {
        key,
        label: localizer.t(key).to_string(),
        value,
    })
}

fn stop_card(index: usize, item: &ItineraryItem, localizer: &Localizer) -> StopCard {
    let details = [
        ("tripPlanner.address", item.address.as_str()),
        ("tripPlanner.openingHours", item.opening_hours.as_str()),
        ("tripPlanner.priceRange", item.price_range.as_str()),
        ("tripPlanner.halalStatus", item.halal_status.as_str()),
        ("tripPlanner.accessibilityInfo", item.accessibility_info.as_str()),
        ("tripPlanner.howToGetThere", item.how_to_get_there.as_str()),
        ("tripPlanner.why", item.reasoning.as_str()),
    ]
    .into_iter()
    .filter_map(|(key, value)| line(localizer, key, value))
    .collect();

    StopCard {
        index,
        time: item.time.clone(),
        place: item.place.clone(),
        item_type: item.item_type.clone(),
        image_url: non_empty(&item.image_url),
        description: non_empty(&item.description),
        details,
    }
}

/// Lay out a generated itinerary as stop cards. Enrichment fields the backend
/// left blank produce no line at all.
pub fn render_itinerary(response: &ItineraryResponse, localizer: &Localizer) -> ItineraryView {
    ItineraryView {
        title: localizer.t("tripPlanner.title").to_string(),
        stops: response
            .itinerary
            .iter()
            .enumerate()
            .map(|(index, item)| stop_card(index, item, localizer))
            .collect(),
        summary: line(localizer, "tripPlanner.summary", &response.summary),
        transport_notes: line(localizer, "tripPlanner.transportNotes", &response.transport_notes),
    }
}
