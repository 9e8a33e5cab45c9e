use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// The fixed category vocabulary, in the order the home page shows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Activities,
    Nightlife,
    Nature,
    Shopping,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Activities,
        Category::Nightlife,
        Category::Nature,
        Category::Shopping,
    ];

    /// Lowercase key used by filters and translation lookups.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Activities => "activities",
            Category::Nightlife => "nightlife",
            Category::Nature => "nature",
            Category::Shopping => "shopping",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Activities => "Activities",
            Category::Nightlife => "Nightlife",
            Category::Nature => "Nature",
            Category::Shopping => "Shopping",
        }
    }

    pub fn translation_key(&self) -> String {
        format!("category.{}", self.key())
    }

    pub fn from_key(value: &str) -> Option<Self> {
        let value = value.trim().to_lowercase();
        Category::ALL.into_iter().find(|c| c.key() == value)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Activity {
    pub id: String,
    pub title: String,
    pub category: String,
    pub location: String,
    pub image: String,
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub halal: Option<bool>,
}

impl Activity {
    /// Numeric price used for range filtering.
    pub fn price_value(&self) -> u32 {
        derive_price(&self.price)
    }

    /// Lowercase category key for matching against filter sets.
    pub fn category_key(&self) -> String {
        self.category.trim().to_lowercase()
    }

    pub fn display_category(&self) -> &str {
        if self.category.trim().is_empty() {
            UNKNOWN_CATEGORY
        } else {
            &self.category
        }
    }
}

fn leading_number() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+").expect("static price pattern"))
}

/// Leading integer of a free-form price such as "8-15" or "RM 5-15".
/// Strings without digits ("Free", "Varies") and overflowing numbers derive to 0.
pub fn derive_price(price: &str) -> u32 {
    leading_number()
        .find(price)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Detail view of one activity. Every field is empty when the activity is
/// unknown, so callers never fail on a stale link.
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct ActivityDetail {
    pub id: String,
    pub title: String,
    pub category: String,
    pub location: String,
    pub image: String,
    pub price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    pub you_may_also_like: Vec<Activity>,
}

impl ActivityDetail {
    pub fn from_lookup(activity: Option<&Activity>, related: Vec<Activity>) -> Self {
        match activity {
            Some(a) => Self {
                id: a.id.clone(),
                title: a.title.clone(),
                category: a.category.clone(),
                location: a.location.clone(),
                image: a.image.clone(),
                price: a.price.clone(),
                duration: a.duration.clone().filter(|d| !d.is_empty()),
                rating: a.rating,
                you_may_also_like: related,
            },
            None => Self {
                you_may_also_like: related,
                ..Self::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_derivation() {
        assert_eq!(derive_price("8-15"), 8);
        assert_eq!(derive_price("Free"), 0);
        assert_eq!(derive_price("Varies"), 0);
        assert_eq!(derive_price("52"), 52);
        assert_eq!(derive_price("RM 5-15"), 5);
        assert_eq!(derive_price(""), 0);
        assert_eq!(derive_price("99999999999999999999"), 0);
    }

    #[test]
    fn test_category_keys() {
        assert_eq!(Category::from_key("Food"), Some(Category::Food));
        assert_eq!(Category::from_key(" nightlife "), Some(Category::Nightlife));
        assert_eq!(Category::from_key("all"), None);
        assert_eq!(Category::Shopping.translation_key(), "category.shopping");
    }

    #[test]
    fn test_display_category_fallback() {
        let activity = Activity {
            id: "1".to_string(),
            category: "  ".to_string(),
            ..Activity::default()
        };
        assert_eq!(activity.display_category(), "Unknown");
    }

    #[test]
    fn test_detail_for_missing_activity_is_empty() {
        let detail = ActivityDetail::from_lookup(None, vec![]);
        assert_eq!(detail.title, "");
        assert_eq!(detail.price, "");
        assert!(detail.rating.is_none());
    }
}
