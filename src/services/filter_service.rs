use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::activity::Activity;

/// Tri-state halal filter. `Any` ignores the activity's flag entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HalalFilter {
    #[default]
    Any,
    Halal,
    NotHalal,
}

impl HalalFilter {
    pub fn from_flag(flag: Option<bool>) -> Self {
        match flag {
            None => HalalFilter::Any,
            Some(true) => HalalFilter::Halal,
            Some(false) => HalalFilter::NotHalal,
        }
    }

    fn matches(&self, halal: Option<bool>) -> bool {
        match self {
            HalalFilter::Any => true,
            HalalFilter::Halal => halal == Some(true),
            HalalFilter::NotHalal => halal == Some(false),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityFilter {
    pub query: String,
    /// Lowercase category keys. Empty means no restriction.
    pub categories: HashSet<String>,
    pub halal: HalalFilter,
    pub price_min: u32,
    pub price_max: u32,
}

impl Default for ActivityFilter {
    fn default() -> Self {
        Self {
            query: String::new(),
            categories: HashSet::new(),
            halal: HalalFilter::Any,
            price_min: 0,
            price_max: u32::MAX,
        }
    }
}

impl ActivityFilter {
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Add category keys, lowercased. The pseudo-key `all` is ignored.
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for category in categories {
            let key = category.as_ref().trim().to_lowercase();
            if !key.is_empty() && key != "all" {
                self.categories.insert(key);
            }
        }
        self
    }

    pub fn with_halal(mut self, halal: HalalFilter) -> Self {
        self.halal = halal;
        self
    }

    pub fn with_price_range(mut self, price_min: u32, price_max: u32) -> Self {
        self.price_min = price_min;
        self.price_max = price_max;
        self
    }

    pub fn matches(&self, activity: &Activity) -> bool {
        self.matches_query(activity)
            && self.matches_category(activity)
            && self.halal.matches(activity.halal)
            && self.matches_price(activity)
    }

    fn matches_query(&self, activity: &Activity) -> bool {
        // blank means no query; otherwise whitespace is part of the needle
        if self.query.trim().is_empty() {
            return true;
        }
        let query = self.query.to_lowercase();
        activity.title.to_lowercase().contains(&query)
            || activity.location.to_lowercase().contains(&query)
    }

    fn matches_category(&self, activity: &Activity) -> bool {
        self.categories.is_empty() || self.categories.contains(&activity.category_key())
    }

    fn matches_price(&self, activity: &Activity) -> bool {
        let price = activity.price_value();
        self.price_min <= price && price <= self.price_max
    }
}

/// Stable filter: the result keeps the input order and never reorders or
/// duplicates entries.
pub fn filter_activities(activities: &[Activity], filter: &ActivityFilter) -> Vec<Activity> {
    activities
        .iter()
        .filter(|activity| filter.matches(activity))
        .cloned()
        .collect()
}
