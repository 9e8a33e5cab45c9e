use serde::Serialize;

use crate::models::activity::{Activity, Category, UNKNOWN_CATEGORY};
use crate::services::localization::Localizer;

const FOR_YOU_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBucket {
    /// Lowercase grouping key.
    #[serde(skip)]
    pub key: String,
    /// Display name as first seen in the input.
    pub category: String,
    pub activities: Vec<Activity>,
}

/// Category buckets in first-appearance order. Only non-empty buckets exist.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct CategoryGroups {
    buckets: Vec<CategoryBucket>,
}

impl CategoryGroups {
    /// Case-insensitive lookup.
    pub fn get(&self, category: &str) -> Option<&[Activity]> {
        let key = grouping_key(category);
        self.buckets
            .iter()
            .find(|b| b.key == key)
            .map(|b| b.activities.as_slice())
    }

    pub fn categories(&self) -> Vec<&str> {
        self.buckets.iter().map(|b| b.category.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryBucket> {
        self.buckets.iter()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

fn grouping_key(category: &str) -> String {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        UNKNOWN_CATEGORY.to_lowercase()
    } else {
        trimmed.to_lowercase()
    }
}

/// Bucket activities by category, ignoring case, keeping input order inside
/// each bucket.
pub fn group_by_category(activities: &[Activity]) -> CategoryGroups {
    let mut buckets: Vec<CategoryBucket> = Vec::new();
    for activity in activities {
        let key = grouping_key(&activity.category);
        match buckets.iter_mut().find(|b| b.key == key) {
            Some(bucket) => bucket.activities.push(activity.clone()),
            None => buckets.push(CategoryBucket {
                key,
                category: activity.display_category().to_string(),
                activities: vec![activity.clone()],
            }),
        }
    }
    CategoryGroups { buckets }
}

/// One horizontally scrolling row on the home page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeRow {
    pub key: String,
    pub title: String,
    pub activities: Vec<Activity>,
}

/// "For You" first, then the vocabulary buckets of `group_by_category` in
/// canonical order. Empty rows and off-vocabulary buckets are left out.
pub fn home_rows(activities: &[Activity], localizer: &Localizer) -> Vec<HomeRow> {
    let mut rows = Vec::with_capacity(Category::ALL.len() + 1);

    let for_you: Vec<Activity> = activities.iter().take(FOR_YOU_LIMIT).cloned().collect();
    if !for_you.is_empty() {
        rows.push(HomeRow {
            key: "forYou".to_string(),
            title: localizer.t("common.forYou").to_string(),
            activities: for_you,
        });
    }

    let groups = group_by_category(activities);
    for category in Category::ALL {
        let Some(members) = groups.get(category.key()) else {
            continue;
        };
        let translation_key = category.translation_key();
        rows.push(HomeRow {
            key: category.key().to_string(),
            title: localizer.t(&translation_key).to_string(),
            activities: members.to_vec(),
        });
    }

    rows
}
