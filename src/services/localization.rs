use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::db::store::{load_preferences, KeyValueStore, StoreError, LANGUAGE_KEY};
use crate::models::preferences::UserType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    My,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::My => "my",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "en" => Some(Language::En),
            "my" => Some(Language::My),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::My,
            Language::My => Language::En,
        }
    }

    /// Locals get Malay, everyone else English.
    pub fn for_user_type(user_type: UserType) -> Self {
        match user_type {
            UserType::Local => Language::My,
            UserType::Tourist => Language::En,
        }
    }
}

// (key, en, my)
const TRANSLATIONS: &[(&str, &str, &str)] = &[
    ("nav.home", "Home", "Utama"),
    ("nav.search", "Search", "Cari"),
    ("nav.favorites", "Favorites", "Kegemaran"),
    ("nav.profile", "Profile", "Profil"),
    ("header.title", "Discover KV", "Terokai Lembah Klang"),
    ("header.subtitle", "Your personalized Klang Valley guide", "Panduan peribadi Lembah Klang anda"),
    ("header.forYou", "For You", "Untuk Anda"),
    ("common.all", "All", "Semua"),
    ("common.forYou", "For You", "Untuk Anda"),
    ("common.youMayAlsoLike", "You may also like", "Anda mungkin juga suka"),
    ("common.from", "From", "Dari"),
    ("common.duration", "Duration", "Tempoh"),
    ("common.hours", "hours", "jam"),
    ("common.rating", "Rating", "Penilaian"),
    ("category.all", "All", "Semua"),
    ("category.food", "Food", "Makanan"),
    ("category.activities", "Activities", "Aktiviti"),
    ("category.nightlife", "Nightlife", "Kehidupan Malam"),
    ("category.nature", "Nature", "Alam Semula Jadi"),
    ("category.shopping", "Shopping", "Membeli-belah"),
    ("content.title.1", "Petronas Twin Towers", "Menara Berkembar Petronas"),
    ("content.location.1", "Kuala Lumpur", "Kuala Lumpur"),
    ("content.title.2", "Penang Street Food Tour", "Lawatan Makanan Jalanan Penang"),
    ("content.location.2", "George Town, Penang", "George Town, Pulau Pinang"),
    ("content.title.3", "Langkawi Sky Bridge", "Jambatan Langit Langkawi"),
    ("content.location.3", "Langkawi", "Langkawi"),
    ("content.title.4", "Cameron Highlands Tea Plantation", "Ladang Teh Cameron Highlands"),
    ("content.location.4", "Cameron Highlands, Pahang", "Cameron Highlands, Pahang"),
    ("content.title.5", "Jonker Street Night Market", "Pasar Malam Jonker Street"),
    ("content.location.5", "Melaka", "Melaka"),
    ("content.title.6", "Batu Caves", "Gua Batu"),
    ("content.location.6", "Selangor", "Selangor"),
    ("profile.title", "Profile", "Profil"),
    ("profile.visited", "Visited", "Telah Dikunjungi"),
    ("profile.favorites", "Favorites", "Kegemaran"),
    ("profile.reviews", "Reviews", "Ulasan"),
    ("profile.preferences", "Your Preferences", "Keutamaan Anda"),
    ("profile.favoriteCategories", "Favorite Categories", "Kategori Kegemaran"),
    ("profile.preferredTime", "Preferred Time", "Masa Pilihan"),
    ("profile.budgetRange", "Budget Range", "Julat Bajet"),
    ("profile.recentActivity", "Recent Activity", "Aktiviti Terkini"),
    ("search.title", "Search", "Cari"),
    ("search.placeholder", "Search places, food, activities...", "Cari tempat, makanan, aktiviti..."),
    ("search.resultsFor", "results for", "hasil untuk"),
    ("search.noResults", "No results found", "Tiada hasil ditemui"),
    ("search.tryAdjust", "Try adjusting your search or filters", "Cuba ubah carian atau penapis anda"),
    ("bottomNav.home", "Home", "Utama"),
    ("bottomNav.search", "Search", "Cari"),
    ("bottomNav.profile", "Profile", "Profil"),
    ("tripPlanner.title", "Trip Planner", "Perancang Perjalanan"),
    ("tripPlanner.subtitle", "Plan your perfect day in Klang Valley", "Rancang hari sempurna anda di Lembah Klang"),
    ("tripPlanner.preferences", "Trip Preferences", "Keutamaan Perjalanan"),
    ("tripPlanner.preferencesDesc", "Tell us how you like to travel", "Beritahu kami cara anda suka melancong"),
    ("tripPlanner.startTime", "Start time", "Masa mula"),
    ("tripPlanner.dietary", "Dietary", "Pemakanan"),
    ("tripPlanner.transport", "Transport", "Pengangkutan"),
    ("tripPlanner.accessibility", "Accessibility", "Kebolehcapaian"),
    ("tripPlanner.noPreference", "No preference", "Tiada keutamaan"),
    ("tripPlanner.halal", "Halal", "Halal"),
    ("tripPlanner.vegetarian", "Vegetarian", "Vegetarian"),
    ("tripPlanner.vegan", "Vegan", "Vegan"),
    ("tripPlanner.publicTransport", "Public transport", "Pengangkutan awam"),
    ("tripPlanner.taxi", "Taxi/Grab", "Teksi/Grab"),
    ("tripPlanner.ownVehicle", "Own vehicle", "Kenderaan sendiri"),
    ("tripPlanner.wheelchairAccessible", "Wheelchair accessible", "Mesra kerusi roda"),
    ("tripPlanner.elevatorAccess", "Elevator access", "Akses lif"),
    ("tripPlanner.generating", "Generating...", "Sedang menjana..."),
    ("tripPlanner.generatePlan", "Generate Plan", "Jana Pelan"),
    ("tripPlanner.summary", "Summary", "Ringkasan"),
    ("tripPlanner.transportNotes", "Transport notes", "Nota pengangkutan"),
    ("tripPlanner.address", "Address", "Alamat"),
    ("tripPlanner.openingHours", "Opening hours", "Waktu operasi"),
    ("tripPlanner.priceRange", "Price range", "Julat harga"),
    ("tripPlanner.halalStatus", "Halal status", "Status halal"),
    ("tripPlanner.accessibilityInfo", "Accessibility", "Kebolehcapaian"),
    ("tripPlanner.howToGetThere", "How to get there", "Cara ke sana"),
    ("tripPlanner.why", "Why", "Mengapa"),
];

/// Look up `key` for `language`; unknown keys come back unchanged.
pub fn translate<'a>(key: &'a str, language: Language) -> &'a str {
    TRANSLATIONS
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|(_, en, my)| match language {
            Language::En => *en,
            Language::My => *my,
        })
        .unwrap_or(key)
}

pub fn translation_table(language: Language) -> BTreeMap<&'static str, &'static str> {
    TRANSLATIONS
        .iter()
        .map(|(key, en, my)| {
            let value = match language {
                Language::En => *en,
                Language::My => *my,
            };
            (*key, value)
        })
        .collect()
}

/// Current UI language plus the storage it is persisted to.
pub struct Localizer {
    language: Language,
    store: Arc<dyn KeyValueStore>,
}

impl Localizer {
    /// Persisted flag first, then the stored user type, then English.
    pub fn init(store: Arc<dyn KeyValueStore>) -> Self {
        let language = match Self::initial_language(store.as_ref()) {
            Ok(language) => language,
            Err(e) => {
                warn!("Could not read stored language, defaulting to en: {}", e);
                Language::En
            }
        };
        info!("Localizer initialized with language {}", language.code());
        Self { language, store }
    }

    fn initial_language(store: &dyn KeyValueStore) -> Result<Language, StoreError> {
        if let Some(flag) = store.get(LANGUAGE_KEY)? {
            if let Some(language) = Language::parse(&flag) {
                return Ok(language);
            }
            warn!("Ignoring unknown stored language {:?}", flag);
        }
        Ok(load_preferences(store)?
            .map(|prefs| Language::for_user_type(prefs.user_type))
            .unwrap_or_default())
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        translate(key, self.language)
    }

    pub fn set_language(&mut self, language: Language) -> Result<Language, StoreError> {
        self.store.set(LANGUAGE_KEY, language.code())?;
        self.language = language;
        Ok(language)
    }

    pub fn toggle(&mut self) -> Result<Language, StoreError> {
        self.set_language(self.language.toggled())
    }

    pub fn has_stored_flag(&self) -> Result<bool, StoreError> {
        Ok(self.store.get(LANGUAGE_KEY)?.is_some())
    }
}
