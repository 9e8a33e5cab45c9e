use log::info;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::config::AppConfig;
use crate::db::catalog::{ActivityCatalog, CatalogError};
use crate::db::store::{FileStore, KeyValueStore, StoreError};
use crate::services::itinerary_generation_service::{
    backend_from_config, ItineraryBackend, ItineraryError,
};
use crate::services::itinerary_service::ItinerarySession;
use crate::services::jamai_service::{JamaiProxy, ProxyError};
use crate::services::localization::Localizer;
use crate::services::recommendation_service::{RecommendationError, RecommendationService};

#[derive(Debug)]
pub enum StartupError {
    Store(StoreError),
    Catalog(CatalogError),
    Itinerary(ItineraryError),
    Recommendations(RecommendationError),
    Proxy(ProxyError),
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupError::Store(err) => write!(f, "Storage: {}", err),
            StartupError::Catalog(err) => write!(f, "Catalog: {}", err),
            StartupError::Itinerary(err) => write!(f, "Itinerary backend: {}", err),
            StartupError::Recommendations(err) => write!(f, "Recommendations: {}", err),
            StartupError::Proxy(err) => write!(f, "JamAI proxy: {}", err),
        }
    }
}

impl std::error::Error for StartupError {}

impl From<StoreError> for StartupError {
    fn from(err: StoreError) -> Self {
        StartupError::Store(err)
    }
}

impl From<CatalogError> for StartupError {
    fn from(err: CatalogError) -> Self {
        StartupError::Catalog(err)
    }
}

impl From<ItineraryError> for StartupError {
    fn from(err: ItineraryError) -> Self {
        StartupError::Itinerary(err)
    }
}

impl From<RecommendationError> for StartupError {
    fn from(err: RecommendationError) -> Self {
        StartupError::Recommendations(err)
    }
}

impl From<ProxyError> for StartupError {
    fn from(err: ProxyError) -> Self {
        StartupError::Proxy(err)
    }
}

/// Everything the handlers share. Held once in `web::Data`.
pub struct AppState {
    pub config: AppConfig,
    pub store: Arc<dyn KeyValueStore>,
    pub catalog: ActivityCatalog,
    pub localizer: Mutex<Localizer>,
    pub itinerary: ItinerarySession,
    pub generator: Box<dyn ItineraryBackend>,
    pub recommendations: RecommendationService,
    pub jamai: JamaiProxy,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        store: Arc<dyn KeyValueStore>,
        catalog: ActivityCatalog,
    ) -> Result<Self, StartupError> {
        let generator = backend_from_config(&config)?;
        let recommendations = RecommendationService::new(&config)?;
        let jamai = JamaiProxy::new(&config)?;
        let localizer = Localizer::init(store.clone());

        Ok(Self {
            config,
            store,
            catalog,
            localizer: Mutex::new(localizer),
            itinerary: ItinerarySession::new(),
            generator,
            recommendations,
            jamai,
        })
    }

    /// File-backed store and catalog at the configured paths.
    pub fn from_config(config: AppConfig) -> Result<Self, StartupError> {
        let store = FileStore::open(&config.storage_path)?;
        let catalog = ActivityCatalog::load_or_seed(&config.activities_path)?;
        info!(
            "Loaded {} activities, storage at {}",
            catalog.len(),
            config.storage_path
        );
        Self::new(config, Arc::new(store), catalog)
    }

    pub fn localizer(&self) -> MutexGuard<'_, Localizer> {
        self.localizer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
