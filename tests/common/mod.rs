#![allow(dead_code)]

use actix_web::{middleware::Logger, web, App, HttpServer};
use actix_cors::Cors;
use std::sync::Arc;
use std::time::Duration;

use discover_kv::config::AppConfig;
use discover_kv::db::catalog::ActivityCatalog;
use discover_kv::db::store::{save_preferences, MemoryStore};
use discover_kv::models::preferences::{
    Accessibility, Dietary, Transport, UserPreferences, UserType,
};
use discover_kv::routes;
use discover_kv::state::AppState;

pub struct TestApp {
    pub state: web::Data<AppState>,
    pub store: Arc<MemoryStore>,
}

/// Nothing listens on port 1, so outbound calls fail fast.
pub fn test_config() -> AppConfig {
    AppConfig {
        backend_url: "http://127.0.0.1:1".to_string(),
        jamai_base_url: "http://127.0.0.1:1".to_string(),
        itinerary_delay: Duration::from_millis(10),
        http_timeout: Duration::from_secs(2),
        ..AppConfig::default()
    }
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self::with_store(config, Arc::new(MemoryStore::new()))
    }

    pub fn with_store(config: AppConfig, store: Arc<MemoryStore>) -> Self {
        let catalog = ActivityCatalog::seeded().expect("bundled catalog parses");
        let state = AppState::new(config, store.clone(), catalog).expect("state builds");
        Self {
            state: web::Data::new(state),
            store,
        }
    }

    pub fn create_app(&self) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(self.state.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .route("/health", web::get().to(|| async { "OK" }))
            .configure(routes::configure)
    }
}

pub fn test_preferences(user_type: UserType) -> UserPreferences {
    UserPreferences {
        name: "Test User".to_string(),
        user_type,
        dietary: Dietary::Halal,
        transport: Transport::PublicTransport,
        accessibility: Accessibility::WheelchairFriendly,
    }
}

pub fn store_with_preferences(user_type: UserType) -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    save_preferences(&*store, &test_preferences(user_type)).expect("save preferences");
    store
}

/// Serve `configure` on an ephemeral local port and return its base URL.
/// Must be called from inside an actix runtime.
pub fn spawn_upstream<F>(configure: F) -> String
where
    F: Fn(&mut web::ServiceConfig) + Send + Clone + 'static,
{
    let server = HttpServer::new(move || App::new().configure(configure.clone()))
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind upstream");
    let addr = server.addrs()[0];
    actix_rt::spawn(server.run());
    format!("http://{}", addr)
}
