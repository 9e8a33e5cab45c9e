use actix_web::{web, HttpResponse, Responder};
use log::warn;
use serde::Serialize;
use std::collections::HashMap;
use std::env;

use crate::config::ItineraryMode;
use crate::db::store::LANGUAGE_KEY;
use crate::state::AppState;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

impl ServiceStatus {
    fn ok(details: String) -> Self {
        Self {
            status: "ok".to_string(),
            details: Some(details),
        }
    }

    fn error(details: String) -> Self {
        Self {
            status: "error".to_string(),
            details: Some(details),
        }
    }
}

pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    health
        .services
        .insert("backend".to_string(), check_backend(&state));
    health
        .services
        .insert("jamai".to_string(), check_jamai(&state));
    health
        .services
        .insert("storage".to_string(), check_storage(&state));
    health
        .services
        .insert("catalog".to_string(), check_catalog(&state));

    // any failing service degrades the whole report
    if health.services.values().any(|s| s.status != "ok") {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

fn check_backend(state: &AppState) -> ServiceStatus {
    let mode = match state.config.itinerary_mode {
        ItineraryMode::Simulated => "simulated",
        ItineraryMode::Remote => "remote",
    };
    match state.config.backend_endpoint("/") {
        Ok(url) => ServiceStatus::ok(format!("Backend {} (itinerary: {})", url, mode)),
        Err(e) => ServiceStatus::error(e.to_string()),
    }
}

fn check_jamai(state: &AppState) -> ServiceStatus {
    if state.jamai.is_configured() {
        return ServiceStatus::ok("JamAI credentials configured".to_string());
    }

    let mut missing = Vec::new();
    if state.config.jamai_project_id.is_none() {
        missing.push("JAMAI_PROJECT_ID");
    }
    if state.config.jamai_api_pat.is_none() {
        missing.push("JAMAI_API_PAT");
    }
    ServiceStatus::error(format!("Missing configuration: {}", missing.join(", ")))
}

fn check_storage(state: &AppState) -> ServiceStatus {
    match state.store.get(LANGUAGE_KEY) {
        Ok(_) => ServiceStatus::ok(format!("Storage readable at {}", state.config.storage_path)),
        Err(e) => {
            warn!("Storage health check failed: {}", e);
            ServiceStatus::error(format!("Failed to read storage: {}", e))
        }
    }
}

fn check_catalog(state: &AppState) -> ServiceStatus {
    if state.catalog.is_empty() {
        ServiceStatus::error("Activity catalog is empty".to_string())
    } else {
        ServiceStatus::ok(format!("{} activities loaded", state.catalog.len()))
    }
}
