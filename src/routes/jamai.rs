use actix_web::{web, HttpResponse, Responder};
use log::error;
use serde_json::json;

use crate::state::AppState;

/*
    /api/jamai
*/
pub async fn get_project(state: web::Data<AppState>) -> impl Responder {
    match state.jamai.fetch_project().await {
        Ok(body) => HttpResponse::Ok().json(body),
        Err(e) => {
            error!("JamAI proxy failed: {}", e);
            HttpResponse::InternalServerError().json(json!({"error": "Failed to fetch JamAI data"}))
        }
    }
}
