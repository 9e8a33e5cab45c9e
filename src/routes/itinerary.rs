use actix_web::{web, HttpResponse, Responder};
use log::error;
use serde::Serialize;
use serde_json::json;

use crate::models::itinerary::TripParams;
use crate::services::itinerary_generation_service::ItineraryError;
use crate::services::itinerary_presenter::{render_itinerary, ItineraryView};
use crate::services::itinerary_service::{generate as run_generation, GenerationStatus};
use crate::state::AppState;

#[derive(Serialize)]
struct GenerateResponse {
    sequence: u64,
    applied: bool,
    status: GenerationStatus,
    itinerary: Option<ItineraryView>,
}

#[derive(Serialize)]
struct ItineraryStateResponse {
    status: GenerationStatus,
    sequence: u64,
    itinerary: Option<ItineraryView>,
}

/*
    /api/itinerary/params/default
*/
pub async fn default_params() -> impl Responder {
    HttpResponse::Ok().json(TripParams::default())
}

/*
    /api/itinerary/generate
*/
pub async fn generate(
    state: web::Data<AppState>,
    params: web::Json<TripParams>,
) -> impl Responder {
    let params = params.into_inner();
    let result = run_generation(&state.itinerary, state.generator.as_ref(), &params).await;

    match result {
        Ok(outcome) => {
            let localizer = state.localizer();
            let itinerary = outcome
                .snapshot
                .itinerary
                .as_ref()
                .map(|response| render_itinerary(response, &localizer));
            HttpResponse::Ok().json(GenerateResponse {
                sequence: outcome.sequence,
                applied: outcome.completion.is_applied(),
                status: outcome.snapshot.status,
                itinerary,
            })
        }
        Err(ItineraryError::InvalidParams(msg)) => {
            HttpResponse::BadRequest().json(json!({"error": msg}))
        }
        Err(e) => {
            error!("Itinerary generation failed: {}", e);
            HttpResponse::BadGateway().json(json!({"error": "Failed to generate itinerary"}))
        }
    }
}

/*
    /api/itinerary (GET)
*/
pub async fn get_current(state: web::Data<AppState>) -> impl Responder {
    let snapshot = state.itinerary.snapshot();
    let localizer = state.localizer();
    HttpResponse::Ok().json(ItineraryStateResponse {
        status: snapshot.status,
        sequence: snapshot.sequence,
        itinerary: snapshot
            .itinerary
            .as_ref()
            .map(|response| render_itinerary(response, &localizer)),
    })
}

/*
    /api/itinerary (DELETE)
*/
pub async fn clear(state: web::Data<AppState>) -> impl Responder {
    state.itinerary.clear();
    HttpResponse::NoContent().finish()
}
