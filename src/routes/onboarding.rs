use actix_web::{web, HttpResponse, Responder};
use log::error;
use serde::Serialize;
use serde_json::json;

use crate::db::store::load_preferences;
use crate::models::preferences::UserPreferences;
use crate::services::onboarding_service::{
    complete_onboarding, OnboardingError, OnboardingForm, OnboardingInput,
};
use crate::state::AppState;

#[derive(Serialize)]
struct OnboardingStatus {
    required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    preferences: Option<UserPreferences>,
}

/*
    /api/onboarding (GET)
*/
pub async fn get_status(state: web::Data<AppState>) -> impl Responder {
    match load_preferences(state.store.as_ref()) {
        Ok(preferences) => HttpResponse::Ok().json(OnboardingStatus {
            required: preferences.is_none(),
            preferences,
        }),
        Err(e) => {
            error!("Failed to read preferences: {}", e);
            HttpResponse::InternalServerError()
                .json(json!({"error": "Failed to read preferences"}))
        }
    }
}

/*
    /api/onboarding (POST)
*/
pub async fn submit(
    state: web::Data<AppState>,
    input: web::Json<OnboardingInput>,
) -> impl Responder {
    let form = OnboardingForm::from_input(input.into_inner());
    let result = {
        let mut localizer = state.localizer();
        complete_onboarding(state.store.as_ref(), &mut localizer, form)
    };

    match result {
        Ok(preferences) => HttpResponse::Created().json(preferences),
        Err(OnboardingError::NameRequired) => {
            HttpResponse::BadRequest().json(json!({"error": "Name is required"}))
        }
        Err(OnboardingError::AlreadyOnboarded) | Err(OnboardingError::AlreadySubmitted) => {
            HttpResponse::Conflict().json(json!({"error": "Preferences already exist"}))
        }
        Err(OnboardingError::Storage(e)) => {
            error!("Failed to save preferences: {}", e);
            HttpResponse::InternalServerError()
                .json(json!({"error": "Failed to save preferences"}))
        }
    }
}

/*
    /api/preferences
*/
pub async fn get_preferences(state: web::Data<AppState>) -> impl Responder {
    match load_preferences(state.store.as_ref()) {
        Ok(Some(preferences)) => HttpResponse::Ok().json(preferences),
        Ok(None) => HttpResponse::NotFound().json(json!({"error": "No preferences stored"})),
        Err(e) => {
            error!("Failed to read preferences: {}", e);
            HttpResponse::InternalServerError()
                .json(json!({"error": "Failed to read preferences"}))
        }
    }
}
