use actix_web::{web, HttpResponse, Responder};
use log::{error, info};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;

use crate::services::localization::{translation_table, Language};
use crate::state::AppState;

#[derive(Serialize)]
struct LanguageResponse {
    language: Language,
}

#[derive(Serialize)]
struct TranslationsResponse {
    language: Language,
    translations: BTreeMap<&'static str, &'static str>,
}

#[derive(Deserialize)]
pub struct SetLanguageRequest {
    pub language: String,
}

pub async fn get_translations(state: web::Data<AppState>) -> impl Responder {
    let language = state.localizer().language();
    HttpResponse::Ok().json(TranslationsResponse {
        language,
        translations: translation_table(language),
    })
}

pub async fn get_language(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(LanguageResponse {
        language: state.localizer().language(),
    })
}

pub async fn toggle_language(state: web::Data<AppState>) -> impl Responder {
    let result = state.localizer().toggle();
    match result {
        Ok(language) => {
            info!("Language toggled to {}", language.code());
            HttpResponse::Ok().json(LanguageResponse { language })
        }
        Err(e) => {
            error!("Failed to persist language: {}", e);
            HttpResponse::InternalServerError().json(json!({"error": "Failed to save language"}))
        }
    }
}

pub async fn set_language(
    state: web::Data<AppState>,
    body: web::Json<SetLanguageRequest>,
) -> impl Responder {
    let Some(language) = Language::parse(&body.language) else {
        return HttpResponse::BadRequest()
            .json(json!({"error": "Language must be \"en\" or \"my\""}));
    };

    let result = state.localizer().set_language(language);
    match result {
        Ok(language) => HttpResponse::Ok().json(LanguageResponse { language }),
        Err(e) => {
            error!("Failed to persist language: {}", e);
            HttpResponse::InternalServerError().json(json!({"error": "Failed to save language"}))
        }
    }
}
