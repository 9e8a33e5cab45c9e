use actix_web::{web, HttpResponse, Responder};
use log::error;
use serde::Serialize;

use crate::db::store::load_preferences;
use crate::models::activity::Activity;
use crate::services::grouping_service::{home_rows, HomeRow};
use crate::state::AppState;

#[derive(Serialize)]
struct HomeResponse {
    title: String,
    subtitle: String,
    rows: Vec<HomeRow>,
}

/*
    /api/home
*/
pub async fn get_home(state: web::Data<AppState>) -> impl Responder {
    let localizer = state.localizer();
    HttpResponse::Ok().json(HomeResponse {
        title: localizer.t("header.title").to_string(),
        subtitle: localizer.t("header.subtitle").to_string(),
        rows: home_rows(state.catalog.all(), &localizer),
    })
}

#[derive(Serialize)]
struct ForYouResponse {
    title: String,
    activities: Vec<Activity>,
}

/*
    /api/home/for-you
*/
pub async fn get_for_you(state: web::Data<AppState>) -> impl Responder {
    let preferences = match load_preferences(state.store.as_ref()) {
        Ok(preferences) => preferences,
        Err(e) => {
            error!("Failed to read preferences: {}", e);
            None
        }
    };

    let activities = state.recommendations.for_you(preferences.as_ref()).await;
    let title = state.localizer().t("header.forYou").to_string();
    HttpResponse::Ok().json(ForYouResponse { title, activities })
}
