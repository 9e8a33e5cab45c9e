use actix_web::{web, HttpResponse, Responder};
use log::debug;
use serde::Serialize;

use crate::models::activity::{Activity, ActivityDetail};
use crate::services::filter_service::{filter_activities, ActivityFilter, HalalFilter};
use crate::state::AppState;

const RELATED_LIMIT: usize = 3;

#[derive(Serialize)]
struct NoResults {
    title: String,
    hint: String,
}

#[derive(Serialize)]
struct ActivitiesResponse {
    activities: Vec<Activity>,
    total_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    no_results: Option<NoResults>,
}

/// Build a filter from raw query pairs. `category` may repeat or hold a comma
/// separated list; unparseable numbers and flags are ignored.
fn filter_from_query(pairs: &[(String, String)]) -> ActivityFilter {
    let mut filter = ActivityFilter::default();
    let mut categories = Vec::new();
    let (mut price_min, mut price_max) = (filter.price_min, filter.price_max);

    for (key, value) in pairs {
        match key.as_str() {
            "q" => filter = filter.with_query(value.as_str()),
            "category" => categories.extend(value.split(',').map(|c| c.trim().to_string())),
            "halal" => {
                let flag = match value.as_str() {
                    "true" => Some(true),
                    "false" => Some(false),
                    _ => None,
                };
                filter = filter.with_halal(HalalFilter::from_flag(flag));
            }
            "price_min" => price_min = value.parse().unwrap_or(price_min),
            "price_max" => price_max = value.parse().unwrap_or(price_max),
            _ => {}
        }
    }

    filter
        .with_categories(categories)
        .with_price_range(price_min, price_max)
}

/*
    /api/activities?q=&category=&halal=&price_min=&price_max=
*/
pub async fn get_activities(
    state: web::Data<AppState>,
    query: web::Query<Vec<(String, String)>>,
) -> impl Responder {
    let filter = filter_from_query(&query);
    debug!("Activity filter: {:?}", filter);

    let activities = filter_activities(state.catalog.all(), &filter);
    let no_results = if activities.is_empty() {
        let localizer = state.localizer();
        Some(NoResults {
            title: localizer.t("search.noResults").to_string(),
            hint: localizer.t("search.tryAdjust").to_string(),
        })
    } else {
        None
    };

    HttpResponse::Ok().json(ActivitiesResponse {
        total_count: activities.len(),
        activities,
        no_results,
    })
}

/*
    /api/activities/{id}
*/
pub async fn get_by_id(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    let related = state.catalog.related(&id, RELATED_LIMIT);
    let detail = ActivityDetail::from_lookup(state.catalog.get(&id), related);
    if detail.id.is_empty() {
        debug!("No activity with id {:?}, returning empty detail", id);
    }
    HttpResponse::Ok().json(detail)
}
