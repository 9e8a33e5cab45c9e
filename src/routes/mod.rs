use actix_web::web;

pub mod activity;
pub mod health;
pub mod home;
pub mod itinerary;
pub mod jamai;
pub mod language;
pub mod onboarding;

/// Every route under `/api`, shared by the server and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .route("/translations", web::get().to(language::get_translations))
            .service(
                web::scope("/language")
                    .route("", web::get().to(language::get_language))
                    .route("", web::put().to(language::set_language))
                    .route("/toggle", web::post().to(language::toggle_language)),
            )
            .route("/activities", web::get().to(activity::get_activities))
            .route("/activities/{id}", web::get().to(activity::get_by_id))
            .route("/home", web::get().to(home::get_home))
            .route("/home/for-you", web::get().to(home::get_for_you))
            .route("/onboarding", web::get().to(onboarding::get_status))
            .route("/onboarding", web::post().to(onboarding::submit))
            .route("/preferences", web::get().to(onboarding::get_preferences))
            .service(
                web::scope("/itinerary")
                    .route("", web::get().to(itinerary::get_current))
                    .route("", web::delete().to(itinerary::clear))
                    .route("/generate", web::post().to(itinerary::generate))
                    .route("/params/default", web::get().to(itinerary::default_params)),
            )
            .route("/jamai", web::get().to(jamai::get_project)),
    );
}
