mod common;

use actix_web::{http::StatusCode, test};
use serde_json::json;
use serial_test::serial;

use discover_kv::db::store::{KeyValueStore, LANGUAGE_KEY};
use discover_kv::models::preferences::UserType;

use common::{store_with_preferences, test_config, TestApp};

fn ids(body: &serde_json::Value) -> Vec<String> {
    body["activities"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_str().unwrap().to_string())
        .collect()
}

#[actix_rt::test]
async fn test_health_check() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body = test::read_body(resp).await;
    assert_eq!(body, "OK");
}

#[actix_rt::test]
async fn test_detailed_health_reports_degraded_without_jamai() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "degraded");
    assert_eq!(body["services"]["catalog"]["status"], "ok");
    assert_eq!(body["services"]["storage"]["status"], "ok");
    assert_eq!(body["services"]["jamai"]["status"], "error");
}

#[actix_rt::test]
async fn test_translations_follow_toggle() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/translations").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["language"], "en");
    assert_eq!(body["translations"]["nav.home"], "Home");

    let req = test::TestRequest::post()
        .uri("/api/language/toggle")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["language"], "my");
    assert_eq!(
        test_app.store.get(LANGUAGE_KEY).unwrap().as_deref(),
        Some("my")
    );

    let req = test::TestRequest::get().uri("/api/translations").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["translations"]["nav.home"], "Utama");
}

#[actix_rt::test]
async fn test_set_language() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::put()
        .uri("/api/language")
        .set_json(&json!({"language": "my"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::put()
        .uri("/api/language")
        .set_json(&json!({"language": "fr"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get().uri("/api/language").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["language"], "my");
}

#[actix_rt::test]
async fn test_language_inferred_from_stored_user_type() {
    let test_app = TestApp::with_store(test_config(), store_with_preferences(UserType::Local));
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/language").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["language"], "my");
}

#[actix_rt::test]
async fn test_activities_unfiltered() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/activities").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["total_count"], 12);
    assert!(body.get("no_results").is_none());
    assert_eq!(ids(&body)[0], "1");
}

#[actix_rt::test]
async fn test_activities_query_matches_location() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/activities?q=BUKIT")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(ids(&body), vec!["4", "7", "10"]);
}

#[actix_rt::test]
async fn test_activities_category_and_halal() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/activities?category=food&category=all&halal=true")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(ids(&body), vec!["1", "11"]);

    let req = test::TestRequest::get()
        .uri("/api/activities?category=nightlife,shopping")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(ids(&body), vec!["5", "7", "8", "10"]);
}

#[actix_rt::test]
async fn test_activities_price_range() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/activities?price_min=50&price_max=100")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(ids(&body), vec!["2", "9"]);
}

#[actix_rt::test]
async fn test_activities_no_results_are_translated() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/activities?q=zzz")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["total_count"], 0);
    assert_eq!(body["no_results"]["title"], "No results found");
    assert_eq!(
        body["no_results"]["hint"],
        "Try adjusting your search or filters"
    );
}

#[actix_rt::test]
async fn test_activity_detail() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/activities/2").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["title"], "KL Tower Observation Deck");
    let related: Vec<&str> = body["you_may_also_like"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_str().unwrap())
        .collect();
    assert_eq!(related, vec!["1", "3", "4"]);
}

#[actix_rt::test]
async fn test_unknown_activity_is_empty_detail() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/activities/does-not-exist")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], "");
    assert_eq!(body["title"], "");
    assert_eq!(body["you_may_also_like"].as_array().unwrap().len(), 3);
}

#[actix_rt::test]
async fn test_home_rows() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/home").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    let rows = body["rows"].as_array().unwrap();
    let keys: Vec<&str> = rows.iter().map(|r| r["key"].as_str().unwrap()).collect();
    assert_eq!(
        keys,
        vec!["forYou", "food", "activities", "nightlife", "nature", "shopping"]
    );
    assert_eq!(rows[0]["activities"].as_array().unwrap().len(), 3);
    assert_eq!(rows[1]["title"], "Food");
    assert_eq!(body["title"], "Discover KV");
}

#[actix_rt::test]
async fn test_onboarding_flow() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/onboarding").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["required"], true);

    let req = test::TestRequest::get().uri("/api/preferences").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/api/onboarding")
        .set_json(&json!({"name": "   "}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/onboarding")
        .set_json(&json!({"name": " Ann ", "userType": "tourist", "dietary": "halal"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], "Ann");
    assert_eq!(body["userType"], "tourist");
    assert_eq!(body["transport"], "own-vehicle");

    let req = test::TestRequest::post()
        .uri("/api/onboarding")
        .set_json(&json!({"name": "Ann"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let req = test::TestRequest::get().uri("/api/onboarding").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["required"], false);
    assert_eq!(body["preferences"]["name"], "Ann");

    let req = test::TestRequest::get().uri("/api/language").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["language"], "en");
}

#[actix_rt::test]
#[serial]
async fn test_app_builds_from_env_config() {
    std::env::set_var("ITINERARY_MODE", "remote");
    std::env::set_var("BACKEND_URL", "http://127.0.0.1:1");

    let config = discover_kv::config::AppConfig::from_env();
    let test_app = TestApp::with_config(config);
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert!(body["services"]["backend"]["details"]
        .as_str()
        .unwrap()
        .contains("remote"));

    std::env::remove_var("ITINERARY_MODE");
    std::env::remove_var("BACKEND_URL");
}
