pub mod filter_service;
pub mod grouping_service;
pub mod itinerary_generation_service;
pub mod itinerary_presenter;
pub mod itinerary_service;
pub mod jamai_service;
pub mod localization;
pub mod onboarding_service;
pub mod recommendation_service;
pub mod scroll_affordance;
