pub mod activity;
pub mod itinerary;
pub mod preferences;
pub mod recommendation;
