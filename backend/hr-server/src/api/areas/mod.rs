pub mod area_response;
pub mod areas;
