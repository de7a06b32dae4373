use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to record a check-in at a gym
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CheckInRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

/// Request to register a gym
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateGymRequest {
    #[validate(length(min = 1))]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

/// Query parameters for the gym title search
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchGymsQuery {
    #[validate(length(min = 1))]
    #[serde(alias = "query", rename = "q")]
    pub q: String,
    #[validate(range(min = 1))]
    #[serde(default = "default_page")]
    pub page: u32,
}

/// Query parameters for the nearby gyms listing
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NearbyGymsQuery {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

/// Query parameters for the check-in history listing
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct HistoryQuery {
    #[validate(range(min = 1))]
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_page() -> u32 {
    1
}
