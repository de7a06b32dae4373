use serde::{Deserialize, Serialize};

use crate::models::domain::{CheckIn, Gym};

/// Response for a created check-in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInResponse {
    #[serde(rename = "checkIn")]
    pub check_in: CheckIn,
}

/// Response for a created gym
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GymResponse {
    pub gym: Gym,
}

/// Response for gym listings (search, nearby)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GymsResponse {
    pub gyms: Vec<Gym>,
}

/// Response for the paginated check-in history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInsHistoryResponse {
    #[serde(rename = "checkIns")]
    pub check_ins: Vec<CheckIn>,
}

/// Response for the user metrics endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserMetricsResponse {
    #[serde(rename = "checkInsCount")]
    pub check_ins_count: u64,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
