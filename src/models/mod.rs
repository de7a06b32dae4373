// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{degrees_to_decimal, BoundingBox, CheckIn, Gym, NewCheckIn, NewGym};
pub use requests::{
    CheckInRequest, CreateGymRequest, HistoryQuery, NearbyGymsQuery, SearchGymsQuery,
};
pub use responses::{
    CheckInResponse, CheckInsHistoryResponse, ErrorResponse, GymResponse, GymsResponse,
    HealthResponse, UserMetricsResponse,
};
