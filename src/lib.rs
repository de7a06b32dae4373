//! FitCheck - gym check-in and discovery service
//!
//! The use-case layer in [`core`] holds every business rule: the 100 m
//! check-in geofence, the one-check-in-per-calendar-day limit, nearby-gym
//! ranking, and paginated search. It talks only to the repository ports in
//! [`repositories`] and an injectable clock, so the same rules run against
//! Postgres in production and the in-memory doubles in tests.

pub mod config;
pub mod core;
pub mod models;
pub mod repositories;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{
    haversine_distance, CheckInUseCase, DomainError, FetchNearbyGymsUseCase, SearchGymsUseCase,
};
pub use crate::models::{CheckIn, Gym};
pub use crate::repositories::{CheckInRepository, GymRepository, RepositoryError};
