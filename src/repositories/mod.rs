// Storage ports and adapters
pub mod memory;
pub mod postgres;

pub use memory::{InMemoryCheckInRepository, InMemoryGymRepository};
pub use postgres::{PostgresCheckInRepository, PostgresGymRepository};

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{CheckIn, Gym, NewCheckIn, NewGym};

/// Errors raised by storage adapters.
///
/// `UniqueViolation` is the one variant use-cases inspect: a concurrent
/// check-in racing past the existence check surfaces here and is translated
/// into a domain error. Everything else propagates untouched.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A storage-level uniqueness constraint rejected the write.
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    /// Query or mutation failed during execution.
    #[error("storage query failed: {0}")]
    Query(String),
}

/// Storage contract for gyms.
///
/// Implementations must keep proximity semantics identical to
/// `core::distance::haversine_distance`: any gym within the radius by
/// haversine distance is returned, any gym strictly outside is not,
/// regardless of what index or approximation runs underneath.
#[async_trait]
pub trait GymRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<Gym>, RepositoryError>;

    /// All gyms within `radius_km` of the point, unpaginated.
    async fn find_many_nearby(
        &self,
        latitude: f64,
        longitude: f64,
        radius_km: f64,
    ) -> Result<Vec<Gym>, RepositoryError>;

    /// Case-insensitive title substring search in creation order.
    /// `page` is 1-based; pages past the end yield an empty list.
    async fn search_many(
        &self,
        query: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<Gym>, RepositoryError>;

    async fn create(&self, data: NewGym) -> Result<Gym, RepositoryError>;
}

/// Storage contract for check-ins.
#[async_trait]
pub trait CheckInRepository: Send + Sync {
    /// The user's check-in on the given UTC calendar day, if any. The day is
    /// the inclusive start-of-day..end-of-day range, not a rolling window.
    async fn find_by_user_id_on_date(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Option<CheckIn>, RepositoryError>;

    /// The user's check-ins in creation order; `page` is 1-based.
    async fn find_many_by_user_id(
        &self,
        user_id: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<CheckIn>, RepositoryError>;

    async fn count_by_user_id(&self, user_id: &str) -> Result<u64, RepositoryError>;

    /// Persists the check-in. The storage layer is the authoritative guard
    /// for the one-per-day rule: a duplicate (user, day) write fails with
    /// `UniqueViolation`.
    async fn create(&self, data: NewCheckIn) -> Result<CheckIn, RepositoryError>;
}
