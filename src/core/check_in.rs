use std::sync::Arc;

use crate::core::clock::Clock;
use crate::core::distance::haversine_distance;
use crate::core::error::DomainError;
use crate::models::{CheckIn, NewCheckIn};
use crate::repositories::{CheckInRepository, GymRepository, RepositoryError};

/// Maximum distance between the user and the gym for a check-in to be
/// accepted, in kilometers (100 m geofence).
pub const MAX_CHECK_IN_DISTANCE_KM: f64 = 0.1;

/// Plain-data input supplied by the transport layer.
#[derive(Debug, Clone)]
pub struct CheckInInput {
    pub user_id: String,
    pub gym_id: String,
    pub user_latitude: f64,
    pub user_longitude: f64,
}

/// Validates and records a gym visit.
///
/// Gate order matters: the distance check runs before the daily-uniqueness
/// check, so a user outside the geofence is never told they already checked
/// in today.
pub struct CheckInUseCase {
    check_ins: Arc<dyn CheckInRepository>,
    gyms: Arc<dyn GymRepository>,
    clock: Arc<dyn Clock>,
}

impl CheckInUseCase {
    pub fn new(
        check_ins: Arc<dyn CheckInRepository>,
        gyms: Arc<dyn GymRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            check_ins,
            gyms,
            clock,
        }
    }

    pub async fn execute(&self, input: CheckInInput) -> Result<CheckIn, DomainError> {
        let gym = self
            .gyms
            .find_by_id(&input.gym_id)
            .await?
            .ok_or_else(|| DomainError::ResourceNotFound(format!("gym {}", input.gym_id)))?;

        let distance_km = haversine_distance(
            input.user_latitude,
            input.user_longitude,
            gym.latitude_f64(),
            gym.longitude_f64(),
        );
        if distance_km > MAX_CHECK_IN_DISTANCE_KM {
            return Err(DomainError::MaxDistance {
                distance_km,
                max_km: MAX_CHECK_IN_DISTANCE_KM,
            });
        }

        let now = self.clock.now();
        let existing = self
            .check_ins
            .find_by_user_id_on_date(&input.user_id, now.date_naive())
            .await?;
        if existing.is_some() {
            return Err(DomainError::MaxNumberOfCheckIns);
        }

        let check_in = self
            .check_ins
            .create(NewCheckIn {
                user_id: input.user_id,
                gym_id: input.gym_id,
                created_at: now,
            })
            .await
            .map_err(|err| match err {
                // A concurrent check-in won the race between the existence
                // check and the insert; the storage unique index decides.
                RepositoryError::UniqueViolation(_) => DomainError::MaxNumberOfCheckIns,
                other => DomainError::Repository(other),
            })?;

        tracing::debug!(
            "user {} checked in at gym {} ({:.3} km away)",
            check_in.user_id,
            check_in.gym_id,
            distance_km
        );

        Ok(check_in)
    }
}
