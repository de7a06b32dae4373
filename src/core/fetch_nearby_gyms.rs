use std::sync::Arc;

use crate::core::error::DomainError;
use crate::models::Gym;
use crate::repositories::GymRepository;

/// Radius of the "nearby" listing, in kilometers.
pub const NEARBY_RADIUS_KM: f64 = 10.0;

#[derive(Debug, Clone, Copy)]
pub struct FetchNearbyGymsInput {
    pub user_latitude: f64,
    pub user_longitude: f64,
}

/// Lists every gym within [`NEARBY_RADIUS_KM`] of the user. Unpaginated;
/// proximity semantics are the repository's haversine contract.
pub struct FetchNearbyGymsUseCase {
    gyms: Arc<dyn GymRepository>,
}

impl FetchNearbyGymsUseCase {
    pub fn new(gyms: Arc<dyn GymRepository>) -> Self {
        Self { gyms }
    }

    pub async fn execute(&self, input: FetchNearbyGymsInput) -> Result<Vec<Gym>, DomainError> {
        let gyms = self
            .gyms
            .find_many_nearby(input.user_latitude, input.user_longitude, NEARBY_RADIUS_KM)
            .await?;

        Ok(gyms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{degrees_to_decimal, NewGym};
    use crate::repositories::InMemoryGymRepository;

    fn new_gym(title: &str, lat: f64, lon: f64) -> NewGym {
        NewGym {
            title: title.to_string(),
            description: None,
            phone: None,
            latitude: degrees_to_decimal(lat),
            longitude: degrees_to_decimal(lon),
        }
    }

    #[tokio::test]
    async fn test_fetch_nearby_gyms() {
        let gyms = Arc::new(InMemoryGymRepository::new());
        gyms.create(new_gym("Near Gym", 23.5506254, -46.6330654))
            .await
            .unwrap();
        // Opposite hemisphere, thousands of kilometers away
        gyms.create(new_gym("Far Gym", -23.5632096, -46.7152497))
            .await
            .unwrap();

        let sut = FetchNearbyGymsUseCase::new(gyms);
        let found = sut
            .execute(FetchNearbyGymsInput {
                user_latitude: 23.5429495,
                user_longitude: -46.6331956,
            })
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Near Gym");
    }

    #[tokio::test]
    async fn test_gym_at_exact_user_position_is_nearby() {
        let gyms = Arc::new(InMemoryGymRepository::new());
        gyms.create(new_gym("Here Gym", 23.5429495, -46.6331956))
            .await
            .unwrap();

        let sut = FetchNearbyGymsUseCase::new(gyms);
        let found = sut
            .execute(FetchNearbyGymsInput {
                user_latitude: 23.5429495,
                user_longitude: -46.6331956,
            })
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
    }
}
