use std::sync::Arc;

use rust_decimal::Decimal;

use crate::core::error::DomainError;
use crate::models::{Gym, NewGym};
use crate::repositories::GymRepository;

#[derive(Debug, Clone)]
pub struct CreateGymInput {
    pub title: String,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub latitude: Decimal,
    pub longitude: Decimal,
}

/// Registers a gym. Coordinate range validation happens at the transport
/// layer; the title must be non-empty here because it is a data-model
/// invariant, not a transport concern.
pub struct CreateGymUseCase {
    gyms: Arc<dyn GymRepository>,
}

impl CreateGymUseCase {
    pub fn new(gyms: Arc<dyn GymRepository>) -> Self {
        Self { gyms }
    }

    pub async fn execute(&self, input: CreateGymInput) -> Result<Gym, DomainError> {
        if input.title.trim().is_empty() {
            return Err(DomainError::InvalidInput(
                "gym title must not be empty".to_string(),
            ));
        }

        let gym = self
            .gyms
            .create(NewGym {
                title: input.title,
                description: input.description,
                phone: input.phone,
                latitude: input.latitude,
                longitude: input.longitude,
            })
            .await?;

        tracing::debug!("gym {} registered as {}", gym.title, gym.id);

        Ok(gym)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::degrees_to_decimal;
    use crate::repositories::InMemoryGymRepository;

    #[tokio::test]
    async fn test_create_gym() {
        let gyms = Arc::new(InMemoryGymRepository::new());
        let sut = CreateGymUseCase::new(gyms.clone());

        let gym = sut
            .execute(CreateGymInput {
                title: "Javascript Gym".to_string(),
                description: Some("Leg day every day".to_string()),
                phone: Some("11 99999-9999".to_string()),
                latitude: degrees_to_decimal(23.5429495),
                longitude: degrees_to_decimal(-46.6331956),
            })
            .await
            .unwrap();

        assert!(!gym.id.is_empty());
        let stored = gyms.find_by_id(&gym.id).await.unwrap();
        assert_eq!(stored.unwrap().title, "Javascript Gym");
    }

    #[tokio::test]
    async fn test_blank_title_is_rejected() {
        let gyms = Arc::new(InMemoryGymRepository::new());
        let sut = CreateGymUseCase::new(gyms);

        let result = sut
            .execute(CreateGymInput {
                title: "   ".to_string(),
                description: None,
                phone: None,
                latitude: degrees_to_decimal(0.0),
                longitude: degrees_to_decimal(0.0),
            })
            .await;

        assert!(matches!(result, Err(DomainError::InvalidInput(_))));
    }
}
