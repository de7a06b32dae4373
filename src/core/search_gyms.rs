use std::sync::Arc;

use crate::core::error::DomainError;
use crate::models::Gym;
use crate::repositories::GymRepository;

/// Fixed page size of the gym title search.
pub const SEARCH_PAGE_SIZE: u32 = 20;

#[derive(Debug, Clone)]
pub struct SearchGymsInput {
    pub query: String,
    /// 1-based page number.
    pub page: u32,
}

/// Paginated case-insensitive search over gym titles, in creation order.
/// Out-of-range pages come back empty; page zero is a contract violation
/// and is rejected rather than clamped.
pub struct SearchGymsUseCase {
    gyms: Arc<dyn GymRepository>,
}

impl SearchGymsUseCase {
    pub fn new(gyms: Arc<dyn GymRepository>) -> Self {
        Self { gyms }
    }

    pub async fn execute(&self, input: SearchGymsInput) -> Result<Vec<Gym>, DomainError> {
        if input.page < 1 {
            return Err(DomainError::InvalidInput(
                "page numbers start at 1".to_string(),
            ));
        }

        let gyms = self
            .gyms
            .search_many(&input.query, input.page, SEARCH_PAGE_SIZE)
            .await?;

        Ok(gyms)
    }
}
