use std::sync::Arc;

use crate::core::error::DomainError;
use crate::models::CheckIn;
use crate::repositories::CheckInRepository;

/// Fixed page size of the check-in history listing.
pub const HISTORY_PAGE_SIZE: u32 = 20;

#[derive(Debug, Clone)]
pub struct FetchUserCheckInsHistoryInput {
    pub user_id: String,
    /// 1-based page number.
    pub page: u32,
}

/// Lists a user's check-ins in creation order, paginated like the gym
/// search: empty past the end, rejected at page zero.
pub struct FetchUserCheckInsHistoryUseCase {
    check_ins: Arc<dyn CheckInRepository>,
}

impl FetchUserCheckInsHistoryUseCase {
    pub fn new(check_ins: Arc<dyn CheckInRepository>) -> Self {
        Self { check_ins }
    }

    pub async fn execute(
        &self,
        input: FetchUserCheckInsHistoryInput,
    ) -> Result<Vec<CheckIn>, DomainError> {
        if input.page < 1 {
            return Err(DomainError::InvalidInput(
                "page numbers start at 1".to_string(),
            ));
        }

        let check_ins = self
            .check_ins
            .find_many_by_user_id(&input.user_id, input.page, HISTORY_PAGE_SIZE)
            .await?;

        Ok(check_ins)
    }
}
