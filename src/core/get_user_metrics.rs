use std::sync::Arc;

use crate::core::error::DomainError;
use crate::repositories::CheckInRepository;

#[derive(Debug, Clone)]
pub struct GetUserMetricsInput {
    pub user_id: String,
}

/// Total number of check-ins the user has ever recorded.
pub struct GetUserMetricsUseCase {
    check_ins: Arc<dyn CheckInRepository>,
}

impl GetUserMetricsUseCase {
    pub fn new(check_ins: Arc<dyn CheckInRepository>) -> Self {
        Self { check_ins }
    }

    pub async fn execute(&self, input: GetUserMetricsInput) -> Result<u64, DomainError> {
        let count = self.check_ins.count_by_user_id(&input.user_id).await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;
    use crate::models::NewCheckIn;
    use crate::repositories::InMemoryCheckInRepository;

    #[tokio::test]
    async fn test_check_ins_count_from_metrics() {
        let check_ins = Arc::new(InMemoryCheckInRepository::new());
        let base = Utc.with_ymd_and_hms(2022, 1, 1, 8, 0, 0).unwrap();
        for i in 0..2 {
            check_ins
                .create(NewCheckIn {
                    user_id: "user-01".to_string(),
                    gym_id: format!("gym-{:02}", i + 1),
                    created_at: base + Duration::days(i),
                })
                .await
                .unwrap();
        }
        check_ins
            .create(NewCheckIn {
                user_id: "user-02".to_string(),
                gym_id: "gym-01".to_string(),
                created_at: base,
            })
            .await
            .unwrap();

        let sut = GetUserMetricsUseCase::new(check_ins);
        let count = sut
            .execute(GetUserMetricsInput {
                user_id: "user-01".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn test_metrics_for_unknown_user_is_zero() {
        let check_ins = Arc::new(InMemoryCheckInRepository::new());
        let sut = GetUserMetricsUseCase::new(check_ins);

        let count = sut
            .execute(GetUserMetricsInput {
                user_id: "nobody".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(count, 0);
    }
}
