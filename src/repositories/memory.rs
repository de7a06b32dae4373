use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::core::distance::haversine_distance;
use crate::models::{CheckIn, Gym, NewCheckIn, NewGym};
use crate::repositories::{CheckInRepository, GymRepository, RepositoryError};

/// In-memory gym store.
///
/// Exists to make use-case tests deterministic and fast. Behavior must stay
/// interchangeable with the Postgres adapter: same creation order, same
/// haversine proximity semantics, same pagination offsets.
#[derive(Debug, Default)]
pub struct InMemoryGymRepository {
    items: Mutex<Vec<Gym>>,
}

impl InMemoryGymRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GymRepository for InMemoryGymRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Gym>, RepositoryError> {
        let items = self.items.lock().expect("gym store poisoned");
        Ok(items.iter().find(|gym| gym.id == id).cloned())
    }

    async fn find_many_nearby(
        &self,
        latitude: f64,
        longitude: f64,
        radius_km: f64,
    ) -> Result<Vec<Gym>, RepositoryError> {
        let items = self.items.lock().expect("gym store poisoned");
        Ok(items
            .iter()
            .filter(|gym| {
                haversine_distance(latitude, longitude, gym.latitude_f64(), gym.longitude_f64())
                    <= radius_km
            })
            .cloned()
            .collect())
    }

    async fn search_many(
        &self,
        query: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<Gym>, RepositoryError> {
        let needle = query.to_lowercase();
        let offset = (page.saturating_sub(1) as usize) * page_size as usize;
        let items = self.items.lock().expect("gym store poisoned");
        Ok(items
            .iter()
            .filter(|gym| gym.title.to_lowercase().contains(&needle))
            .skip(offset)
            .take(page_size as usize)
            .cloned()
            .collect())
    }

    async fn create(&self, data: NewGym) -> Result<Gym, RepositoryError> {
        let gym = Gym {
            id: Uuid::new_v4().to_string(),
            title: data.title,
            description: data.description,
            phone: data.phone,
            latitude: data.latitude,
            longitude: data.longitude,
        };
        let mut items = self.items.lock().expect("gym store poisoned");
        items.push(gym.clone());
        Ok(gym)
    }
}

/// In-memory check-in store.
///
/// Enforces the same (user, UTC day) uniqueness the Postgres unique index
/// does, so the race-translation path in the check-in use-case is testable
/// without a database.
#[derive(Debug, Default)]
pub struct InMemoryCheckInRepository {
    items: Mutex<Vec<CheckIn>>,
}

impl InMemoryCheckInRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CheckInRepository for InMemoryCheckInRepository {
    async fn find_by_user_id_on_date(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Option<CheckIn>, RepositoryError> {
        let items = self.items.lock().expect("check-in store poisoned");
        Ok(items
            .iter()
            .find(|check_in| {
                check_in.user_id == user_id && check_in.created_at.date_naive() == date
            })
            .cloned())
    }

    async fn find_many_by_user_id(
        &self,
        user_id: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<CheckIn>, RepositoryError> {
        let offset = (page.saturating_sub(1) as usize) * page_size as usize;
        let items = self.items.lock().expect("check-in store poisoned");
        Ok(items
            .iter()
            .filter(|check_in| check_in.user_id == user_id)
            .skip(offset)
            .take(page_size as usize)
            .cloned()
            .collect())
    }

    async fn count_by_user_id(&self, user_id: &str) -> Result<u64, RepositoryError> {
        let items = self.items.lock().expect("check-in store poisoned");
        Ok(items
            .iter()
            .filter(|check_in| check_in.user_id == user_id)
            .count() as u64)
    }

    async fn create(&self, data: NewCheckIn) -> Result<CheckIn, RepositoryError> {
        let mut items = self.items.lock().expect("check-in store poisoned");

        let day = data.created_at.date_naive();
        let duplicate = items
            .iter()
            .any(|existing| existing.user_id == data.user_id && existing.created_at.date_naive() == day);
        if duplicate {
            return Err(RepositoryError::UniqueViolation(
                "check_ins_user_id_day_key".to_string(),
            ));
        }

        let check_in = CheckIn {
            id: Uuid::new_v4().to_string(),
            user_id: data.user_id,
            gym_id: data.gym_id,
            created_at: data.created_at,
            validated_at: None,
        };
        items.push(check_in.clone());
        Ok(check_in)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::models::degrees_to_decimal;

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
    async fn test_gym_round_trip() {
        let repo = InMemoryGymRepository::new();
        let created = repo
            .create(new_gym("Javascript Gym", 23.5429495, -46.6331956))
            .await
            .unwrap();

        let fetched = repo.find_by_id(&created.id).await.unwrap();
        assert_eq!(fetched.unwrap().title, "Javascript Gym");
        assert!(repo.find_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_and_ordered() {
        let repo = InMemoryGymRepository::new();
        repo.create(new_gym("Javascript Gym", 0.0, 0.0)).await.unwrap();
        repo.create(new_gym("Typescript Gym", 0.0, 0.0)).await.unwrap();
        repo.create(new_gym("JAVASCRIPT Arena", 0.0, 0.0)).await.unwrap();

        let found = repo.search_many("javascript", 1, 20).await.unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].title, "Javascript Gym");
        assert_eq!(found[1].title, "JAVASCRIPT Arena");
    }

    #[tokio::test]
    async fn test_check_in_create_enforces_daily_uniqueness() {
        let repo = InMemoryCheckInRepository::new();
        let morning = Utc.with_ymd_and_hms(2022, 1, 10, 8, 0, 0).unwrap();
        let evening = Utc.with_ymd_and_hms(2022, 1, 10, 20, 0, 0).unwrap();

        repo.create(NewCheckIn {
            user_id: "user-01".to_string(),
            gym_id: "gym-01".to_string(),
            created_at: morning,
        })
        .await
        .unwrap();

        let second = repo
            .create(NewCheckIn {
                user_id: "user-01".to_string(),
                gym_id: "gym-01".to_string(),
                created_at: evening,
            })
            .await;
        assert!(matches!(second, Err(RepositoryError::UniqueViolation(_))));

        // A different user on the same day is unaffected.
        repo.create(NewCheckIn {
            user_id: "user-02".to_string(),
            gym_id: "gym-01".to_string(),
            created_at: evening,
        })
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_find_by_user_id_on_date_uses_calendar_days() {
        let repo = InMemoryCheckInRepository::new();
        let late_night = Utc.with_ymd_and_hms(2022, 1, 10, 23, 30, 0).unwrap();
        repo.create(NewCheckIn {
            user_id: "user-01".to_string(),
            gym_id: "gym-01".to_string(),
            created_at: late_night,
        })
        .await
        .unwrap();

        let same_day = repo
            .find_by_user_id_on_date("user-01", late_night.date_naive())
            .await
            .unwrap();
        assert!(same_day.is_some());

        // 31 minutes later is within a rolling 24 h window but lands on the
        // next calendar day, so nothing is found.
        let next_day = late_night.date_naive().succ_opt().unwrap();
        let found = repo
            .find_by_user_id_on_date("user-01", next_day)
            .await
            .unwrap();
        assert!(found.is_none());
    }
}
