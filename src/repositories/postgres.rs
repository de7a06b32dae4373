use std::time::Duration;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::core::distance::{calculate_bounding_box, haversine_distance};
use crate::models::{CheckIn, Gym, NewCheckIn, NewGym};
use crate::repositories::{CheckInRepository, GymRepository, RepositoryError};

/// Errors that can occur while establishing the database pool
#[derive(Debug, Error)]
pub enum PostgresSetupError {
    #[error("SQLx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RepositoryError::UniqueViolation(db.message().to_string())
            }
            _ => RepositoryError::Query(err.to_string()),
        }
    }
}

/// Create the connection pool and run migrations on startup.
pub async fn connect_pool(
    database_url: &str,
    max_connections: u32,
    min_connections: u32,
) -> Result<PgPool, PostgresSetupError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .min_connections(min_connections)
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(600))
        .test_before_acquire(true)
        .connect(database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}

/// Postgres-backed gym storage.
pub struct PostgresGymRepository {
    pool: PgPool,
}

impl PostgresGymRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GymRepository for PostgresGymRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Gym>, RepositoryError> {
        let query = r#"
            SELECT id, title, description, phone, latitude, longitude
            FROM gyms
            WHERE id = $1
        "#;

        let gym = sqlx::query_as::<_, Gym>(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(gym)
    }

    /// Bounding-box pre-filter in SQL, exact haversine filter in Rust. The
    /// box is an over-approximation, so no gym inside the radius is ever
    /// lost; the haversine pass removes the corners the box lets through.
    async fn find_many_nearby(
        &self,
        latitude: f64,
        longitude: f64,
        radius_km: f64,
    ) -> Result<Vec<Gym>, RepositoryError> {
        let bbox = calculate_bounding_box(latitude, longitude, radius_km);

        let query = r#"
            SELECT id, title, description, phone, latitude, longitude
            FROM gyms
            WHERE latitude BETWEEN $1::numeric AND $2::numeric
              AND longitude BETWEEN $3::numeric AND $4::numeric
            ORDER BY created_at, id
        "#;

        let candidates = sqlx::query_as::<_, Gym>(query)
            .bind(bbox.min_lat)
            .bind(bbox.max_lat)
            .bind(bbox.min_lon)
            .bind(bbox.max_lon)
            .fetch_all(&self.pool)
            .await?;

        let total = candidates.len();
        let gyms: Vec<Gym> = candidates
            .into_iter()
            .filter(|gym| {
                haversine_distance(latitude, longitude, gym.latitude_f64(), gym.longitude_f64())
                    <= radius_km
            })
            .collect();

        tracing::debug!(
            "nearby query kept {} of {} bounding-box candidates",
            gyms.len(),
            total
        );

        Ok(gyms)
    }

    async fn search_many(
        &self,
        query: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<Gym>, RepositoryError> {
        let offset = i64::from(page.saturating_sub(1)) * i64::from(page_size);

        let sql = r#"
            SELECT id, title, description, phone, latitude, longitude
            FROM gyms
            WHERE title ILIKE '%' || $1 || '%'
            ORDER BY created_at, id
            LIMIT $2 OFFSET $3
        "#;

        let gyms = sqlx::query_as::<_, Gym>(sql)
            .bind(query)
            .bind(i64::from(page_size))
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(gyms)
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

        let query = r#"
            INSERT INTO gyms (id, title, description, phone, latitude, longitude)
            VALUES ($1, $2, $3, $4, $5, $6)
        "#;

        sqlx::query(query)
            .bind(&gym.id)
            .bind(&gym.title)
            .bind(&gym.description)
            .bind(&gym.phone)
            .bind(gym.latitude)
            .bind(gym.longitude)
            .execute(&self.pool)
            .await?;

        tracing::debug!("registered gym {} ({})", gym.title, gym.id);

        Ok(gym)
    }
}

/// Postgres-backed check-in storage.
///
/// The unique index on (user_id, UTC day of created_at) is the authoritative
/// one-per-day guard; `create` surfaces its violation as `UniqueViolation`
/// for the use-case to translate.
pub struct PostgresCheckInRepository {
    pool: PgPool,
}

impl PostgresCheckInRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CheckInRepository for PostgresCheckInRepository {
    async fn find_by_user_id_on_date(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Option<CheckIn>, RepositoryError> {
        // Half-open [start of day, start of next day), equivalent to the
        // inclusive start..end-of-day range at timestamp resolution.
        let start_of_day = date.and_time(NaiveTime::MIN).and_utc();
        let start_of_next_day = start_of_day + chrono::Duration::days(1);

        let query = r#"
            SELECT id, user_id, gym_id, created_at, validated_at
            FROM check_ins
            WHERE user_id = $1
              AND created_at >= $2
              AND created_at < $3
        "#;

        let check_in = sqlx::query_as::<_, CheckIn>(query)
            .bind(user_id)
            .bind(start_of_day)
            .bind(start_of_next_day)
            .fetch_optional(&self.pool)
            .await?;

        Ok(check_in)
    }

    async fn find_many_by_user_id(
        &self,
        user_id: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<CheckIn>, RepositoryError> {
        let offset = i64::from(page.saturating_sub(1)) * i64::from(page_size);

        let query = r#"
            SELECT id, user_id, gym_id, created_at, validated_at
            FROM check_ins
            WHERE user_id = $1
            ORDER BY created_at, id
            LIMIT $2 OFFSET $3
        "#;

        let check_ins = sqlx::query_as::<_, CheckIn>(query)
            .bind(user_id)
            .bind(i64::from(page_size))
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(check_ins)
    }

    async fn count_by_user_id(&self, user_id: &str) -> Result<u64, RepositoryError> {
        let query = r#"
            SELECT COUNT(*)
            FROM check_ins
            WHERE user_id = $1
        "#;

        let count: i64 = sqlx::query_scalar(query)
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count as u64)
    }

    async fn create(&self, data: NewCheckIn) -> Result<CheckIn, RepositoryError> {
        let check_in = CheckIn {
            id: Uuid::new_v4().to_string(),
            user_id: data.user_id,
            gym_id: data.gym_id,
            created_at: data.created_at,
            validated_at: None,
        };

        let query = r#"
            INSERT INTO check_ins (id, user_id, gym_id, created_at, validated_at)
            VALUES ($1, $2, $3, $4, $5)
        "#;

        sqlx::query(query)
            .bind(&check_in.id)
            .bind(&check_in.user_id)
            .bind(&check_in.gym_id)
            .bind(check_in.created_at)
            .bind(check_in.validated_at)
            .execute(&self.pool)
            .await?;

        tracing::debug!(
            "user {} checked in at gym {}",
            check_in.user_id,
            check_in.gym_id
        );

        Ok(check_in)
    }
}
