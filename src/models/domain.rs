use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A registered gym.
///
/// Coordinates are fixed-precision decimals so repeated comparisons never
/// drift; they are widened to `f64` only at the edge of the distance
/// computation. A gym is immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Gym {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub phone: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub latitude: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub longitude: Decimal,
}

impl Gym {
    pub fn latitude_f64(&self) -> f64 {
        self.latitude.to_f64().unwrap_or_default()
    }

    pub fn longitude_f64(&self) -> f64 {
        self.longitude.to_f64().unwrap_or_default()
    }
}

/// A recorded gym visit. `created_at` is the authoritative timestamp for the
/// one-per-day rule; `validated_at` is reserved for the confirmation
/// workflow and stays `None` until a check-in is confirmed.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CheckIn {
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "gymId")]
    pub gym_id: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "validatedAt")]
    pub validated_at: Option<DateTime<Utc>>,
}

/// Creation payload for a gym; the repository assigns the identifier.
#[derive(Debug, Clone)]
pub struct NewGym {
    pub title: String,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub latitude: Decimal,
    pub longitude: Decimal,
}

/// Creation payload for a check-in. `created_at` comes from the injected
/// clock, never from the repository.
#[derive(Debug, Clone)]
pub struct NewCheckIn {
    pub user_id: String,
    pub gym_id: String,
    pub created_at: DateTime<Utc>,
}

/// Geospatial bounding box used as a cheap proximity pre-filter.
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

/// Convert request-level degrees into the fixed-precision storage form.
/// Six decimal places matches the NUMERIC(9, 6) schema columns (~0.11 m).
pub fn degrees_to_decimal(value: f64) -> Decimal {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp(6))
        .unwrap_or_default()
}
