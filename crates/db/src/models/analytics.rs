//! Dashboard analytics rows.
//!
//! Each row type converts into its `plantguard_core::analytics` response
//! shape so the API serves the same payload whether rows come from the
//! database or from the placeholder generators.

use sqlx::FromRow;

use plantguard_core::analytics::{CropShare, TreatmentScore, TrendPoint, WeatherPoint};
use plantguard_core::types::DbId;

/// A row from the `disease_trends` table.
#[derive(Debug, Clone, FromRow)]
pub struct DiseaseTrend {
    pub id: DbId,
    pub month: String,
    pub early_blight: i32,
    pub late_blight: i32,
    pub powdery_mildew: i32,
}

impl From<DiseaseTrend> for TrendPoint {
    fn from(row: DiseaseTrend) -> Self {
        Self {
            month: row.month,
            early_blight: row.early_blight,
            late_blight: row.late_blight,
            powdery_mildew: row.powdery_mildew,
        }
    }
}

/// A row from the `crop_distribution` table.
#[derive(Debug, Clone, FromRow)]
pub struct CropDistribution {
    pub id: DbId,
    pub name: String,
    pub value: i32,
}

impl From<CropDistribution> for CropShare {
    fn from(row: CropDistribution) -> Self {
        Self {
            name: row.name,
            value: row.value,
        }
    }
}

/// A row from the `treatment_effectiveness` table.
#[derive(Debug, Clone, FromRow)]
pub struct TreatmentEffectiveness {
    pub id: DbId,
    pub treatment: String,
    pub effectiveness: i32,
}

impl From<TreatmentEffectiveness> for TreatmentScore {
    fn from(row: TreatmentEffectiveness) -> Self {
        Self {
            treatment: row.treatment,
            effectiveness: row.effectiveness,
        }
    }
}

/// A row from the `weather_impacts` table.
#[derive(Debug, Clone, FromRow)]
pub struct WeatherImpact {
    pub id: DbId,
    pub date: String,
    pub humidity: i32,
    pub temperature: i32,
    pub disease_index: i32,
}

impl From<WeatherImpact> for WeatherPoint {
    fn from(row: WeatherImpact) -> Self {
        Self {
            date: row.date,
            humidity: row.humidity,
            temperature: row.temperature,
            disease_index: row.disease_index,
        }
    }
}
