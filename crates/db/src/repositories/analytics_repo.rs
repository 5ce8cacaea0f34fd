//! Read-only repository for the dashboard analytics tables.

use sqlx::PgPool;

use crate::models::analytics::{
    CropDistribution, DiseaseTrend, TreatmentEffectiveness, WeatherImpact,
};

/// Read access to the externally seeded analytics tables.
pub struct AnalyticsRepo;

impl AnalyticsRepo {
    /// Monthly disease trend rows in insertion order.
    pub async fn list_trends(pool: &PgPool) -> Result<Vec<DiseaseTrend>, sqlx::Error> {
        sqlx::query_as::<_, DiseaseTrend>(
            "SELECT id, month, early_blight, late_blight, powdery_mildew
             FROM disease_trends ORDER BY id",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn list_crop_distribution(
        pool: &PgPool,
    ) -> Result<Vec<CropDistribution>, sqlx::Error> {
        sqlx::query_as::<_, CropDistribution>(
            "SELECT id, name, value FROM crop_distribution ORDER BY id",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn list_treatment_effectiveness(
        pool: &PgPool,
    ) -> Result<Vec<TreatmentEffectiveness>, sqlx::Error> {
        sqlx::query_as::<_, TreatmentEffectiveness>(
            "SELECT id, treatment, effectiveness FROM treatment_effectiveness ORDER BY id",
        )
        .fetch_all(pool)
        .await
    }

    /// Weekly weather/disease-pressure rows in insertion order.
    pub async fn list_weather(pool: &PgPool) -> Result<Vec<WeatherImpact>, sqlx::Error> {
        sqlx::query_as::<_, WeatherImpact>(
            "SELECT id, date, humidity, temperature, disease_index
             FROM weather_impacts ORDER BY id",
        )
        .fetch_all(pool)
        .await
    }
}
