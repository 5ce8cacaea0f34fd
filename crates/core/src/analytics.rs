//! Dashboard analytics shapes, placeholder generators, and CSV export.
//!
//! The analytics tables are seeded externally; when one is empty the API
//! serves generated placeholder rows instead so dashboards render on a
//! fresh install.

use rand::Rng;
use serde::Serialize;

const MONTHS: &[&str] = &[
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const CROPS: &[&str] = &["Tomato", "Potato", "Wheat", "Rice", "Others"];

const TREATMENTS: &[&str] = &[
    "Organic Fungicide",
    "Chemical Fungicide",
    "Crop Rotation",
    "Resistant Varieties",
    "Proper Spacing",
    "Water Management",
];

/// Monthly case counts for the three tracked diseases.
#[derive(Debug, Clone, Serialize)]
pub struct TrendPoint {
    pub month: String,
    pub early_blight: i32,
    pub late_blight: i32,
    pub powdery_mildew: i32,
}

/// One crop's share of submissions; shares sum to 100.
#[derive(Debug, Clone, Serialize)]
pub struct CropShare {
    pub name: String,
    pub value: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct TreatmentScore {
    pub treatment: String,
    /// Percentage in [0, 100].
    pub effectiveness: i32,
}

/// Weekly weather and disease-pressure reading.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherPoint {
    pub date: String,
    pub humidity: i32,
    pub temperature: i32,
    pub disease_index: i32,
}

/// Twelve months of placeholder trend data.
pub fn placeholder_trends() -> Vec<TrendPoint> {
    let mut rng = rand::rng();
    MONTHS
        .iter()
        .map(|month| TrendPoint {
            month: month.to_string(),
            early_blight: rng.random_range(20..=90),
            late_blight: rng.random_range(15..=75),
            powdery_mildew: rng.random_range(10..=60),
        })
        .collect()
}

/// Placeholder crop distribution; values always sum to 100.
pub fn placeholder_crop_distribution() -> Vec<CropShare> {
    let mut rng = rand::rng();
    let mut remaining = 100;
    let mut shares = Vec::with_capacity(CROPS.len());

    for name in &CROPS[..CROPS.len() - 1] {
        let max = (remaining - (CROPS.len() as i32 - shares.len() as i32 - 1)).max(1);
        let value = rng.random_range(1..=max.min(40));
        shares.push(CropShare {
            name: name.to_string(),
            value,
        });
        remaining -= value;
    }
    shares.push(CropShare {
        name: CROPS[CROPS.len() - 1].to_string(),
        value: remaining,
    });
    shares
}

pub fn placeholder_treatment_effectiveness() -> Vec<TreatmentScore> {
    let mut rng = rand::rng();
    TREATMENTS
        .iter()
        .map(|treatment| TreatmentScore {
            treatment: treatment.to_string(),
            effectiveness: rng.random_range(50..=90),
        })
        .collect()
}

/// Eight weeks of placeholder weather readings.
pub fn placeholder_weather() -> Vec<WeatherPoint> {
    let mut rng = rand::rng();
    (1..=8)
        .map(|week| WeatherPoint {
            date: format!("Week {week}"),
            humidity: rng.random_range(40..=80),
            temperature: rng.random_range(20..=35),
            disease_index: rng.random_range(20..=80),
        })
        .collect()
}

/// Render trend rows as CSV, header first. Cells containing commas are
/// wrapped in quotes.
pub fn trends_csv(rows: &[TrendPoint]) -> String {
    let mut out = String::from("month,early_blight,late_blight,powdery_mildew\n");
    for row in rows {
        out.push_str(&csv_cell(&row.month));
        out.push(',');
        out.push_str(&row.early_blight.to_string());
        out.push(',');
        out.push_str(&row.late_blight.to_string());
        out.push(',');
        out.push_str(&row.powdery_mildew.to_string());
        out.push('\n');
    }
    out
}

fn csv_cell(value: &str) -> String {
    if value.contains(',') {
        format!("\"{value}\"")
    } else {
        value.to_string()
    }
}
