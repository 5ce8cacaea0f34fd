//! Fixed disease catalog backing the placeholder detection service.
//!
//! Each entry carries the descriptive text, care guidance, a default
//! severity, and the confidence range the detector draws from. The catalog
//! stands in for a trained model's label set until a real inference
//! service replaces [`crate::detection::CatalogDetector`].

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Severity of a diagnosed disease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Parse from the database text column.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(CoreError::Validation(format!(
                "Unknown severity '{other}'. Must be one of: low, medium, high"
            ))),
        }
    }

    /// Database / API text value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// A single catalog entry.
#[derive(Debug, Clone, Copy)]
pub struct DiseaseEntry {
    /// Display name; the first whitespace-delimited token is the plant type.
    pub name: &'static str,
    pub description: &'static str,
    /// Inclusive confidence range the detector draws from.
    pub confidence_range: (f64, f64),
    pub severity: Severity,
    pub treatment: &'static [&'static str],
    pub prevention: &'static [&'static str],
}

/// Derive the plant type from an entry name (first whitespace token).
pub fn plant_type(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or(name)
}

/// The fixed catalog the placeholder detector selects from.
pub const CATALOG: &[DiseaseEntry] = &[
    DiseaseEntry {
        name: "Tomato Early Blight",
        description: "Early blight is a common fungal disease that affects tomato plants. \
                      It is characterized by dark spots with concentric rings and yellowing \
                      around the spots.",
        confidence_range: (0.82, 0.95),
        severity: Severity::Medium,
        treatment: &[
            "Remove and destroy all affected leaves to prevent spread.",
            "Apply a fungicide specifically labeled for early blight control.",
            "Ensure proper spacing between plants to improve air circulation.",
            "Water at the base of plants to keep foliage dry.",
        ],
        prevention: &[
            "Use disease-resistant varieties when possible.",
            "Practice crop rotation, avoiding planting tomatoes in the same area for 3-4 years.",
            "Provide adequate spacing between plants for good air circulation.",
            "Use mulch to prevent soil splash onto leaves.",
            "Keep garden free of plant debris where fungi can overwinter.",
        ],
    },
    DiseaseEntry {
        name: "Tomato Late Blight",
        description: "Late blight is an aggressive oomycete disease producing dark, \
                      water-soaked lesions on leaves and fruit. It spreads rapidly in \
                      cool, wet weather and can destroy a planting within days.",
        confidence_range: (0.75, 0.92),
        severity: Severity::High,
        treatment: &[
            "Remove and destroy infected plants immediately; do not compost them.",
            "Apply copper-based fungicides preventatively to remaining plants.",
            "Harvest any unaffected fruit early and ripen indoors.",
        ],
        prevention: &[
            "Plant certified disease-free transplants.",
            "Avoid overhead irrigation and extended leaf wetness.",
            "Monitor regional blight forecasts during cool, humid spells.",
        ],
    },
    DiseaseEntry {
        name: "Potato Late Blight",
        description: "Late blight of potato, caused by Phytophthora infestans, produces \
                      dark water-soaked foliage lesions, white growth on leaf undersides, \
                      and reddish-brown tuber rot.",
        confidence_range: (0.78, 0.93),
        severity: Severity::High,
        treatment: &[
            "Apply systemic fungicides containing metalaxyl or cymoxanil.",
            "Destroy infected foliage before lifting tubers.",
            "Cull and destroy infected tubers; never store them.",
        ],
        prevention: &[
            "Use certified disease-free seed potatoes.",
            "Hill soil well over developing tubers.",
            "Space rows 30-36 inches apart for ventilation.",
            "Remove volunteer potatoes and nightshade weeds.",
        ],
    },
    DiseaseEntry {
        name: "Wheat Leaf Rust",
        description: "Leaf rust of wheat, caused by Puccinia species, shows as \
                      orange-brown pustules on leaves and stems, stunting growth and \
                      reducing yield.",
        confidence_range: (0.70, 0.90),
        severity: Severity::Medium,
        treatment: &[
            "Apply triazole fungicides such as propiconazole or tebuconazole.",
            "Time applications at stem elongation and flag leaf emergence.",
            "Monitor regularly so treatment starts at first pustules.",
        ],
        prevention: &[
            "Plant rust-resistant varieties.",
            "Sow early to avoid peak rust season.",
            "Rotate with non-cereal crops.",
            "Remove volunteer wheat that carries spores between seasons.",
        ],
    },
    DiseaseEntry {
        name: "Rice Blast",
        description: "Rice blast, caused by Magnaporthe oryzae, produces diamond-shaped \
                      lesions with gray centers on leaves and can rot the panicle neck, \
                      making it one of the most destructive rice diseases worldwide.",
        confidence_range: (0.72, 0.91),
        severity: Severity::High,
        treatment: &[
            "Apply a blast-labeled fungicide at heading.",
            "Drain and re-flood paddies to reduce canopy humidity.",
            "Remove heavily infected plants from the field.",
        ],
        prevention: &[
            "Grow resistant cultivars adapted to the region.",
            "Avoid excessive nitrogen fertilization.",
            "Maintain consistent flooding; drought stress favors blast.",
        ],
    },
];
