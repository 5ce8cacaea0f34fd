//! Disease detection seam and the catalog-backed placeholder implementation.
//!
//! [`DetectionService`] is the substitution point for a real model-backed
//! inference service. [`CatalogDetector`] is the current implementation: it
//! never inspects the image pixels, it draws a catalog entry and a
//! confidence value pseudo-randomly. It never fails; image validity is
//! enforced upstream by the upload pipeline.

use async_trait::async_trait;
use rand::Rng;
use serde::Serialize;

use crate::catalog::{self, Severity, CATALOG};
use crate::store::ImageFile;

/// A diagnosis as produced by a detection service, before persistence.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosisCandidate {
    pub plant_type: String,
    pub disease_name: String,
    pub description: String,
    /// Always within `[0, 1]`.
    pub confidence: f64,
    pub severity: Severity,
    pub treatment: Vec<String>,
    pub prevention: Vec<String>,
}

#[async_trait]
pub trait DetectionService: Send + Sync {
    async fn detect(&self, image: &ImageFile) -> DiagnosisCandidate;
}

/// Placeholder detector selecting uniformly from the fixed catalog.
#[derive(Debug, Default)]
pub struct CatalogDetector;

#[async_trait]
impl DetectionService for CatalogDetector {
    async fn detect(&self, _image: &ImageFile) -> DiagnosisCandidate {
        let mut rng = rand::rng();
        let entry = &CATALOG[rng.random_range(0..CATALOG.len())];
        let (lo, hi) = entry.confidence_range;
        let confidence = rng.random_range(lo..=hi);

        DiagnosisCandidate {
            plant_type: catalog::plant_type(entry.name).to_string(),
            disease_name: entry.name.to_string(),
            description: entry.description.to_string(),
            confidence: confidence.clamp(0.0, 1.0),
            severity: entry.severity,
            treatment: entry.treatment.iter().map(|s| s.to_string()).collect(),
            prevention: entry.prevention.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_image() -> ImageFile {
        ImageFile {
            file_name: "leaf.jpg".to_string(),
            content_type: "image/jpeg".to_string(),
            bytes: vec![0xFF, 0xD8, 0xFF],
        }
    }

    /// Confidence stays in [0, 1] and severity is a catalog value across
    /// many draws.
    #[tokio::test]
    async fn candidate_invariants_hold() {
        let detector = CatalogDetector;
        let image = test_image();
        for _ in 0..200 {
            let candidate = detector.detect(&image).await;
            assert!(
                (0.0..=1.0).contains(&candidate.confidence),
                "confidence {} out of range",
                candidate.confidence
            );
            assert!(matches!(
                candidate.severity,
                Severity::Low | Severity::Medium | Severity::High
            ));
            assert!(!candidate.treatment.is_empty());
            assert!(!candidate.prevention.is_empty());
        }
    }

    /// The plant type is always the first token of the disease name.
    #[tokio::test]
    async fn plant_type_matches_disease_name() {
        let detector = CatalogDetector;
        let image = test_image();
        for _ in 0..50 {
            let candidate = detector.detect(&image).await;
            let first = candidate.disease_name.split_whitespace().next().unwrap();
            assert_eq!(candidate.plant_type, first);
        }
    }

    /// The severity is the entry's own, never an independent random draw.
    #[tokio::test]
    async fn severity_comes_from_catalog_entry() {
        let detector = CatalogDetector;
        let image = test_image();
        for _ in 0..100 {
            let candidate = detector.detect(&image).await;
            let entry = CATALOG
                .iter()
                .find(|e| e.name == candidate.disease_name)
                .expect("candidate names a catalog entry");
            assert_eq!(candidate.severity, entry.severity);
            let (lo, hi) = entry.confidence_range;
            assert!(candidate.confidence >= lo && candidate.confidence <= hi);
        }
    }
}
