//! HTTP handlers, one module per resource.

pub mod analytics;
pub mod assistant;
pub mod auth;
pub mod detections;
pub mod knowledge;
