//! PlantGuard domain logic.
//!
//! Pure types and the upload/detection pipeline, free of HTTP and database
//! concerns. The I/O seams are the [`store::ImageStore`],
//! [`detection::DetectionService`], and [`pipeline::DiagnosisSink`] traits,
//! implemented by the `plantguard-storage`, this crate, and the API crate
//! respectively.

pub mod analytics;
pub mod assistant;
pub mod catalog;
pub mod detection;
pub mod error;
pub mod imaging;
pub mod knowledge;
pub mod pipeline;
pub mod store;
pub mod types;
