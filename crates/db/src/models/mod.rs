//! Entity models: one module per table family. Each pairs a `FromRow`
//! struct with the Create DTO the repositories accept.

pub mod analytics;
pub mod article;
pub mod detection;
pub mod message;
pub mod session;
pub mod user;
