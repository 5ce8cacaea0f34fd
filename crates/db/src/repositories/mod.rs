//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod analytics_repo;
pub mod article_repo;
pub mod detection_repo;
pub mod message_repo;
pub mod session_repo;
pub mod user_repo;

pub use analytics_repo::AnalyticsRepo;
pub use article_repo::ArticleRepo;
pub use detection_repo::DetectionRepo;
pub use message_repo::MessageRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
