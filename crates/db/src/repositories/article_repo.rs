//! Repository for the `knowledge_articles` table (read-only).

use sqlx::PgPool;

use crate::models::article::Article;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, category, excerpt, content, image_url, image_alt, slug, created_at, updated_at";

/// Read access to knowledge articles.
pub struct ArticleRepo;

impl ArticleRepo {
    /// List all articles, most recent first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM knowledge_articles ORDER BY created_at DESC");
        sqlx::query_as::<_, Article>(&query).fetch_all(pool).await
    }

    /// Find an article by its URL slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM knowledge_articles WHERE slug = $1");
        sqlx::query_as::<_, Article>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }
}
