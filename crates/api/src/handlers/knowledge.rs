//! Handlers for the `/knowledge` resource (read-only article library).

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use plantguard_core::knowledge::{BuiltinArticle, FALLBACK_ARTICLES};
use plantguard_core::types::{DbId, Timestamp};
use plantguard_db::models::article::Article;
use plantguard_db::repositories::ArticleRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// An article as served over the API. Database rows and built-in fallback
/// articles share this shape; fallback entries have no id or timestamps.
#[derive(Debug, Serialize)]
pub struct ArticleResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    pub title: String,
    pub category: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub image_url: Option<String>,
    pub image_alt: Option<String>,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl From<Article> for ArticleResponse {
    fn from(row: Article) -> Self {
        Self {
            id: Some(row.id),
            title: row.title,
            category: row.category,
            excerpt: row.excerpt,
            content: row.content,
            image_url: row.image_url,
            image_alt: row.image_alt,
            slug: row.slug,
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
        }
    }
}

impl From<&BuiltinArticle> for ArticleResponse {
    fn from(article: &BuiltinArticle) -> Self {
        Self {
            id: None,
            title: article.title.to_string(),
            category: article.category.to_string(),
            excerpt: Some(article.excerpt.to_string()),
            content: article.content.to_string(),
            image_url: Some(article.image_url.to_string()),
            image_alt: Some(article.image_alt.to_string()),
            slug: article.slug.to_string(),
            created_at: None,
            updated_at: None,
        }
    }
}

/// GET /api/v1/knowledge
///
/// List all articles, most recent first. An empty table falls back to the
/// built-in set so the knowledge page is never blank.
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ArticleResponse>>>> {
    let rows = ArticleRepo::list(&state.pool).await?;

    let articles: Vec<ArticleResponse> = if rows.is_empty() {
        FALLBACK_ARTICLES.iter().map(ArticleResponse::from).collect()
    } else {
        rows.into_iter().map(ArticleResponse::from).collect()
    };

    Ok(Json(DataResponse { data: articles }))
}

/// GET /api/v1/knowledge/{slug}
///
/// Fetch one article by slug; checks the built-in set when the table has
/// no match. Unknown slugs return 404.
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<DataResponse<ArticleResponse>>> {
    if let Some(row) = ArticleRepo::find_by_slug(&state.pool, &slug).await? {
        return Ok(Json(DataResponse {
            data: ArticleResponse::from(row),
        }));
    }

    let fallback = FALLBACK_ARTICLES
        .iter()
        .find(|a| a.slug == slug)
        .ok_or_else(|| AppError::NotFound(format!("Article '{slug}'")))?;

    Ok(Json(DataResponse {
        data: ArticleResponse::from(fallback),
    }))
}
