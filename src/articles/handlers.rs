use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use tracing::{info, instrument};

use super::{
    dto::{ArticleBody, ArticleListQuery},
    repo::Article,
};
use crate::{
    auth::extractors::AdminUser,
    dto::Pagination,
    error::{ApiError, ApiResult},
    state::AppState,
};

pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/articles", get(list_articles))
        .route("/articles/:id", get(get_article))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/articles", get(list_articles_admin).post(create_article))
        .route("/articles/:id", put(replace_article).delete(delete_article))
}

#[instrument(skip(state))]
pub async fn list_articles(
    State(state): State<AppState>,
    Query(q): Query<ArticleListQuery>,
) -> ApiResult<Json<Vec<Article>>> {
    let rows = Article::list(&state.db, q.skip.max(0), q.limit.clamp(1, 500), q.featured).await?;
    Ok(Json(rows))
}

#[instrument(skip(state))]
pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Article>> {
    let article = Article::get_and_count_view(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("article"))?;
    Ok(Json(article))
}

#[instrument(skip_all)]
pub async fn list_articles_admin(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Query(p): Query<Pagination>,
) -> ApiResult<Json<Vec<Article>>> {
    let (skip, limit) = p.clamped();
    let rows = Article::list(&state.db, skip, limit, None).await?;
    Ok(Json(rows))
}

#[instrument(skip(state, body))]
pub async fn create_article(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Json(body): Json<ArticleBody>,
) -> ApiResult<(StatusCode, Json<Article>)> {
    body.validate()?;
    let article = Article::create(&state.db, &body).await?;
    info!(id = article.id, "article created");
    Ok((StatusCode::CREATED, Json(article)))
}

#[instrument(skip(state, body))]
pub async fn replace_article(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<i64>,
    Json(body): Json<ArticleBody>,
) -> ApiResult<Json<Article>> {
    body.validate()?;
    let article = Article::replace(&state.db, id, &body)
        .await?
        .ok_or(ApiError::NotFound("article"))?;
    Ok(Json(article))
}

#[instrument(skip(state))]
pub async fn delete_article(
    State(state): State<AppState>,
    AdminUser(_): AdminUser,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    if !Article::delete(&state.db, id).await? {
        return Err(ApiError::NotFound("article"));
    }
    info!(id, "article deleted");
    Ok(StatusCode::NO_CONTENT)
}
