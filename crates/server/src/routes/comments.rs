use axum::{extract::{Path, Query, State}, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use service::comment::domain::{Comment, CommentDraft, CommentUpdate};
use service::pagination::Page;

use crate::errors::ApiError;
use crate::routes::{AppState, PageQuery};

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateCommentInput {
    pub board_id: i64,
    pub member_id: i64,
    pub text: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateCommentInput {
    pub text: String,
}

#[utoipa::path(
    post, path = "/comments", tag = "comments",
    request_body = crate::openapi::CreateCommentInputDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create(State(state): State<AppState>, Json(input): Json<CreateCommentInput>) -> Result<(StatusCode, Json<Comment>), ApiError> {
    let draft = CommentDraft::new(input.board_id, input.member_id, input.text);
    let created = state.comments.create(draft).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/comments/{id}", tag = "comments",
    params(("id" = i64, Path, description = "Comment id")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Comment not found")
    )
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Comment>, ApiError> {
    let found = state.comments.find_one(id).await?;
    Ok(Json(found))
}

#[utoipa::path(
    get, path = "/comments", tag = "comments",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of comments"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list(State(state): State<AppState>, Query(q): Query<PageQuery>) -> Result<Json<Page<Comment>>, ApiError> {
    let (page, per_page) = q.pagination().normalize();
    let found = state.comments.find_page(page, per_page).await?;
    Ok(Json(found))
}

#[utoipa::path(
    patch, path = "/comments/{id}", tag = "comments",
    params(("id" = i64, Path, description = "Comment id")),
    request_body = crate::openapi::UpdateCommentInputDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 404, description = "Comment not found")
    )
)]
pub async fn update(State(state): State<AppState>, Path(id): Path<i64>, Json(input): Json<UpdateCommentInput>) -> Result<Json<Comment>, ApiError> {
    let updated = state.comments.update(CommentUpdate { id, text: input.text }).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/comments/{id}", tag = "comments",
    params(("id" = i64, Path, description = "Comment id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Comment not found")
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    state.comments.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
