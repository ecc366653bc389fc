use axum::{extract::{Path, Query, State}, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use service::board_service;
use service::pagination::Page;

use crate::errors::ApiError;
use crate::routes::{AppState, PageQuery};

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateBoardInput {
    pub member_id: i64,
    pub title: String,
    pub content: String,
}

#[utoipa::path(
    post, path = "/boards", tag = "boards",
    request_body = crate::openapi::CreateBoardInputDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Member not found")
    )
)]
pub async fn create(State(state): State<AppState>, Json(input): Json<CreateBoardInput>) -> Result<(StatusCode, Json<models::board::Model>), ApiError> {
    let created = board_service::create_board(&state.db, input.member_id, &input.title, &input.content).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/boards/{id}", tag = "boards",
    params(("id" = i64, Path, description = "Board id")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Board not found")
    )
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<models::board::Model>, ApiError> {
    let found = board_service::find_verified_board(&state.db, id).await?;
    Ok(Json(found))
}

#[utoipa::path(
    get, path = "/boards", tag = "boards",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of boards"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list(State(state): State<AppState>, Query(q): Query<PageQuery>) -> Result<Json<Page<models::board::Model>>, ApiError> {
    let (page, per_page) = q.pagination().normalize();
    let found = board_service::find_boards_paginated(&state.db, page, per_page).await?;
    Ok(Json(found))
}

#[utoipa::path(
    delete, path = "/boards/{id}", tag = "boards",
    params(("id" = i64, Path, description = "Board id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Board not found")
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    board_service::delete_board(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
