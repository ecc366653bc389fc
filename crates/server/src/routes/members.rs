use axum::{extract::{Path, State}, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use service::member_service;

use crate::errors::ApiError;
use crate::routes::AppState;

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateMemberInput {
    pub email: String,
    pub name: String,
}

#[utoipa::path(
    post, path = "/members", tag = "members",
    request_body = crate::openapi::CreateMemberInputDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Invalid request"),
        (status = 409, description = "Member exists")
    )
)]
pub async fn create(State(state): State<AppState>, Json(input): Json<CreateMemberInput>) -> Result<(StatusCode, Json<models::member::Model>), ApiError> {
    let created = member_service::create_member(&state.db, &input.email, &input.name).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/members/{id}", tag = "members",
    params(("id" = i64, Path, description = "Member id")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Member not found")
    )
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<models::member::Model>, ApiError> {
    let found = member_service::find_verified_member(&state.db, id).await?;
    Ok(Json(found))
}
