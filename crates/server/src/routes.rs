use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::comment::repo::seaorm::SeaOrmCommentRepository;
use service::comment::CommentService;
use service::pagination::Pagination;

use crate::openapi::ApiDoc;

pub mod comments;
pub mod boards;
pub mod members;

/// Shared state handed to every route handler.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub comments: Arc<CommentService<SeaOrmCommentRepository>>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        let repo = Arc::new(SeaOrmCommentRepository { db: db.clone() });
        Self { db, comments: Arc::new(CommentService::new(repo)) }
    }
}

/// Query string for the paged listings. `page` is 1-based on the wire.
#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl PageQuery {
    pub fn pagination(&self) -> Pagination {
        let defaults = Pagination::default();
        Pagination {
            page: self.page.unwrap_or(defaults.page),
            per_page: self.size.unwrap_or(defaults.per_page),
        }
    }
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is up"))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health, board API, and docs
pub fn build_router(cors: CorsLayer, state: AppState) -> Router {
    // Board API routes
    let api = Router::new()
        .route("/comments", post(comments::create).get(comments::list))
        .route(
            "/comments/:id",
            get(comments::get).patch(comments::update).delete(comments::delete),
        )
        .route("/boards", post(boards::create).get(boards::list))
        .route("/boards/:id", get(boards::get).delete(boards::delete))
        .route("/members", post(members::create))
        .route("/members/:id", get(members::get));

    // Compose
    Router::new()
        .route("/health", get(health))
        .merge(api)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
