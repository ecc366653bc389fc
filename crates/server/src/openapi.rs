use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(utoipa::ToSchema)]
pub struct CreateCommentInputDoc {
    pub board_id: i64,
    pub member_id: i64,
    pub text: String,
}

#[derive(utoipa::ToSchema)]
pub struct UpdateCommentInputDoc {
    pub text: String,
}

#[derive(utoipa::ToSchema)]
pub struct CreateBoardInputDoc {
    pub member_id: i64,
    pub title: String,
    pub content: String,
}

#[derive(utoipa::ToSchema)]
pub struct CreateMemberInputDoc {
    pub email: String,
    pub name: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::comments::create,
        crate::routes::comments::get,
        crate::routes::comments::list,
        crate::routes::comments::update,
        crate::routes::comments::delete,
        crate::routes::boards::create,
        crate::routes::boards::get,
        crate::routes::boards::list,
        crate::routes::boards::delete,
        crate::routes::members::create,
        crate::routes::members::get,
    ),
    components(
        schemas(
            HealthResponse,
            CreateCommentInputDoc,
            UpdateCommentInputDoc,
            CreateBoardInputDoc,
            CreateMemberInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "comments"),
        (name = "boards"),
        (name = "members")
    )
)]
pub struct ApiDoc;
