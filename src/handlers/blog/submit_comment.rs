use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, State},
    response::IntoResponse,
};
use diesel::QueryDsl;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::{
    domain::blog::blog::{Comment, NewComment},
    dto::{
        requests::blog::submit_comment_request::SubmitCommentRequest,
        responses::{
            blog::submit_comment_response::SubmitCommentResponse, response_data::http_resp,
        },
    },
    errors::code_error::{CodeError, CodeErrorResp, HandlerResponse, code_err},
    init::state::ServerState,
    routers::middleware::is_logged_in::AuthStatus,
    schema::{comments, posts},
    util::time::now::tokio_now,
};

/// Any logged-in user may comment; no role check here.
#[utoipa::path(
    post,
    path = "/api/blog/posts/{post_id}/comment",
    tag = "blog",
    params(("post_id" = Uuid, Path, description = "ID of the post being commented on")),
    request_body = SubmitCommentRequest,
    responses(
        (status = 200, description = "Comment created", body = SubmitCommentResponse),
        (status = 401, description = "Not logged in", body = CodeErrorResp),
        (status = 404, description = "Post not found", body = CodeErrorResp),
        (status = 500, description = "Internal server error", body = CodeErrorResp)
    )
)]
pub async fn submit_comment(
    Extension(is_logged_in): Extension<AuthStatus>,
    State(state): State<Arc<ServerState>>,
    Path(post_id): Path<Uuid>,
    Json(request): Json<SubmitCommentRequest>,
) -> HandlerResponse<impl IntoResponse> {
    let start = tokio_now();

    let actor_id: Uuid = match is_logged_in {
        AuthStatus::LoggedIn(id) => id,
        AuthStatus::LoggedOut => return Err(CodeError::LOGIN_REQUIRED.into()),
    };

    let mut conn = state
        .get_conn()
        .await
        .map_err(|e| code_err(CodeError::POOL_ERROR, e))?;

    let post_exists: bool = diesel::select(diesel::dsl::exists(posts::table.find(post_id)))
        .get_result(&mut conn)
        .await
        .map_err(|e| code_err(CodeError::DB_QUERY_ERROR, e))?;

    if !post_exists {
        return Err(CodeError::POST_NOT_FOUND.into());
    }

    let new_comment = NewComment::new(&post_id, &actor_id, &request.comment_content);

    let comment: Comment = diesel::insert_into(comments::table)
        .values(new_comment)
        .returning(comments::all_columns)
        .get_result(&mut conn)
        .await
        .map_err(|e| match e {
            // FK race: the post was deleted between the exists check and here.
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::ForeignKeyViolation,
                _,
            ) => code_err(CodeError::POST_NOT_FOUND, e),
            _ => code_err(CodeError::DB_INSERTION_ERROR, e),
        })?;

    drop(conn);

    tracing::info!(comment_id = %comment.comment_id, post_id = %post_id, "Comment created");

    Ok(http_resp(
        SubmitCommentResponse {
            comment_id: comment.comment_id,
            post_id: comment.post_id,
            user_id: comment.user_id,
            comment_created_at: comment.comment_created_at,
        },
        (),
        start,
    ))
}
