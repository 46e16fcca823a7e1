use std::sync::Arc;

use axum::{
    Extension,
    extract::{Path, State},
    response::IntoResponse,
};
use diesel::QueryDsl;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::{
    domain::auth::policy::{Action, can},
    dto::responses::{
        blog::delete_comment_response::DeleteCommentResponse, response_data::http_resp,
    },
    errors::code_error::{CodeError, CodeErrorResp, HandlerResponse, code_err},
    init::state::ServerState,
    routers::middleware::is_logged_in::AuthStatus,
    schema::comments,
    util::{auth::actor_role::actor_role, time::now::tokio_now},
};

/// Moderation-only. Commenters cannot delete their own comments unless they
/// also hold a privileged role.
#[utoipa::path(
    delete,
    path = "/api/blog/comments/{comment_id}",
    tag = "blog",
    params(("comment_id" = Uuid, Path, description = "ID of the comment to delete")),
    responses(
        (status = 200, description = "Comment deleted", body = DeleteCommentResponse),
        (status = 401, description = "Not logged in", body = CodeErrorResp),
        (status = 403, description = "Actor lacks the required role", body = CodeErrorResp),
        (status = 404, description = "Comment not found", body = CodeErrorResp),
        (status = 500, description = "Internal server error", body = CodeErrorResp)
    )
)]
pub async fn delete_comment(
    Extension(is_logged_in): Extension<AuthStatus>,
    State(state): State<Arc<ServerState>>,
    Path(comment_id): Path<Uuid>,
) -> HandlerResponse<impl IntoResponse> {
    let start = tokio_now();

    let actor_id: Uuid = match is_logged_in {
        AuthStatus::LoggedIn(id) => id,
        AuthStatus::LoggedOut => return Err(CodeError::LOGIN_REQUIRED.into()),
    };

    let role = actor_role(state.clone(), actor_id)
        .await
        .map_err(|e| code_err(CodeError::DB_QUERY_ERROR, e))?;

    if !can(role, Action::DeleteComment) {
        return Err(code_err(
            CodeError::FORBIDDEN,
            "User is not authorized to delete comments",
        ));
    }

    let mut conn = state
        .get_conn()
        .await
        .map_err(|e| code_err(CodeError::POOL_ERROR, e))?;

    let deleted = diesel::delete(comments::table.find(comment_id))
        .execute(&mut conn)
        .await
        .map_err(|e| code_err(CodeError::DB_DELETION_ERROR, e))?;

    drop(conn);

    if deleted == 0 {
        return Err(CodeError::COMMENT_NOT_FOUND.into());
    }

    tracing::info!(comment_id = %comment_id, "Comment deleted");

    Ok(http_resp(
        DeleteCommentResponse {
            deleted_comment_id: comment_id,
        },
        (),
        start,
    ))
}
