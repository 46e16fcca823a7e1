use std::sync::Arc;

use axum::{
    Extension,
    extract::{Path, State},
    response::IntoResponse,
};
use diesel::{ExpressionMethods, QueryDsl};
use diesel_async::{AsyncConnection, RunQueryDsl, scoped_futures::ScopedFutureExt};
use uuid::Uuid;

use crate::{
    domain::auth::policy::{Action, can},
    dto::responses::{blog::delete_post_response::DeletePostResponse, response_data::http_resp},
    errors::code_error::{CodeError, CodeErrorResp, HandlerResponse, code_err},
    init::state::ServerState,
    routers::middleware::is_logged_in::AuthStatus,
    schema::{comments, posts},
    util::{auth::actor_role::actor_role, time::now::tokio_now},
};

/// Deletes a post and every comment hanging off it in one transaction, so a
/// crash between the two deletes can never orphan comments.
#[utoipa::path(
    delete,
    path = "/api/blog/posts/{post_id}",
    tag = "blog",
    params(("post_id" = Uuid, Path, description = "ID of the post to delete")),
    responses(
        (status = 200, description = "Post and its comments deleted", body = DeletePostResponse),
        (status = 401, description = "Not logged in", body = CodeErrorResp),
        (status = 403, description = "Actor lacks the required role", body = CodeErrorResp),
        (status = 404, description = "Post not found", body = CodeErrorResp),
        (status = 500, description = "Internal server error", body = CodeErrorResp)
    )
)]
pub async fn delete_post(
    Extension(is_logged_in): Extension<AuthStatus>,
    State(state): State<Arc<ServerState>>,
    Path(post_id): Path<Uuid>,
) -> HandlerResponse<impl IntoResponse> {
    let start = tokio_now();

    let actor_id: Uuid = match is_logged_in {
        AuthStatus::LoggedIn(id) => id,
        AuthStatus::LoggedOut => return Err(CodeError::LOGIN_REQUIRED.into()),
    };

    let role = actor_role(state.clone(), actor_id)
        .await
        .map_err(|e| code_err(CodeError::DB_QUERY_ERROR, e))?;

    if !can(role, Action::DeletePost) {
        return Err(code_err(
            CodeError::FORBIDDEN,
            "User is not authorized to delete posts",
        ));
    }

    let mut conn = state
        .get_conn()
        .await
        .map_err(|e| code_err(CodeError::POOL_ERROR, e))?;

    let deleted_comment_count: usize = conn
        .transaction(|conn| {
            async move {
                let comment_count =
                    diesel::delete(comments::table.filter(comments::post_id.eq(post_id)))
                        .execute(conn)
                        .await?;

                let deleted_posts = diesel::delete(posts::table.find(post_id))
                    .execute(conn)
                    .await?;

                if deleted_posts == 0 {
                    // Roll the comment delete back; the post was never there.
                    return Err(diesel::result::Error::NotFound);
                }

                Ok(comment_count)
            }
            .scope_boxed()
        })
        .await
        .map_err(|e| match e {
            diesel::result::Error::NotFound => code_err(CodeError::POST_NOT_FOUND, e),
            _ => code_err(CodeError::DB_DELETION_ERROR, e),
        })?;

    drop(conn);

    tracing::info!(
        post_id = %post_id,
        deleted_comment_count,
        "Post deleted along with its comments"
    );

    Ok(http_resp(
        DeletePostResponse {
            deleted_post_id: post_id,
            deleted_comment_count,
        },
        (),
        start,
    ))
}
