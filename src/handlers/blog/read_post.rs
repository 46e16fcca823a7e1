use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use diesel::{ExpressionMethods, JoinOnDsl, QueryDsl};
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::{
    domain::blog::blog::{CommentWithAuthor, PostWithAuthor},
    dto::responses::{blog::read_post_response::ReadPostResponse, response_data::http_resp},
    errors::code_error::{CodeError, CodeErrorResp, HandlerResponse, code_err},
    init::state::ServerState,
    schema::{comments, posts, users},
    util::time::now::tokio_now,
};

#[utoipa::path(
    get,
    path = "/api/blog/posts/{post_id}",
    tag = "blog",
    params(("post_id" = Uuid, Path, description = "ID of the post to read")),
    responses(
        (status = 200, description = "Post with its comments", body = ReadPostResponse),
        (status = 404, description = "Post not found", body = CodeErrorResp),
        (status = 500, description = "Internal server error", body = CodeErrorResp)
    )
)]
pub async fn read_post(
    State(state): State<Arc<ServerState>>,
    Path(post_id): Path<Uuid>,
) -> HandlerResponse<impl IntoResponse> {
    let start = tokio_now();

    let mut conn = state
        .get_conn()
        .await
        .map_err(|e| code_err(CodeError::POOL_ERROR, e))?;

    let post: PostWithAuthor = posts::table
        .inner_join(users::table.on(users::user_id.eq(posts::user_id)))
        .filter(posts::post_id.eq(post_id))
        .select((
            posts::post_id,
            posts::user_id,
            posts::post_title,
            posts::post_subtitle,
            posts::post_body,
            posts::post_image_url,
            posts::post_date,
            posts::post_created_at,
            users::user_name,
        ))
        .first(&mut conn)
        .await
        .map_err(|e| match e {
            diesel::result::Error::NotFound => code_err(CodeError::POST_NOT_FOUND, e),
            _ => code_err(CodeError::DB_QUERY_ERROR, e),
        })?;

    let post_comments: Vec<CommentWithAuthor> = comments::table
        .inner_join(users::table.on(users::user_id.eq(comments::user_id)))
        .filter(comments::post_id.eq(post_id))
        .select((
            comments::comment_id,
            comments::post_id,
            comments::user_id,
            comments::comment_content,
            comments::comment_created_at,
            users::user_name,
        ))
        .order(comments::comment_created_at.asc())
        .load(&mut conn)
        .await
        .map_err(|e| code_err(CodeError::DB_QUERY_ERROR, e))?;

    drop(conn);

    Ok(http_resp(
        ReadPostResponse {
            post,
            comments: post_comments,
        },
        (),
        start,
    ))
}
