use std::sync::Arc;

use axum::{extract::State, response::IntoResponse};
use diesel::{ExpressionMethods, JoinOnDsl, QueryDsl};
use diesel_async::RunQueryDsl;

use crate::{
    domain::blog::blog::PostWithAuthor,
    dto::responses::{blog::get_posts_response::GetPostsResponse, response_data::http_resp},
    errors::code_error::{CodeError, CodeErrorResp, HandlerResponse, code_err},
    init::state::ServerState,
    schema::{posts, users},
    util::time::now::tokio_now,
};

#[utoipa::path(
    get,
    path = "/api/blog/posts",
    tag = "blog",
    responses(
        (status = 200, description = "All posts, newest first", body = GetPostsResponse),
        (status = 500, description = "Internal server error", body = CodeErrorResp)
    )
)]
pub async fn get_posts(
    State(state): State<Arc<ServerState>>,
) -> HandlerResponse<impl IntoResponse> {
    let start = tokio_now();

    let mut conn = state
        .get_conn()
        .await
        .map_err(|e| code_err(CodeError::POOL_ERROR, e))?;

    let posts_with_authors: Vec<PostWithAuthor> = posts::table
        .inner_join(users::table.on(users::user_id.eq(posts::user_id)))
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
        .order(posts::post_created_at.desc())
        .load(&mut conn)
        .await
        .map_err(|e| code_err(CodeError::DB_QUERY_ERROR, e))?;

    drop(conn);

    Ok(http_resp(
        GetPostsResponse {
            posts: posts_with_authors,
        },
        (),
        start,
    ))
}
