use std::sync::Arc;

use axum::{Extension, Json, extract::State, response::IntoResponse};
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::{
    domain::{
        auth::policy::{Action, can},
        blog::blog::{NewPost, Post},
    },
    dto::{
        requests::blog::submit_post_request::SubmitPostRequest,
        responses::{blog::submit_post_response::SubmitPostResponse, response_data::http_resp},
    },
    errors::code_error::{CodeError, CodeErrorResp, HandlerResponse, code_err},
    init::state::ServerState,
    routers::middleware::is_logged_in::AuthStatus,
    schema::posts,
    util::{auth::actor_role::actor_role, time::now::{long_form_date, tokio_now}},
};

#[utoipa::path(
    post,
    path = "/api/blog/posts",
    tag = "blog",
    request_body = SubmitPostRequest,
    responses(
        (status = 200, description = "Post created", body = SubmitPostResponse),
        (status = 401, description = "Not logged in", body = CodeErrorResp),
        (status = 403, description = "Actor lacks the required role", body = CodeErrorResp),
        (status = 409, description = "Post title already taken", body = CodeErrorResp),
        (status = 500, description = "Internal server error", body = CodeErrorResp)
    )
)]
pub async fn submit_post(
    Extension(is_logged_in): Extension<AuthStatus>,
    State(state): State<Arc<ServerState>>,
    Json(request): Json<SubmitPostRequest>,
) -> HandlerResponse<impl IntoResponse> {
    let start = tokio_now();

    let actor_id: Uuid = match is_logged_in {
        AuthStatus::LoggedIn(id) => id,
        AuthStatus::LoggedOut => return Err(CodeError::LOGIN_REQUIRED.into()),
    };

    let role = actor_role(state.clone(), actor_id)
        .await
        .map_err(|e| code_err(CodeError::DB_QUERY_ERROR, e))?;

    if !can(role, Action::CreatePost) {
        return Err(code_err(
            CodeError::FORBIDDEN,
            "User is not authorized to create posts",
        ));
    }

    let post_date = long_form_date(chrono::Local::now().date_naive());

    let mut conn = state
        .get_conn()
        .await
        .map_err(|e| code_err(CodeError::POOL_ERROR, e))?;

    let new_post = NewPost::new(
        &actor_id,
        &request.post_title,
        &request.post_subtitle,
        &request.post_body,
        &request.post_image_url,
        &post_date,
    );

    let post: Post = diesel::insert_into(posts::table)
        .values(new_post)
        .returning(posts::all_columns)
        .get_result(&mut conn)
        .await
        .map_err(|e| match e {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                _,
            ) => code_err(CodeError::POST_TITLE_NOT_UNIQUE, e),
            _ => code_err(CodeError::DB_INSERTION_ERROR, e),
        })?;

    drop(conn);

    tracing::info!(post_id = %post.post_id, author_id = %post.user_id, "Post created");

    Ok(http_resp(
        SubmitPostResponse {
            post_id: post.post_id,
            user_id: post.user_id,
            post_title: post.post_title,
            post_date: post.post_date,
            post_created_at: post.post_created_at,
        },
        (),
        start,
    ))
}
