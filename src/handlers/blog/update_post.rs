use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, State},
    response::IntoResponse,
};
use diesel::{ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::{
    domain::{
        auth::policy::{Action, can},
        blog::blog::Post,
    },
    dto::{
        requests::blog::update_post_request::UpdatePostRequest,
        responses::{blog::submit_post_response::SubmitPostResponse, response_data::http_resp},
    },
    errors::code_error::{CodeError, CodeErrorResp, HandlerResponse, code_err},
    init::state::ServerState,
    routers::middleware::is_logged_in::AuthStatus,
    schema::posts,
    util::{auth::actor_role::actor_role, time::now::tokio_now},
};

/// Full-replace edit. Authorship is deliberately reassigned to whoever
/// edits; the author column doubles as "last editor".
#[utoipa::path(
    patch,
    path = "/api/blog/posts/{post_id}",
    tag = "blog",
    params(("post_id" = Uuid, Path, description = "ID of the post to edit")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Post updated", body = SubmitPostResponse),
        (status = 401, description = "Not logged in", body = CodeErrorResp),
        (status = 403, description = "Actor lacks the required role", body = CodeErrorResp),
        (status = 404, description = "Post not found", body = CodeErrorResp),
        (status = 409, description = "Post title already taken", body = CodeErrorResp),
        (status = 500, description = "Internal server error", body = CodeErrorResp)
    )
)]
pub async fn update_post(
    Extension(is_logged_in): Extension<AuthStatus>,
    State(state): State<Arc<ServerState>>,
    Path(post_id): Path<Uuid>,
    Json(request): Json<UpdatePostRequest>,
) -> HandlerResponse<impl IntoResponse> {
    let start = tokio_now();

    let actor_id: Uuid = match is_logged_in {
        AuthStatus::LoggedIn(id) => id,
        AuthStatus::LoggedOut => return Err(CodeError::LOGIN_REQUIRED.into()),
    };

    let role = actor_role(state.clone(), actor_id)
        .await
        .map_err(|e| code_err(CodeError::DB_QUERY_ERROR, e))?;

    if !can(role, Action::EditPost) {
        return Err(code_err(
            CodeError::FORBIDDEN,
            "User is not authorized to edit posts",
        ));
    }

    let mut conn = state
        .get_conn()
        .await
        .map_err(|e| code_err(CodeError::POOL_ERROR, e))?;

    let post: Post = diesel::update(posts::table.find(post_id))
        .set((
            posts::post_title.eq(&request.post_title),
            posts::post_subtitle.eq(&request.post_subtitle),
            posts::post_body.eq(&request.post_body),
            posts::post_image_url.eq(&request.post_image_url),
            posts::user_id.eq(actor_id),
        ))
        .returning(posts::all_columns)
        .get_result(&mut conn)
        .await
        .map_err(|e| match e {
            diesel::result::Error::NotFound => code_err(CodeError::POST_NOT_FOUND, e),
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                _,
            ) => code_err(CodeError::POST_TITLE_NOT_UNIQUE, e),
            _ => code_err(CodeError::DB_UPDATE_ERROR, e),
        })?;

    drop(conn);

    tracing::info!(post_id = %post.post_id, new_author_id = %actor_id, "Post updated");

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
