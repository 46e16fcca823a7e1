use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::{delete, get, patch, post},
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    docs::ApiDoc,
    handlers::{
        auth::{login::login, logout::logout, signup::signup_handler},
        blog::{
            delete_comment::delete_comment, delete_post::delete_post, get_posts::get_posts,
            read_post::read_post, submit_comment::submit_comment, submit_post::submit_post,
            update_post::update_post,
        },
        contact::send_contact_message::send_contact_message,
        fallback::fallback_handler,
        server::healthcheck::healthcheck,
    },
    init::state::ServerState,
};

use super::middleware::{
    auth::auth_middleware, is_logged_in::is_logged_in_middleware, logging::log_middleware,
};

const MAX_REQUEST_SIZE: usize = 1024 * 1024; // 1MB; rich text only, no uploads

pub fn build_router(state: Arc<ServerState>) -> axum::Router {
    let auth_middleware = from_fn_with_state(state.clone(), auth_middleware);
    let log_middleware = from_fn_with_state(state.clone(), log_middleware);
    let is_logged_in_middleware = from_fn_with_state(state.clone(), is_logged_in_middleware);
    let compression_middleware = CompressionLayer::new().gzip(true);
    let cors_layer = CorsLayer::very_permissive();

    // Publicly accessible API routes
    let public_router = Router::new()
        .route("/api/healthcheck/server", get(healthcheck))
        .route("/api/auth/signup", post(signup_handler))
        .route("/api/auth/login", post(login))
        .route("/api/blog/posts", get(get_posts))
        .route("/api/blog/posts/{post_id}", get(read_post))
        .route("/api/contact", post(send_contact_message));

    // API routes requiring authentication; role checks live in the handlers
    let protected_router = Router::new()
        .route("/api/auth/logout", post(logout))
        .route("/api/blog/posts", post(submit_post))
        .route("/api/blog/posts/{post_id}", patch(update_post))
        .route("/api/blog/posts/{post_id}", delete(delete_post))
        .route("/api/blog/posts/{post_id}/comment", post(submit_comment))
        .route("/api/blog/comments/{comment_id}", delete(delete_comment))
        .layer(auth_middleware.clone());

    // Combine all API routes and apply shared middleware
    let api_router = public_router
        .merge(protected_router)
        .layer(is_logged_in_middleware)
        .layer(compression_middleware)
        .layer(log_middleware)
        .layer(DefaultBodyLimit::max(MAX_REQUEST_SIZE))
        .layer(cors_layer)
        .with_state(state.clone());

    Router::new()
        .merge(api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(fallback_handler)
}
