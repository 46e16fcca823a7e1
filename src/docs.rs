//! OpenAPI documentation registration for Swagger UI.
//!
//! Important: Utoipa only exposes operations you list in `#[openapi(paths(...))]`.
//! Handler functions still need their own `#[utoipa::path(...)]` attributes.

use utoipa::OpenApi;

// ---- handlers (for `paths(...)`) ----
use crate::handlers::{
    auth::{login, signup},
    blog::{
        delete_comment, delete_post, get_posts, read_post, submit_comment, submit_post,
        update_post,
    },
    contact::send_contact_message,
    server::healthcheck,
};

// ---- schemas (for `components(schemas(...))`) ----
use crate::domain::blog::blog::{Comment, CommentWithAuthor, Post, PostWithAuthor};
use crate::dto::{
    requests::{
        auth::{login_request::LoginRequest, signup_request::SignupRequest},
        blog::{
            submit_comment_request::SubmitCommentRequest,
            submit_post_request::SubmitPostRequest, update_post_request::UpdatePostRequest,
        },
        contact::contact_request::ContactRequest,
    },
    responses::{
        auth::{login_response::LoginResponse, signup_response::SignupResponse},
        blog::{
            delete_comment_response::DeleteCommentResponse,
            delete_post_response::DeletePostResponse, get_posts_response::GetPostsResponse,
            read_post_response::ReadPostResponse, submit_comment_response::SubmitCommentResponse,
            submit_post_response::SubmitPostResponse,
        },
        contact::contact_response::ContactResponse,
    },
};
use crate::errors::code_error::CodeErrorResp;
use crate::handlers::server::healthcheck::ServerHealthcheckResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        healthcheck::healthcheck,
        signup::signup_handler,
        login::login,
        get_posts::get_posts,
        read_post::read_post,
        submit_post::submit_post,
        update_post::update_post,
        delete_post::delete_post,
        submit_comment::submit_comment,
        delete_comment::delete_comment,
        send_contact_message::send_contact_message,
    ),
    components(schemas(
        Post,
        Comment,
        PostWithAuthor,
        CommentWithAuthor,
        SignupRequest,
        LoginRequest,
        SubmitPostRequest,
        UpdatePostRequest,
        SubmitCommentRequest,
        ContactRequest,
        SignupResponse,
        LoginResponse,
        GetPostsResponse,
        ReadPostResponse,
        SubmitPostResponse,
        DeletePostResponse,
        SubmitCommentResponse,
        DeleteCommentResponse,
        ContactResponse,
        ServerHealthcheckResponse,
        CodeErrorResp,
    )),
    tags(
        (name = "auth", description = "Registration, login and logout"),
        (name = "blog", description = "Posts and comments"),
        (name = "contact", description = "Contact form"),
        (name = "server", description = "Server health and build info"),
    )
)]
pub struct ApiDoc;
