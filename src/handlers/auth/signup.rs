use std::sync::Arc;

use axum::{Extension, Json, extract::State, response::IntoResponse};
use axum_extra::extract::cookie::Cookie;
use zeroize::Zeroize;

use crate::{
    domain::auth::{
        role::{UserRole, granted_role},
        user::User,
    },
    dto::{
        requests::auth::signup_request::SignupRequest,
        responses::{
            auth::signup_response::SignupResponse,
            response_data::{http_resp, http_resp_with_cookies},
        },
    },
    errors::code_error::{CodeError, CodeErrorResp, HandlerResponse, code_err},
    init::state::ServerState,
    routers::middleware::is_logged_in::AuthStatus,
    util::{
        auth::{actor_role::actor_role, ensure_first_admin::ensure_first_user_admin},
        crypto::hash_pw::hash_pw,
        string::validations::{title_case, validate_password_form, validate_username},
        time::now::tokio_now,
    },
};

/// Registration. Self-service signups get role User and are logged straight
/// in; an authenticated Admin may register someone else under any role and
/// keeps their own session untouched.
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = "auth",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "User successfully registered", body = SignupResponse),
        (status = 400, description = "Invalid input", body = CodeErrorResp),
        (status = 409, description = "Email already registered", body = CodeErrorResp),
        (status = 500, description = "Internal server error", body = CodeErrorResp)
    )
)]
pub async fn signup_handler(
    Extension(is_logged_in): Extension<AuthStatus>,
    State(state): State<Arc<ServerState>>,
    Json(mut request): Json<SignupRequest>,
) -> HandlerResponse<impl IntoResponse> {
    let start = tokio_now();

    if !validate_username(&request.user_name) {
        return Err(CodeError::USER_NAME_INVALID.into());
    }

    if !validate_password_form(&request.user_password) {
        return Err(CodeError::PASSWORD_INVALID.into());
    }

    if !email_address::EmailAddress::is_valid(&request.user_email) {
        return Err(CodeError::EMAIL_INVALID.into());
    };

    // Re-assert the first-user-Admin invariant before any role decision.
    ensure_first_user_admin(&state)
        .await
        .map_err(|e| code_err(CodeError::DB_QUERY_ERROR, e))?;

    let acting_role: Option<UserRole> = match is_logged_in {
        AuthStatus::LoggedIn(user_id) => actor_role(state.clone(), user_id)
            .await
            .map_err(|e| code_err(CodeError::DB_QUERY_ERROR, e))?,
        AuthStatus::LoggedOut => None,
    };
    let actor_is_admin = acting_role == Some(UserRole::Admin);

    let requested_role = UserRole::from_db(request.user_role.as_deref());
    let new_user_role = granted_role(acting_role, requested_role);

    let password_hash = hash_pw(request.user_password.clone())
        .await
        .map_err(|e| code_err(CodeError::COULD_NOT_HASH_PW, e))?;

    let user_name = title_case(&request.user_name);

    let email_taken = if actor_is_admin {
        CodeError::EMAIL_TAKEN_PICK_ANOTHER
    } else {
        CodeError::EMAIL_TAKEN_LOGIN_INSTEAD
    };

    let mut conn = state
        .get_conn()
        .await
        .map_err(|e| code_err(CodeError::POOL_ERROR, e))?;

    let new_user: User = User::insert_one(
        &mut conn,
        &request.user_email,
        &user_name,
        &password_hash,
        new_user_role,
        email_taken,
    )
    .await?;

    drop(conn);

    // Do not leave the password alive in RAM.
    request.zeroize();

    let response_data = SignupResponse {
        user_id: new_user.user_id,
        user_email: new_user.user_email.clone(),
        user_name: new_user.user_name.clone(),
        user_role: new_user.user_role.clone(),
        logged_in: matches!(is_logged_in, AuthStatus::LoggedOut),
    };

    // Only self-service signups establish a session; an Admin registering
    // someone else stays logged in as themselves.
    match is_logged_in {
        AuthStatus::LoggedOut => {
            let session_id = state
                .new_session(&new_user, None)
                .await
                .map_err(|e| code_err(CodeError::SESSION_ID_ALREADY_EXISTS, e))?;

            let cookie = Cookie::build(("session_id", session_id.to_string()))
                .path("/")
                .http_only(true)
                .secure(true)
                .same_site(axum_extra::extract::cookie::SameSite::Strict)
                .build();

            Ok(http_resp_with_cookies(response_data, (), start, Some(vec![cookie]), None)
                .into_response())
        }
        AuthStatus::LoggedIn(_) => Ok(http_resp(response_data, (), start).into_response()),
    }
}
