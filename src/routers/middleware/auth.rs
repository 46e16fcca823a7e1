use std::{str::FromStr, sync::Arc};

use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::IntoResponse,
};
use axum_extra::extract::CookieJar;
use uuid::Uuid;

use crate::{
    errors::code_error::{CodeError, HandlerResponse, code_err},
    init::state::ServerState,
};

/// Gate for routes that require an authenticated actor. Rejection here is
/// the AuthenticationRequired signal (401); role checks happen later in the
/// handlers and produce 403 instead.
pub async fn auth_middleware(
    State(state): State<Arc<ServerState>>,
    cookie_jar: CookieJar,
    request: Request<Body>,
    next: Next,
) -> HandlerResponse<impl IntoResponse> {
    let session_id = match cookie_jar.get("session_id") {
        Some(session_cookie) => match Uuid::from_str(session_cookie.value()) {
            Ok(session_id) => session_id,
            Err(e) => return Err(code_err(CodeError::LOGIN_REQUIRED, e)),
        },
        None => return Err(CodeError::LOGIN_REQUIRED.into()),
    };

    let session = match state.get_session(&session_id).await {
        Ok(session) => session,
        Err(e) => return Err(code_err(CodeError::LOGIN_REQUIRED, e)),
    };

    if !session.is_unexpired() {
        return Err(CodeError::LOGIN_REQUIRED.into());
    }

    let response = next.run(request).await;

    Ok(response)
}
