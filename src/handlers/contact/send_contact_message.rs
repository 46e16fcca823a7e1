use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use lettre::AsyncTransport;

use crate::{
    dto::{
        requests::contact::contact_request::ContactRequest,
        responses::{contact::contact_response::ContactResponse, response_data::http_resp},
    },
    errors::code_error::{CodeError, CodeErrorResp, HandlerResponse, code_err},
    init::state::ServerState,
    util::{email::emails::ContactMessageEmail, time::now::tokio_now},
};

/// Fire-and-forget: the mail is sent on a background task and the caller gets
/// an acknowledgement immediately. A send failure is only logged.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Message accepted for delivery", body = ContactResponse),
        (status = 400, description = "Invalid input", body = CodeErrorResp),
        (status = 500, description = "Internal server error", body = CodeErrorResp)
    )
)]
pub async fn send_contact_message(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<ContactRequest>,
) -> HandlerResponse<impl IntoResponse> {
    let start = tokio_now();

    if !email_address::EmailAddress::is_valid(&request.contact_email) {
        return Err(CodeError::EMAIL_INVALID.into());
    };

    let email = ContactMessageEmail::new(
        &request.contact_name,
        &request.contact_email,
        request.contact_phone.as_deref(),
        &request.contact_message,
    );

    let message = email
        .to_message(state.get_contact_recipient())
        .map_err(|e| code_err(CodeError::COULD_NOT_BUILD_EMAIL, e))?;

    let mailer = state.get_email_client().clone();
    tokio::spawn(async move {
        if let Err(e) = mailer.send(message).await {
            tracing::error!(error = %e, "Failed to deliver contact form email");
        }
    });

    Ok(http_resp(
        ContactResponse {
            message_accepted: true,
        },
        (),
        start,
    ))
}
