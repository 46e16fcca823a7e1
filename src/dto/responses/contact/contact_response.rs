use serde_derive::Serialize;
use utoipa::ToSchema;

/// The requester is always told the message was accepted; delivery happens
/// out of band and its failure is an operator concern, not a requester one.
#[derive(Serialize, ToSchema)]
pub struct ContactResponse {
    pub message_accepted: bool,
}
