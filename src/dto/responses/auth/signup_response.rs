use serde_derive::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, ToSchema)]
pub struct SignupResponse {
    pub user_id: Uuid,
    pub user_email: String,
    pub user_name: String,
    pub user_role: Option<String>,
    /// True when the signup was self-service and a session was established.
    pub logged_in: bool,
}
