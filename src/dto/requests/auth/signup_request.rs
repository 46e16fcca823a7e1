use utoipa::ToSchema;
use zeroize::{Zeroize, ZeroizeOnDrop};

#[derive(serde_derive::Deserialize, Zeroize, ZeroizeOnDrop, ToSchema)]
pub struct SignupRequest {
    pub user_email: String,
    pub user_name: String,
    pub user_password: String,
    /// Honored only when the requester is an authenticated Admin.
    pub user_role: Option<String>,
}
