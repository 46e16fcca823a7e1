use serde_derive::Deserialize;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct SubmitCommentRequest {
    pub comment_content: String,
}
