use serde_derive::Deserialize;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct SubmitPostRequest {
    pub post_title: String,
    pub post_subtitle: String,
    pub post_body: String,
    pub post_image_url: String,
}
