use serde_derive::Deserialize;
use utoipa::ToSchema;

/// Full replace of a post's mutable fields. There is no partial edit; the
/// edit form always round-trips every field.
#[derive(Deserialize, ToSchema)]
pub struct UpdatePostRequest {
    pub post_title: String,
    pub post_subtitle: String,
    pub post_body: String,
    pub post_image_url: String,
}
