use serde_derive::Serialize;
use utoipa::ToSchema;

use crate::domain::blog::blog::PostWithAuthor;

#[derive(Serialize, ToSchema)]
pub struct GetPostsResponse {
    pub posts: Vec<PostWithAuthor>,
}
