use serde_derive::Serialize;
use utoipa::ToSchema;

use crate::domain::blog::blog::{CommentWithAuthor, PostWithAuthor};

#[derive(Serialize, ToSchema)]
pub struct ReadPostResponse {
    pub post: PostWithAuthor,
    pub comments: Vec<CommentWithAuthor>,
}
