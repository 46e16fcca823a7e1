use chrono::{DateTime, Utc};
use diesel::{Queryable, QueryableByName, prelude::Insertable};
use serde_derive::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::schema::{comments, posts};

#[derive(Serialize, Deserialize, QueryableByName, Queryable, Clone, ToSchema)]
pub struct Post {
    #[diesel(sql_type = diesel::sql_types::Uuid)]
    pub post_id: Uuid,
    #[diesel(sql_type = diesel::sql_types::Uuid)]
    pub user_id: Uuid,
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub post_title: String,
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub post_subtitle: String,
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub post_body: String,
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub post_image_url: String,
    #[diesel(sql_type = diesel::sql_types::Varchar)]
    pub post_date: String,
    #[diesel(sql_type = diesel::sql_types::Timestamptz)]
    pub post_created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = posts)]
pub struct NewPost<'np> {
    user_id: &'np Uuid,
    post_title: &'np str,
    post_subtitle: &'np str,
    post_body: &'np str,
    post_image_url: &'np str,
    post_date: &'np str,
}

impl<'np> NewPost<'np> {
    pub fn new(
        user_id: &'np Uuid,
        post_title: &'np str,
        post_subtitle: &'np str,
        post_body: &'np str,
        post_image_url: &'np str,
        post_date: &'np str,
    ) -> Self {
        Self {
            user_id,
            post_title,
            post_subtitle,
            post_body,
            post_image_url,
            post_date,
        }
    }
}

#[derive(Serialize, Deserialize, QueryableByName, Queryable, Clone, ToSchema)]
pub struct Comment {
    #[diesel(sql_type = diesel::sql_types::Uuid)]
    pub comment_id: Uuid,
    #[diesel(sql_type = diesel::sql_types::Uuid)]
    pub post_id: Uuid,
    #[diesel(sql_type = diesel::sql_types::Uuid)]
    pub user_id: Uuid,
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub comment_content: String,
    #[diesel(sql_type = diesel::sql_types::Timestamptz)]
    pub comment_created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = comments)]
pub struct NewComment<'nc> {
    post_id: &'nc Uuid,
    user_id: &'nc Uuid,
    comment_content: &'nc str,
}

impl<'nc> NewComment<'nc> {
    pub fn new(post_id: &'nc Uuid, user_id: &'nc Uuid, comment_content: &'nc str) -> Self {
        Self {
            post_id,
            user_id,
            comment_content,
        }
    }
}

/// Comment joined with its commenter's display name, as shown on a post page.
#[derive(Serialize, Queryable, ToSchema)]
pub struct CommentWithAuthor {
    pub comment_id: Uuid,
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub comment_content: String,
    pub comment_created_at: DateTime<Utc>,
    pub commenter_name: String,
}

/// Post joined with its author's display name, for list and read views.
#[derive(Serialize, Queryable, ToSchema)]
pub struct PostWithAuthor {
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub post_title: String,
    pub post_subtitle: String,
    pub post_body: String,
    pub post_image_url: String,
    pub post_date: String,
    pub post_created_at: DateTime<Utc>,
    pub author_name: String,
}
