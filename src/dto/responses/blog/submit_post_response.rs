use chrono::{DateTime, Utc};
use serde_derive::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, ToSchema)]
pub struct SubmitPostResponse {
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub post_title: String,
    pub post_date: String,
    pub post_created_at: DateTime<Utc>,
}
