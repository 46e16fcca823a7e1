use serde_derive::Serialize;

#[derive(Serialize)]
pub struct ResponseMeta<M: serde::Serialize> {
    time_taken: String,
    timestamp: chrono::DateTime<chrono::Utc>,
    meta: M,
}

impl<M: serde::Serialize> ResponseMeta<M> {
    pub fn from(start: tokio::time::Instant, meta: M) -> Self {
        ResponseMeta {
            time_taken: format!("{:?}", start.elapsed()),
            timestamp: chrono::Utc::now(),
            meta,
        }
    }
}
