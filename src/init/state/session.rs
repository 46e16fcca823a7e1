use chrono::Utc;
use uuid::Uuid;

pub const DEFAULT_SESSION_DURATION: chrono::Duration = chrono::Duration::hours(1);

#[derive(Debug, Clone, serde_derive::Serialize, serde_derive::Deserialize)]
pub struct Session {
    pub session_id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub created_at: chrono::DateTime<Utc>,
    pub expires_at: chrono::DateTime<Utc>,
}

impl Session {
    pub fn is_unexpired(&self) -> bool {
        let now = Utc::now();

        self.created_at < now && self.expires_at > now
    }

    pub fn get_user_id(&self) -> Uuid {
        self.user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with_expiry(expires_at: chrono::DateTime<Utc>) -> Session {
        Session {
            session_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            user_name: "Ann".to_string(),
            created_at: Utc::now() - chrono::Duration::seconds(1),
            expires_at,
        }
    }

    #[test]
    fn fresh_session_is_unexpired() {
        let session = session_with_expiry(Utc::now() + DEFAULT_SESSION_DURATION);
        assert!(session.is_unexpired());
    }

    #[test]
    fn past_expiry_means_expired() {
        let session = session_with_expiry(Utc::now() - chrono::Duration::seconds(5));
        assert!(!session.is_unexpired());
    }
}
