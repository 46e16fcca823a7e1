use serde_derive::{Deserialize, Serialize};

/// Closed role set as stored in `users.user_role`. The column is nullable;
/// a NULL role carries no privileges at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Admin,
    SubAdmin,
    User,
}

const ROLE_ADMIN: &str = "Admin";
const ROLE_SUB_ADMIN: &str = "Sub_admin";
const ROLE_USER: &str = "User";

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => ROLE_ADMIN,
            UserRole::SubAdmin => ROLE_SUB_ADMIN,
            UserRole::User => ROLE_USER,
        }
    }

    /// Maps a stored role string onto the closed set. Unknown strings are
    /// treated as no role rather than failing the whole request; the column
    /// was free-text once and old rows may carry anything.
    pub fn from_db(role: Option<&str>) -> Option<Self> {
        match role {
            Some(ROLE_ADMIN) => Some(UserRole::Admin),
            Some(ROLE_SUB_ADMIN) => Some(UserRole::SubAdmin),
            Some(ROLE_USER) => Some(UserRole::User),
            _ => None,
        }
    }

}

/// Role actually granted to a new registrant. Only an authenticated Admin
/// may hand out arbitrary roles; everyone else produces a plain User.
pub fn granted_role(actor_role: Option<UserRole>, requested: Option<UserRole>) -> UserRole {
    match actor_role {
        Some(UserRole::Admin) => requested.unwrap_or(UserRole::User),
        _ => UserRole::User,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_strings_round_trip() {
        for role in [UserRole::Admin, UserRole::SubAdmin, UserRole::User] {
            assert_eq!(UserRole::from_db(Some(role.as_str())), Some(role));
        }
    }

    #[test]
    fn unknown_or_null_role_maps_to_none() {
        assert_eq!(UserRole::from_db(None), None);
        assert_eq!(UserRole::from_db(Some("")), None);
        assert_eq!(UserRole::from_db(Some("admin")), None);
        assert_eq!(UserRole::from_db(Some("Owner")), None);
    }

    #[test]
    fn only_admin_actor_assigns_requested_role() {
        assert_eq!(
            granted_role(Some(UserRole::Admin), Some(UserRole::SubAdmin)),
            UserRole::SubAdmin
        );
        assert_eq!(granted_role(Some(UserRole::Admin), None), UserRole::User);
        assert_eq!(
            granted_role(Some(UserRole::SubAdmin), Some(UserRole::Admin)),
            UserRole::User
        );
        assert_eq!(
            granted_role(Some(UserRole::User), Some(UserRole::Admin)),
            UserRole::User
        );
        assert_eq!(granted_role(None, Some(UserRole::Admin)), UserRole::User);
    }
}
