use super::role::UserRole;

/// Actions subject to the access-control matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CreatePost,
    EditPost,
    DeletePost,
    CreateComment,
    DeleteComment,
    AssignRoleAtRegistration,
}

/// Pure authorization decision. `actor_role` is None for users without a
/// role; anonymous actors never reach this function with a role either way.
///
/// Callers translate a `false` into FORBIDDEN for authenticated actors; the
/// anonymous case is rejected earlier with LOGIN_REQUIRED.
pub fn can(actor_role: Option<UserRole>, action: Action) -> bool {
    match action {
        Action::CreatePost | Action::EditPost | Action::DeletePost | Action::DeleteComment => {
            matches!(actor_role, Some(UserRole::Admin) | Some(UserRole::SubAdmin))
        }
        // Any authenticated account may comment, role or no role.
        Action::CreateComment => true,
        Action::AssignRoleAtRegistration => matches!(actor_role, Some(UserRole::Admin)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRIVILEGED_ACTIONS: [Action; 4] = [
        Action::CreatePost,
        Action::EditPost,
        Action::DeletePost,
        Action::DeleteComment,
    ];

    #[test]
    fn admin_and_sub_admin_hold_all_content_privileges() {
        for action in PRIVILEGED_ACTIONS {
            assert!(can(Some(UserRole::Admin), action));
            assert!(can(Some(UserRole::SubAdmin), action));
        }
    }

    #[test]
    fn plain_users_and_roleless_accounts_are_denied_content_privileges() {
        for action in PRIVILEGED_ACTIONS {
            assert!(!can(Some(UserRole::User), action));
            assert!(!can(None, action));
        }
    }

    #[test]
    fn any_authenticated_account_may_comment() {
        assert!(can(Some(UserRole::Admin), Action::CreateComment));
        assert!(can(Some(UserRole::SubAdmin), Action::CreateComment));
        assert!(can(Some(UserRole::User), Action::CreateComment));
        assert!(can(None, Action::CreateComment));
    }

    #[test]
    fn only_admin_assigns_roles_at_registration() {
        assert!(can(Some(UserRole::Admin), Action::AssignRoleAtRegistration));
        assert!(!can(Some(UserRole::SubAdmin), Action::AssignRoleAtRegistration));
        assert!(!can(Some(UserRole::User), Action::AssignRoleAtRegistration));
        assert!(!can(None, Action::AssignRoleAtRegistration));
    }
}
