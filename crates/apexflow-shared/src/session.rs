//! In memory session state with pure transitions. Persisting it is the job of
//! the client's session store

use crate::{
    token::AuthToken,
    uac::{role_text, Permission, Permissions, UserInfo, DISPLAY_NAME_NOT_LOGGED_IN},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    token: Option<AuthToken>,
    user_info: Option<UserInfo>,
    permissions: Option<Permissions>,
}

impl SessionState {
    pub fn new(
        token: Option<AuthToken>,
        user_info: Option<UserInfo>,
        permissions: Option<Permissions>,
    ) -> Self {
        Self {
            token,
            user_info,
            permissions,
        }
    }

    /// Replaces identity and permissions together, the token is untouched
    #[must_use]
    pub fn with_session(self, user_info: UserInfo, permissions: Permissions) -> Self {
        Self {
            user_info: Some(user_info),
            permissions: Some(permissions),
            ..self
        }
    }

    /// Replaces only the identity, permissions stay as they are (even absent)
    #[must_use]
    pub fn with_user_info(self, user_info: UserInfo) -> Self {
        Self {
            user_info: Some(user_info),
            ..self
        }
    }

    /// Replaces only the permissions, the identity stays as it is (even absent)
    #[must_use]
    pub fn with_permissions(self, permissions: Permissions) -> Self {
        Self {
            permissions: Some(permissions),
            ..self
        }
    }

    #[must_use]
    pub fn with_token(self, token: AuthToken) -> Self {
        Self {
            token: Some(token),
            ..self
        }
    }

    #[must_use]
    pub fn cleared() -> Self {
        Self::default()
    }

    pub fn token(&self) -> Option<&AuthToken> {
        self.token.as_ref()
    }

    pub fn user_info(&self) -> Option<&UserInfo> {
        self.user_info.as_ref()
    }

    pub fn permissions(&self) -> Option<&Permissions> {
        self.permissions.as_ref()
    }

    /// A token on its own (for example a guest token set before the identity
    /// is known) does not count
    pub fn is_logged_in(&self) -> bool {
        self.token.is_some() && self.user_info.is_some()
    }

    pub fn is_guest(&self) -> bool {
        self.user_info.as_ref().is_some_and(|x| x.is_guest)
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions
            .as_ref()
            .is_some_and(|x| x.contains(permission))
    }

    /// Lookup by wire key. Unknown keys are never granted
    pub fn has_permission_named(&self, key: &str) -> bool {
        self.permissions.as_ref().is_some_and(|x| x.contains_key(key))
    }

    pub fn is_admin(&self) -> bool {
        self.has_permission(Permission::Admin)
    }

    /// Access check for a module: admins may access every module
    pub fn can_access(&self, permission: Permission) -> bool {
        self.is_admin() || self.has_permission(permission)
    }

    pub fn user_role_text(&self) -> String {
        role_text(self.user_info.as_ref(), self.permissions.as_ref())
    }

    pub fn display_name(&self) -> &str {
        match &self.user_info {
            Some(user_info) => user_info.display_name(),
            None => DISPLAY_NAME_NOT_LOGGED_IN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Permission as p;

    fn token(value: &str) -> AuthToken {
        value.try_into().unwrap()
    }

    #[test]
    fn token_alone_is_not_logged_in() {
        // Act
        let state = SessionState::default().with_token(token("abc123"));

        // Assert
        assert!(!state.is_logged_in());
        assert_eq!(state.token().unwrap().as_str(), "abc123");
        assert_eq!(state.display_name(), DISPLAY_NAME_NOT_LOGGED_IN);
    }

    #[test]
    fn admin_session() {
        // Act
        let state = SessionState::default()
            .with_token(token("t"))
            .with_session(UserInfo::new("alice"), vec![p::Admin].into());

        // Assert
        assert!(state.is_logged_in());
        assert!(state.is_admin());
        assert!(!state.is_guest());
        assert_eq!(state.user_role_text(), "Administrator");
        assert!(!state.has_permission(p::ManageOrder));
        assert!(state.can_access(p::ManageOrder));
    }

    #[test]
    fn guest_precedence_over_admin() {
        let state = SessionState::default().with_session(UserInfo::guest(), vec![p::Admin].into());
        assert!(state.is_guest());
        assert_eq!(state.user_role_text(), crate::uac::ROLE_TEXT_GUEST);
    }

    #[test]
    fn nothing_loaded_grants_nothing() {
        let state = SessionState::default();
        assert!(!state.has_permission(p::Admin));
        assert!(!state.has_permission_named("isAdmin"));
        assert!(!state.is_admin());
        assert!(!state.can_access(p::ManageReview));
    }

    #[test]
    fn unknown_key_not_granted() {
        let state =
            SessionState::default().with_session(UserInfo::new("x"), vec![p::ManageReview].into());
        assert!(state.has_permission_named("canManageReview"));
        assert!(!state.has_permission_named("canManageEverything"));
    }

    #[test]
    fn with_session_keeps_token() {
        let state = SessionState::default()
            .with_token(token("keep"))
            .with_session(UserInfo::new("x"), Permissions::default());
        assert_eq!(state.token().unwrap().as_str(), "keep");
        assert_eq!(SessionState::cleared(), SessionState::default());
    }
}
