//! The session store: in memory [`SessionState`] kept equal to its persisted
//! copy after every change

use anyhow::Context as _;
use apexflow_shared::{
    const_config::storage::{
        STORAGE_ALL_KEYS, STORAGE_KEY_PERMISSIONS, STORAGE_KEY_TOKEN, STORAGE_KEY_USER_INFO,
    },
    log_err_as_warn,
    session::SessionState,
    token::AuthToken,
    uac::{Permission, Permissions, UserInfo},
};
use tracing::{info, warn};

use crate::storage::{KeyValueStorage, MemoryStorage, StorageError};

#[derive(Debug)]
pub struct SessionStore {
    state: SessionState,
    storage: Box<dyn KeyValueStorage>,
}

impl SessionStore {
    /// Hydrates from `storage`. Whatever subset of the keys is present is
    /// loaded. If anything stored cannot be read or parsed all keys are
    /// discarded and the store starts logged out.
    #[tracing::instrument(name = "HYDRATE SESSION")]
    pub fn new<S: KeyValueStorage + 'static>(storage: S) -> Self {
        let mut storage: Box<dyn KeyValueStorage> = Box::new(storage);
        let state = match read_snapshot(storage.as_ref()) {
            Ok(state) => state,
            Err(e) => {
                warn!("discarding stored session: {e:#}");
                clear_storage(storage.as_mut());
                SessionState::default()
            }
        };
        info!(is_logged_in = state.is_logged_in(), "session hydrated");
        Self { state, storage }
    }

    /// A store that forgets everything when dropped
    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new())
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Replaces identity and permissions as one step. On failure neither the
    /// in memory state nor (as far as storage allows) the stored values change
    #[tracing::instrument(skip(self))]
    pub fn set_session(
        &mut self,
        user_info: UserInfo,
        permissions: Permissions,
    ) -> Result<(), StorageError> {
        let user_json = to_json(STORAGE_KEY_USER_INFO, &user_info)?;
        let permissions_json = to_json(STORAGE_KEY_PERMISSIONS, &permissions)?;
        self.storage.set(STORAGE_KEY_USER_INFO, &user_json)?;
        if let Err(e) = self.storage.set(STORAGE_KEY_PERMISSIONS, &permissions_json) {
            let previous = self.state.user_info().cloned();
            self.restore(STORAGE_KEY_USER_INFO, previous.as_ref());
            return Err(e);
        }
        self.state = std::mem::take(&mut self.state).with_session(user_info, permissions);
        Ok(())
    }

    /// Stores the token on its own, the identity may not be known yet
    #[tracing::instrument(skip(self, token))]
    pub fn set_token(&mut self, token: AuthToken) -> Result<(), StorageError> {
        self.storage.set(STORAGE_KEY_TOKEN, token.as_str())?;
        self.state = std::mem::take(&mut self.state).with_token(token);
        Ok(())
    }

    /// Replaces only the identity (after a profile update)
    #[tracing::instrument(skip(self))]
    pub fn set_user_info(&mut self, user_info: UserInfo) -> Result<(), StorageError> {
        let json = to_json(STORAGE_KEY_USER_INFO, &user_info)?;
        self.storage.set(STORAGE_KEY_USER_INFO, &json)?;
        self.state = std::mem::take(&mut self.state).with_user_info(user_info);
        Ok(())
    }

    /// Replaces only the permissions (after they were changed by an
    /// administrator)
    #[tracing::instrument(skip(self))]
    pub fn set_permissions(&mut self, permissions: Permissions) -> Result<(), StorageError> {
        let json = to_json(STORAGE_KEY_PERMISSIONS, &permissions)?;
        self.storage.set(STORAGE_KEY_PERMISSIONS, &json)?;
        self.state = std::mem::take(&mut self.state).with_permissions(permissions);
        Ok(())
    }

    /// Token plus a guest identity with no permissions
    #[tracing::instrument(skip(self, token))]
    pub fn begin_guest_session(&mut self, token: AuthToken) -> Result<(), StorageError> {
        self.set_token(token)?;
        self.set_session(UserInfo::guest(), Permissions::default())
    }

    /// Clears memory and storage. Safe to call when already logged out
    #[tracing::instrument(skip(self))]
    pub fn logout(&mut self) {
        self.state = SessionState::cleared();
        clear_storage(self.storage.as_mut());
    }

    pub fn token(&self) -> Option<&AuthToken> {
        self.state.token()
    }

    pub fn permissions(&self) -> Option<&Permissions> {
        self.state.permissions()
    }

    pub fn user_info(&self) -> Option<&UserInfo> {
        self.state.user_info()
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.is_logged_in()
    }

    pub fn is_guest(&self) -> bool {
        self.state.is_guest()
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        self.state.has_permission(permission)
    }

    pub fn has_permission_named(&self, key: &str) -> bool {
        self.state.has_permission_named(key)
    }

    pub fn is_admin(&self) -> bool {
        self.state.is_admin()
    }

    pub fn can_access(&self, permission: Permission) -> bool {
        self.state.can_access(permission)
    }

    pub fn user_role_text(&self) -> String {
        self.state.user_role_text()
    }

    pub fn display_name(&self) -> &str {
        self.state.display_name()
    }

    fn restore<T: serde::Serialize>(&mut self, key: &str, previous: Option<&T>) {
        let result = match previous.map(|x| to_json(key, x)).transpose() {
            Ok(Some(json)) => self.storage.set(key, &json),
            Ok(None) => self.storage.remove(key),
            Err(e) => Err(e),
        };
        log_err_as_warn!(result);
    }
}

fn to_json<T: serde::Serialize>(key: &str, value: &T) -> Result<String, StorageError> {
    serde_json::to_string(value).map_err(|source| StorageError::Serialize {
        key: key.to_string(),
        source,
    })
}

fn read_snapshot(storage: &dyn KeyValueStorage) -> anyhow::Result<SessionState> {
    let token = storage
        .get(STORAGE_KEY_TOKEN)?
        // An empty token is the same as no token
        .filter(|x| !x.is_empty())
        .map(AuthToken::try_from)
        .transpose()
        .context("stored token is invalid")?;
    let user_info = storage
        .get(STORAGE_KEY_USER_INFO)?
        .map(|x| serde_json::from_str::<UserInfo>(&x))
        .transpose()
        .context("stored user info is corrupt")?;
    let permissions = storage
        .get(STORAGE_KEY_PERMISSIONS)?
        .map(|x| serde_json::from_str::<Permissions>(&x))
        .transpose()
        .context("stored permissions are corrupt")?;
    Ok(SessionState::new(token, user_info, permissions))
}

fn clear_storage(storage: &mut dyn KeyValueStorage) {
    for key in STORAGE_ALL_KEYS {
        log_err_as_warn!(storage.remove(key));
    }
}
