use serde_aux::field_attributes::deserialize_default_from_null;

use crate::id::DbId;

pub const DISPLAY_NAME_NOT_LOGGED_IN: &str = "Not Logged In";
pub const DISPLAY_NAME_FALLBACK: &str = "User";

/// The authenticated principal. Any extra fields the backend sends along are
/// ignored
#[derive(Debug, Default, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_default_from_null")]
    pub is_guest: bool,
}

impl UserInfo {
    pub fn new<S: Into<String>>(username: S) -> Self {
        Self {
            username: Some(username.into()),
            ..Default::default()
        }
    }

    /// Identity used for sessions that have a token but were not created by
    /// logging in with credentials
    pub fn guest() -> Self {
        Self {
            is_guest: true,
            ..Default::default()
        }
    }

    pub fn real_name(mut self, real_name: Option<String>) -> Self {
        self.real_name = real_name;
        self
    }

    pub fn id(mut self, id: Option<DbId>) -> Self {
        self.id = id;
        self
    }

    /// Prefers the real name, then the username. Blank values are skipped
    pub fn display_name(&self) -> &str {
        [&self.real_name, &self.username]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|x| !x.trim().is_empty())
            .unwrap_or(DISPLAY_NAME_FALLBACK)
    }
}
