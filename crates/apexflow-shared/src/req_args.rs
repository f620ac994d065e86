//! This module stores the expected format of the arguments for the requests
//! The structure of the module is supposed to match the path of the endpoints.
//! For example `/admin/users/{id}/password` maps to
//! [`api::admin::user::PasswordResetReqArgs`]. Some structs are not
//! serializable (they hold secrets) but are still included here to know what
//! needs to be sent

use secrecy::{ExposeSecret, SecretString};
use std::fmt::Debug;

pub mod api;

#[derive(serde::Deserialize, Clone)]
pub struct LoginReqArgs {
    pub username: String,
    pub password: SecretString,
}

impl LoginReqArgs {
    pub fn new<S: Into<String>>(username: S, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }

    pub fn username(mut self, username: String) -> Self {
        self.username = username;
        self
    }

    pub fn password(mut self, password: SecretString) -> Self {
        self.password = password;
        self
    }

    /// Body to send, the only place the password is exposed
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "username": self.username,
            "password": self.password.expose_secret(),
        })
    }
}

impl Debug for LoginReqArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginReqArgs")
            .field("username", &self.username)
            .field("has_password", &!self.password.expose_secret().is_empty())
            .finish()
    }
}
