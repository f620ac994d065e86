use secrecy::{ExposeSecret, SecretString};

use crate::{id::DbId, uac::Permissions};

#[derive(serde::Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListReqArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

/// A new account including every permission flag it starts with
#[derive(Debug, serde::Deserialize, Clone)]
pub struct NewUserReqArgs {
    pub username: String,
    pub password: SecretString,
    pub real_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub permissions: Permissions,
}

impl NewUserReqArgs {
    /// The backend expects the permission flags alongside the account fields
    pub fn to_json(&self) -> serde_json::Value {
        let mut result = serde_json::json!({
            "username": self.username,
            "password": self.password.expose_secret(),
            "realName": self.real_name,
            "email": self.email,
            "phone": self.phone,
        });
        if let (Some(body), Ok(serde_json::Value::Object(flags))) = (
            result.as_object_mut(),
            serde_json::to_value(&self.permissions),
        ) {
            body.extend(flags);
        }
        result
    }
}

/// Basic account information. Permissions and password have their own
/// endpoints
#[derive(serde::Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReqArgs {
    #[serde(skip)]
    pub id: DbId,
    pub real_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: Option<i32>,
}

#[derive(Debug, serde::Deserialize, Clone)]
pub struct PasswordResetReqArgs {
    pub id: DbId,
    pub new_password: SecretString,
}

impl PasswordResetReqArgs {
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "password": self.new_password.expose_secret() })
    }
}
