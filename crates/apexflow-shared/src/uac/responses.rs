use super::UserInfo;
use crate::token::AuthToken;

/// Data returned by a successful login
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct LoginResponse {
    pub token: AuthToken,
    pub user: UserInfo,
}
