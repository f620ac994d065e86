use std::fmt::Debug;

use crate::errors::ConversionError;

/// Opaque bearer credential. Never empty so a request never carries a blank
/// `Authorization` header
#[derive(serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
#[serde(try_from = "String", into = "String")]
pub struct AuthToken(String);

impl AuthToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header
    pub fn bearer_header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl TryFrom<String> for AuthToken {
    type Error = ConversionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(ConversionError::Empty);
        }
        Ok(Self(value))
    }
}

impl TryFrom<&str> for AuthToken {
    type Error = ConversionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.to_string().try_into()
    }
}

impl From<AuthToken> for String {
    fn from(value: AuthToken) -> Self {
        value.0
    }
}

impl Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AuthToken").field(&"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_token_rejected() {
        assert_eq!(AuthToken::try_from("").unwrap_err(), ConversionError::Empty);
        assert!(serde_json::from_str::<AuthToken>(r#""""#).is_err());
    }

    #[test]
    fn debug_does_not_leak() {
        let token = AuthToken::try_from("super-secret").unwrap();
        assert!(!format!("{token:?}").contains("super-secret"));
    }

    #[test]
    fn bearer_format() {
        let token = AuthToken::try_from("xyz").unwrap();
        assert_eq!(token.bearer_header_value(), "Bearer xyz");
        assert_eq!(serde_json::to_string(&token).unwrap(), r#""xyz""#);
    }
}
