//! The outer wrapper the backend puts around every response body

use crate::errors::ApiError;

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
    pub error_code: Option<String>,
    pub timestamp: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Returns the payload (which may legitimately be absent) or the failure
    /// the backend reported
    pub fn into_result(self) -> Result<Option<T>, ApiError> {
        if self.success {
            Ok(self.data)
        } else {
            Err(self.into_rejection())
        }
    }

    /// Like [`Self::into_result`] but a missing payload is an error
    pub fn into_data(self) -> Result<T, ApiError> {
        self.into_result()?.ok_or(ApiError::MissingData)
    }

    pub fn into_rejection(self) -> ApiError {
        ApiError::Rejected {
            message: self
                .message
                .unwrap_or_else(|| "request failed without a message".to_string()),
            error_code: self.error_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_unwraps_data() {
        let envelope: ApiEnvelope<serde_json::Value> = serde_json::from_value(json!({
            "success": true,
            "message": "ok",
            "timestamp": "2024-01-01T00:00:00",
            "data": {"id": 1}
        }))
        .unwrap();
        assert_eq!(envelope.into_data().unwrap(), json!({"id": 1}));
    }

    #[test]
    fn failure_becomes_rejection() {
        let envelope: ApiEnvelope<serde_json::Value> = serde_json::from_value(json!({
            "success": false,
            "message": "Invalid username or password",
            "errorCode": "AUTH_FAILED"
        }))
        .unwrap();
        let actual = envelope.into_result().unwrap_err();
        assert_eq!(actual.error_code(), Some("AUTH_FAILED"));
        assert_eq!(actual.to_string(), "Invalid username or password");
    }

    #[test]
    fn missing_data() {
        let envelope: ApiEnvelope<u32> =
            serde_json::from_value(json!({"success": true, "data": null})).unwrap();
        assert_eq!(envelope.clone().into_result().unwrap(), None);
        assert_eq!(envelope.into_data().unwrap_err(), ApiError::MissingData);
    }
}
