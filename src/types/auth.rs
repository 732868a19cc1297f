// src/types/auth.rs
//! Auth endpoint request/response shapes. The backend wraps every auth
//! payload in a `{ success, data, error }` envelope; `ApiEnvelope` is the
//! one place that shape is known.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyEmailRequest {
    pub email: String,
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(rename = "firstName", default)]
    pub first_name: String,
    #[serde(rename = "lastName", default)]
    pub last_name: String,
    #[serde(rename = "fullName", default)]
    pub full_name: String,
    #[serde(rename = "visaType", default)]
    pub visa_type: Option<String>,
    #[serde(rename = "visaExpiry", default)]
    pub visa_expiry: Option<String>,
    #[serde(rename = "linkedInUrl", default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: String,
}

/// Profile update payload; only present fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(rename = "firstName", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(rename = "visaType", skip_serializing_if = "Option::is_none")]
    pub visa_type: Option<String>,
    #[serde(rename = "visaExpiry", skip_serializing_if = "Option::is_none")]
    pub visa_expiry: Option<String>,
    #[serde(rename = "linkedInUrl", skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginData {
    pub user: User,
    pub token: String,
}

/// Register and verify-email both return the user without a token; login
/// is required after verification.
#[derive(Debug, Clone, Deserialize)]
pub struct UserData {
    pub user: User,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_envelope_parses() {
        let raw = serde_json::json!({
            "success": true,
            "data": {
                "user": {"id": "u1", "email": "a@b.co", "fullName": "A B"},
                "token": "jwt-token"
            }
        });
        let envelope: ApiEnvelope<LoginData> = serde_json::from_value(raw).unwrap();
        assert!(envelope.success);
        let data = envelope.data.unwrap();
        assert_eq!(data.token, "jwt-token");
        assert_eq!(data.user.full_name, "A B");
        assert_eq!(data.user.first_name, "");
    }

    #[test]
    fn test_error_envelope_parses() {
        let raw = serde_json::json!({
            "success": false,
            "error": {"code": "AUTH_001", "message": "Invalid credentials"}
        });
        let envelope: ApiEnvelope<LoginData> = serde_json::from_value(raw).unwrap();
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.error.unwrap().message, "Invalid credentials");
    }

    #[test]
    fn test_profile_update_skips_absent_fields() {
        let update = ProfileUpdate {
            location: Some("Adelaide".to_string()),
            ..Default::default()
        };
        let raw = serde_json::to_value(&update).unwrap();
        assert_eq!(raw, serde_json::json!({"location": "Adelaide"}));
    }
}
