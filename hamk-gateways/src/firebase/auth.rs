//! Wire format of the Identity Toolkit REST API.

use hamk_core::{
    entities::{AuthUser, Session},
    gateways::identity::{AuthError, AuthErrorCode},
};
use serde::{Deserialize, Serialize};

pub(super) const SIGN_UP: &str = "accounts:signUp";
pub(super) const SIGN_IN_WITH_PASSWORD: &str = "accounts:signInWithPassword";
pub(super) const UPDATE: &str = "accounts:update";
pub(super) const SEND_OOB_CODE: &str = "accounts:sendOobCode";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PasswordRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub return_secure_token: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct UpdateProfileRequest<'a> {
    pub id_token: &'a str,
    pub display_name: &'a str,
    pub return_secure_token: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct OobCodeRequest<'a> {
    pub request_type: &'static str,
    pub email: &'a str,
}

impl<'a> OobCodeRequest<'a> {
    pub fn password_reset(email: &'a str) -> Self {
        Self {
            request_type: "PASSWORD_RESET",
            email,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct AccountResponse {
    local_id: String,
    email: Option<String>,
    display_name: Option<String>,
    id_token: Option<String>,
}

impl AccountResponse {
    /// Profile updates only return a new token if it changed.
    pub fn into_session(self, previous: Option<&Session>) -> Result<Session, AuthError> {
        let Self {
            local_id,
            email,
            display_name,
            id_token,
        } = self;
        let id_token = id_token
            .filter(|t| !t.is_empty())
            .or_else(|| previous.map(|s| s.id_token.clone()))
            .ok_or_else(|| internal_error("Missing ID token in response"))?;
        let email = email
            .or_else(|| previous.map(|s| s.user.email.clone()))
            .unwrap_or_default();
        let display_name = display_name.filter(|n| !n.is_empty());
        Ok(Session {
            user: AuthUser {
                uid: local_id,
                email,
                display_name,
            },
            id_token,
        })
    }
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

pub(super) fn internal_error(message: impl Into<String>) -> AuthError {
    AuthError::new(AuthErrorCode::Other("auth/internal-error".into()), message)
}

/// Map the error message of the backend, e.g.
/// `WEAK_PASSWORD : Password should be at least 6 characters`.
pub(super) fn error_code(message: &str) -> AuthErrorCode {
    let code = message.split(':').next().unwrap_or_default().trim();
    match code {
        "EMAIL_EXISTS" => AuthErrorCode::EmailAlreadyInUse,
        "INVALID_EMAIL" | "MISSING_EMAIL" => AuthErrorCode::InvalidEmail,
        "WEAK_PASSWORD" => AuthErrorCode::WeakPassword,
        "EMAIL_NOT_FOUND" => AuthErrorCode::UserNotFound,
        "INVALID_PASSWORD" => AuthErrorCode::WrongPassword,
        "TOO_MANY_ATTEMPTS_TRY_LATER" => AuthErrorCode::TooManyRequests,
        other => AuthErrorCode::Other(format!(
            "auth/{}",
            other.to_lowercase().replace('_', "-")
        )),
    }
}

pub(super) fn error_response(body: &[u8]) -> AuthError {
    match serde_json::from_slice::<ErrorResponse>(body) {
        Ok(ErrorResponse {
            error: ErrorBody { message },
        }) => AuthError::new(error_code(&message), message),
        Err(_) => internal_error(String::from_utf8_lossy(body)),
    }
}

pub(super) fn transport_error(err: reqwest::Error) -> AuthError {
    AuthError::new(AuthErrorCode::NetworkRequestFailed, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_error_messages() {
        assert_eq!(error_code("EMAIL_EXISTS"), AuthErrorCode::EmailAlreadyInUse);
        assert_eq!(
            error_code("WEAK_PASSWORD : Password should be at least 6 characters"),
            AuthErrorCode::WeakPassword
        );
        assert_eq!(error_code("INVALID_PASSWORD"), AuthErrorCode::WrongPassword);
        assert_eq!(
            error_code("TOO_MANY_ATTEMPTS_TRY_LATER : Access to this account has been temporarily disabled"),
            AuthErrorCode::TooManyRequests
        );
        assert_eq!(
            error_code("USER_DISABLED"),
            AuthErrorCode::Other("auth/user-disabled".into())
        );
    }

    #[test]
    fn decode_error_response() {
        let body = br#"{
          "error": {
            "code": 400,
            "message": "EMAIL_EXISTS",
            "errors": [
              { "message": "EMAIL_EXISTS", "domain": "global", "reason": "invalid" }
            ]
          }
        }"#;
        let err = error_response(body);
        assert_eq!(err.code, AuthErrorCode::EmailAlreadyInUse);
        assert_eq!(err.message, "EMAIL_EXISTS");

        let err = error_response(b"Bad Gateway");
        assert_eq!(err.code, AuthErrorCode::Other("auth/internal-error".into()));
    }

    #[test]
    fn decode_sign_in_response() {
        let body = br#"{
          "kind": "identitytoolkit#VerifyPasswordResponse",
          "localId": "ZY1rJK0eYLg",
          "email": "jane@example.org",
          "displayName": "",
          "idToken": "eyJhbGciOi",
          "registered": true,
          "refreshToken": "AEu4IL0",
          "expiresIn": "3600"
        }"#;
        let response: AccountResponse = serde_json::from_slice(body).unwrap();
        let session = response.into_session(None).unwrap();
        assert_eq!(session.user.uid, "ZY1rJK0eYLg");
        assert_eq!(session.user.email, "jane@example.org");
        assert_eq!(session.user.display_name, None);
        assert_eq!(session.id_token, "eyJhbGciOi");
    }

    #[test]
    fn keep_token_after_profile_update() {
        let previous = Session {
            user: AuthUser {
                uid: "ZY1rJK0eYLg".into(),
                email: "jane@example.org".into(),
                display_name: None,
            },
            id_token: "eyJhbGciOi".into(),
        };
        let body = br#"{"localId":"ZY1rJK0eYLg","displayName":"Jane Doe"}"#;
        let response: AccountResponse = serde_json::from_slice(body).unwrap();
        let session = response.into_session(Some(&previous)).unwrap();
        assert_eq!(session.id_token, "eyJhbGciOi");
        assert_eq!(session.user.email, "jane@example.org");
        assert_eq!(session.user.display_name.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn missing_token() {
        let body = br#"{"localId":"ZY1rJK0eYLg"}"#;
        let response: AccountResponse = serde_json::from_slice(body).unwrap();
        assert!(response.into_session(None).is_err());
    }

    #[test]
    fn serialize_requests() {
        let json = serde_json::to_value(PasswordRequest {
            email: "jane@example.org",
            password: "secret123",
            return_secure_token: true,
        })
        .unwrap();
        assert_eq!(json["returnSecureToken"], true);
        let json = serde_json::to_value(OobCodeRequest::password_reset("jane@example.org")).unwrap();
        assert_eq!(json["requestType"], "PASSWORD_RESET");
        assert_eq!(json["email"], "jane@example.org");
    }
}
