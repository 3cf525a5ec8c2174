use std::fmt;

use hamk_entities::user::{AuthUser, Session, UserProfile};
use thiserror::Error;

/// Error codes reported by the identity backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthErrorCode {
    EmailAlreadyInUse,
    InvalidEmail,
    WeakPassword,
    UserNotFound,
    WrongPassword,
    TooManyRequests,
    NetworkRequestFailed,
    Other(String),
}

impl AuthErrorCode {
    pub fn as_str(&self) -> &str {
        match self {
            Self::EmailAlreadyInUse => "auth/email-already-in-use",
            Self::InvalidEmail => "auth/invalid-email",
            Self::WeakPassword => "auth/weak-password",
            Self::UserNotFound => "auth/user-not-found",
            Self::WrongPassword => "auth/wrong-password",
            Self::TooManyRequests => "auth/too-many-requests",
            Self::NetworkRequestFailed => "auth/network-request-failed",
            Self::Other(code) => code,
        }
    }
}

impl fmt::Display for AuthErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message}")]
pub struct AuthError {
    pub code: AuthErrorCode,
    pub message: String,
}

impl AuthError {
    pub fn new(code: AuthErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

pub trait IdentityGateway {
    fn create_user_with_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError>;
    fn update_display_name(&self, session: &Session, display_name: &str)
        -> Result<Session, AuthError>;
    fn sign_in_with_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError>;
    fn sign_out(&self) -> Result<(), AuthError>;
    fn send_password_reset_email(&self, email: &str) -> Result<(), AuthError>;
    /// Store the profile document of the user.
    ///
    /// The creation time is assigned by the server.
    fn store_user_profile(&self, session: &Session, profile: &UserProfile)
        -> Result<(), AuthError>;
    fn current_user(&self) -> Option<AuthUser>;
}
