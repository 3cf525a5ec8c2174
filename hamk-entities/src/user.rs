use strum::{Display, EnumString};
use time::OffsetDateTime;

/// A user account owned by the identity backend.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub uid          : String,
    pub email        : String,
    pub display_name : Option<String>,
}

/// An authenticated session of the identity backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: AuthUser,
    pub id_token: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Role {
    #[default]
    Donor,
}

/// The profile document that is stored once at sign-up.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub full_name  : String,
    pub email      : String,
    /// Assigned by the server when the profile is written.
    pub created_at : Option<OffsetDateTime>,
    pub role       : Role,
}

impl UserProfile {
    pub fn new(full_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            created_at: None,
            role: Role::default(),
        }
    }
}
