//! Identity backend based on the Firebase REST APIs.
//!
//! Accounts are managed with the Identity Toolkit API,
//! user profiles are stored in Firestore.

use hamk_core::{
    entities::{AuthUser, Session, UserProfile},
    gateways::identity::{AuthError, IdentityGateway},
};
use parking_lot::Mutex;
use reqwest::blocking::Client;
use serde::{de::DeserializeOwned, de::IgnoredAny, Serialize};

mod auth;
mod firestore;

use self::auth::{
    error_response, internal_error, transport_error, AccountResponse, OobCodeRequest,
    PasswordRequest, UpdateProfileRequest,
};

pub const DEFAULT_IDENTITY_API_URL: &str = "https://identitytoolkit.googleapis.com/v1";
pub const DEFAULT_FIRESTORE_API_URL: &str = "https://firestore.googleapis.com/v1";

#[derive(Debug, Clone)]
pub struct FirebaseConfig {
    pub api_key: String,
    /// Profiles are only stored if a project is configured.
    pub project_id: Option<String>,
    pub identity_api_url: String,
    pub firestore_api_url: String,
}

impl FirebaseConfig {
    pub fn new(api_key: impl Into<String>, project_id: Option<String>) -> Self {
        Self {
            api_key: api_key.into(),
            project_id,
            identity_api_url: DEFAULT_IDENTITY_API_URL.to_string(),
            firestore_api_url: DEFAULT_FIRESTORE_API_URL.to_string(),
        }
    }
}

#[derive(Debug)]
pub struct Firebase {
    client: Client,
    config: FirebaseConfig,
    session: Mutex<Option<Session>>,
}

impl Firebase {
    pub fn new(config: FirebaseConfig) -> Result<Self, reqwest::Error> {
        if config.api_key.trim().is_empty() {
            log::warn!("No Firebase API key configured");
        }
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            config,
            session: Mutex::new(None),
        })
    }

    fn identity_url(&self, method: &str) -> String {
        format!(
            "{}/{method}",
            self.config.identity_api_url.trim_end_matches('/')
        )
    }

    fn call_identity<B, R>(&self, method: &str, body: &B) -> Result<R, AuthError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        log::debug!("Call identity API: {method}");
        let request = self
            .client
            .post(self.identity_url(method))
            .query(&[("key", &self.config.api_key)])
            .json(body);
        send(request)
    }

    fn remember(&self, session: Session) -> Session {
        *self.session.lock() = Some(session.clone());
        session
    }
}

fn send<R>(request: reqwest::blocking::RequestBuilder) -> Result<R, AuthError>
where
    R: DeserializeOwned,
{
    let response = request.send().map_err(transport_error)?;
    let status = response.status();
    let body = response.bytes().map_err(transport_error)?;
    if !status.is_success() {
        let err = error_response(&body);
        log::debug!("Request failed with status {status}: {err}");
        return Err(err);
    }
    serde_json::from_slice(&body).map_err(|err| internal_error(err.to_string()))
}

impl IdentityGateway for Firebase {
    fn create_user_with_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        let request = PasswordRequest {
            email,
            password,
            return_secure_token: true,
        };
        let response: AccountResponse = self.call_identity(auth::SIGN_UP, &request)?;
        let session = response.into_session(None)?;
        Ok(self.remember(session))
    }

    fn update_display_name(
        &self,
        session: &Session,
        display_name: &str,
    ) -> Result<Session, AuthError> {
        let request = UpdateProfileRequest {
            id_token: &session.id_token,
            display_name,
            return_secure_token: true,
        };
        let response: AccountResponse = self.call_identity(auth::UPDATE, &request)?;
        let session = response.into_session(Some(session))?;
        Ok(self.remember(session))
    }

    fn sign_in_with_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        let request = PasswordRequest {
            email,
            password,
            return_secure_token: true,
        };
        let response: AccountResponse =
            self.call_identity(auth::SIGN_IN_WITH_PASSWORD, &request)?;
        let session = response.into_session(None)?;
        Ok(self.remember(session))
    }

    fn sign_out(&self) -> Result<(), AuthError> {
        // Tokens can't be revoked by clients.
        self.session.lock().take();
        Ok(())
    }

    fn send_password_reset_email(&self, email: &str) -> Result<(), AuthError> {
        let _: IgnoredAny =
            self.call_identity(auth::SEND_OOB_CODE, &OobCodeRequest::password_reset(email))?;
        Ok(())
    }

    fn store_user_profile(&self, session: &Session, profile: &UserProfile) -> Result<(), AuthError> {
        let Some(project_id) = &self.config.project_id else {
            log::debug!("No Firestore project configured: skip storing the user profile");
            return Ok(());
        };
        let database = firestore::database_name(project_id);
        let commit = firestore::profile_commit(&database, &session.user.uid, profile);
        let url = format!(
            "{}/{database}/documents:commit",
            self.config.firestore_api_url.trim_end_matches('/')
        );
        let request = self
            .client
            .post(url)
            .bearer_auth(&session.id_token)
            .json(&commit);
        let _: IgnoredAny = send(request)?;
        log::debug!("Stored profile of user {}", session.user.uid);
        Ok(())
    }

    fn current_user(&self) -> Option<AuthUser> {
        self.session.lock().as_ref().map(|s| s.user.clone())
    }
}
