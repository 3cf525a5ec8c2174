use std::fmt;

use once_cell::sync::OnceCell;

use super::prelude::*;
use crate::{
    gateways::{
        identity::{AuthErrorCode, IdentityGateway},
        navigate::{NavigationGateway, Page},
    },
    notification::{NotificationKind, Toaster},
};

const MSG_SIGNED_UP: &str = "Account created successfully!";
const MSG_SIGNED_IN: &str = "Signed in successfully!";
const MSG_SIGNED_OUT: &str = "Signed out successfully!";
const MSG_PASSWORD_RESET: &str = "Password reset email sent!";
const MSG_UNAVAILABLE: &str = "Authentication service unavailable. Please refresh the page.";
const MSG_GENERIC_ERROR: &str = "An error occurred. Please try again.";

/// A human readable message for an error code of the identity backend.
pub fn auth_error_message(code: &AuthErrorCode) -> &'static str {
    use AuthErrorCode as C;
    match code {
        C::EmailAlreadyInUse => "This email is already registered.",
        C::InvalidEmail => "Invalid email address.",
        C::WeakPassword => "Password should be at least 6 characters.",
        C::UserNotFound => "No account found with this email.",
        C::WrongPassword => "Incorrect password.",
        C::TooManyRequests => "Too many failed attempts. Please try again later.",
        C::NetworkRequestFailed => "Network error. Please check your connection.",
        C::Other(_) => MSG_GENERIC_ERROR,
    }
}

/// Sign up, sign in and out users with the identity backend
/// and tell them about the outcome.
///
/// The manager is unusable until the backend has been handed
/// over with [`AuthManager::backend_ready`].
pub struct AuthManager<I, N> {
    backend: OnceCell<I>,
    navigation: N,
    toaster: Toaster,
}

impl<I, N> AuthManager<I, N>
where
    I: IdentityGateway,
    N: NavigationGateway,
{
    pub fn new(navigation: N) -> Self {
        Self {
            backend: OnceCell::new(),
            navigation,
            toaster: Toaster::default(),
        }
    }

    /// Initialize the manager once the identity backend is available.
    ///
    /// A backend can only be handed over once, later calls are ignored.
    pub fn backend_ready(&self, backend: I) {
        if self.backend.set(backend).is_err() {
            log::warn!("Identity backend has already been initialized");
            return;
        }
        log::debug!("Identity backend is ready");
        let user = self.current_user();
        self.session_changed(user.as_ref());
    }

    /// The identity backend could not be initialized.
    pub fn backend_failed(&self, err: &dyn fmt::Display) {
        log::error!("Identity backend initialization error: {err}");
        self.toaster.show(MSG_UNAVAILABLE, NotificationKind::Error);
    }

    pub fn is_initialized(&self) -> bool {
        self.backend.get().is_some()
    }

    pub fn toaster(&self) -> &Toaster {
        &self.toaster
    }

    fn backend(&self) -> Result<&I> {
        self.backend.get().ok_or(Error::NotInitialized)
    }

    pub fn sign_up(&self, email: &str, password: &str, full_name: &str) -> Result<AuthUser> {
        let result = (|| -> Result<AuthUser> {
            let backend = self.backend()?;
            let session = backend.create_user_with_email_and_password(email, password)?;
            let session = backend.update_display_name(&session, full_name)?;
            let profile = UserProfile::new(full_name, email);
            backend.store_user_profile(&session, &profile)?;
            Ok(session.user)
        })();
        let user = self.notify(result, MSG_SIGNED_UP)?;
        log::info!("Created account of {}", user.email);
        self.session_changed(Some(&user));
        Ok(user)
    }

    pub fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser> {
        let result = self
            .backend()
            .and_then(|backend| Ok(backend.sign_in_with_email_and_password(email, password)?))
            .map(|session| session.user);
        let user = self.notify(result, MSG_SIGNED_IN)?;
        self.session_changed(Some(&user));
        Ok(user)
    }

    /// Sign out and return to the home page.
    ///
    /// Errors are only shown to the user.
    pub fn sign_out(&self) {
        let result = self
            .backend()
            .and_then(|backend| Ok(backend.sign_out()?));
        if self.notify(result, MSG_SIGNED_OUT).is_ok() {
            self.session_changed(None);
            self.navigation.navigate(Page::Home);
        }
    }

    pub fn reset_password(&self, email: &str) -> Result<()> {
        let result = self
            .backend()
            .and_then(|backend| Ok(backend.send_password_reset_email(email)?));
        self.notify(result, MSG_PASSWORD_RESET)
    }

    /// React on a changed authentication state.
    ///
    /// Signed out users are sent from the dashboard to the login page.
    /// There is no redirect after signing in to avoid redirect loops.
    pub fn session_changed(&self, user: Option<&AuthUser>) {
        match user {
            Some(user) => {
                log::info!("User is signed in: {}", user.email);
            }
            None => {
                log::info!("User is signed out");
                if self.navigation.current_page() == Page::Dashboard {
                    self.navigation.navigate(Page::Login);
                }
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    pub fn current_user(&self) -> Option<AuthUser> {
        self.backend.get().and_then(I::current_user)
    }

    pub fn redirect_to_dashboard(&self) {
        self.navigation.navigate(Page::Dashboard);
    }

    fn notify<T>(&self, result: Result<T>, success_msg: &str) -> Result<T> {
        match &result {
            Ok(_) => {
                self.toaster.show(success_msg, NotificationKind::Success);
            }
            Err(err) => {
                log::warn!("Authentication failed: {err}");
                let msg = match err {
                    Error::Auth(err) => auth_error_message(&err.code).to_string(),
                    Error::NotInitialized => err.to_string(),
                    _ => MSG_GENERIC_ERROR.to_string(),
                };
                self.toaster.show(msg, NotificationKind::Error);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::{
        super::tests::{DummyIdentityGW, DummyNavigationGW},
        *,
    };
    use crate::gateways::identity::AuthError;
    use time::Duration;

    type Manager = AuthManager<DummyIdentityGW, DummyNavigationGW>;

    fn ready_manager(backend: DummyIdentityGW, nav: DummyNavigationGW) -> Manager {
        let manager = AuthManager::new(nav);
        manager.backend_ready(backend);
        manager
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            auth_error_message(&AuthErrorCode::EmailAlreadyInUse),
            "This email is already registered."
        );
        assert_eq!(
            auth_error_message(&AuthErrorCode::WrongPassword),
            "Incorrect password."
        );
        assert_eq!(
            auth_error_message(&AuthErrorCode::Other("auth/operation-not-allowed".into())),
            "An error occurred. Please try again."
        );
    }

    #[test]
    fn sign_up_before_backend_is_ready() {
        let manager: Manager = AuthManager::new(DummyNavigationGW::default());
        let backend = DummyIdentityGW::default();
        let err = manager
            .sign_up("jane@example.org", "secret123", "Jane Doe")
            .unwrap_err();
        assert!(matches!(err, Error::NotInitialized));
        assert_eq!(
            err.to_string(),
            "Authentication service not initialized. Please refresh the page."
        );
        assert!(!manager.is_initialized());
        manager.backend_ready(backend.clone());
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn sign_up() {
        let backend = DummyIdentityGW::default();
        let manager = ready_manager(backend.clone(), DummyNavigationGW::default());
        let user = manager
            .sign_up("jane@example.org", "secret123", "Jane Doe")
            .unwrap();
        assert_eq!(user.display_name.as_deref(), Some("Jane Doe"));
        assert_eq!(
            backend.calls(),
            vec![
                "create_user_with_email_and_password",
                "update_display_name",
                "store_user_profile"
            ]
        );
        let profiles = backend.profiles();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].0, user.uid);
        assert_eq!(profiles[0].1, UserProfile::new("Jane Doe", "jane@example.org"));
        assert_eq!(profiles[0].1.role, Role::Donor);
        let n = manager.toaster().current().unwrap();
        assert_eq!(n.message, "Account created successfully!");
        assert_eq!(n.kind, NotificationKind::Success);
    }

    #[test]
    fn sign_up_with_registered_email() {
        let backend = DummyIdentityGW::failing(AuthErrorCode::EmailAlreadyInUse);
        let manager = ready_manager(backend.clone(), DummyNavigationGW::default());
        let err = manager
            .sign_up("jane@example.org", "secret123", "Jane Doe")
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Auth(AuthError {
                code: AuthErrorCode::EmailAlreadyInUse,
                ..
            })
        ));
        assert_eq!(backend.calls(), vec!["create_user_with_email_and_password"]);
        let n = manager.toaster().current().unwrap();
        assert_eq!(n.message, "This email is already registered.");
        assert_eq!(n.kind, NotificationKind::Error);
        let later = n.shown_at + Duration::seconds(5);
        assert!(manager.toaster().current_at(later).is_none());
    }

    #[test]
    fn sign_in_does_not_navigate() {
        let nav = DummyNavigationGW::on(Page::Login);
        let manager = ready_manager(DummyIdentityGW::default(), nav.clone());
        manager.sign_in("jane@example.org", "secret123").unwrap();
        assert!(manager.is_authenticated());
        assert!(nav.navigations().is_empty());
        assert_eq!(
            manager.toaster().current().unwrap().message,
            "Signed in successfully!"
        );
    }

    #[test]
    fn sign_in_with_wrong_password() {
        let backend = DummyIdentityGW::failing(AuthErrorCode::WrongPassword);
        let manager = ready_manager(backend, DummyNavigationGW::default());
        assert!(manager.sign_in("jane@example.org", "nope").is_err());
        assert!(!manager.is_authenticated());
        assert_eq!(
            manager.toaster().current().unwrap().message,
            "Incorrect password."
        );
    }

    #[test]
    fn sign_out_from_dashboard() {
        let nav = DummyNavigationGW::on(Page::Dashboard);
        let manager = ready_manager(DummyIdentityGW::signed_in("jane@example.org"), nav.clone());
        assert!(manager.is_authenticated());
        assert!(nav.navigations().is_empty());
        manager.sign_out();
        assert!(!manager.is_authenticated());
        assert_eq!(nav.navigations(), vec![Page::Login, Page::Home]);
        assert_eq!(
            manager.toaster().current().unwrap().message,
            "Signed out successfully!"
        );
    }

    #[test]
    fn sign_out_before_backend_is_ready() {
        let nav = DummyNavigationGW::on(Page::Dashboard);
        let manager: Manager = AuthManager::new(nav.clone());
        manager.sign_out();
        assert!(nav.navigations().is_empty());
        let n = manager.toaster().current().unwrap();
        assert_eq!(n.kind, NotificationKind::Error);
        assert_eq!(
            n.message,
            "Authentication service not initialized. Please refresh the page."
        );
    }

    #[test]
    fn reset_password() {
        let backend = DummyIdentityGW::default();
        let manager = ready_manager(backend.clone(), DummyNavigationGW::default());
        manager.reset_password("jane@example.org").unwrap();
        assert_eq!(backend.calls(), vec!["send_password_reset_email"]);
        assert_eq!(
            manager.toaster().current().unwrap().message,
            "Password reset email sent!"
        );
    }

    #[test]
    fn session_expired_on_dashboard() {
        let nav = DummyNavigationGW::on(Page::Dashboard);
        let manager = ready_manager(DummyIdentityGW::default(), nav.clone());
        // the backend was ready without a signed in user
        assert_eq!(nav.navigations(), vec![Page::Login]);
        manager.redirect_to_dashboard();
        assert_eq!(nav.navigations(), vec![Page::Login, Page::Dashboard]);
    }

    #[test]
    fn initialize_only_once() {
        let first = DummyIdentityGW::default();
        let manager = ready_manager(first.clone(), DummyNavigationGW::default());
        let second = DummyIdentityGW::default();
        manager.backend_ready(second.clone());
        manager.reset_password("jane@example.org").unwrap();
        assert_eq!(first.calls().len(), 1);
        assert!(second.calls().is_empty());
    }

    #[test]
    fn backend_failed() {
        let manager: Manager = AuthManager::new(DummyNavigationGW::default());
        manager.backend_failed(&"missing API key");
        assert_eq!(
            manager.toaster().current().unwrap().message,
            "Authentication service unavailable. Please refresh the page."
        );
    }
}
