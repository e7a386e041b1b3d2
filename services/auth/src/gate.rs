//! Session gate
//!
//! The gate is the single writer of the session. It restores the persisted
//! session at startup, signs users in and out, and keeps the durable store and
//! the shared in-memory session in step: storage is written first, memory is
//! updated only once the write succeeded.

use common::{KeyValueStore, StorageError};
use tracing::{info, warn};

use crate::client::AuthApi;
use crate::error::AuthError;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, Session, UserInfo};
use crate::session::{SessionStore, SharedSession};
use crate::validation;

/// Message shown when a failed login carries no server message
pub const LOGIN_FAILED: &str = "Login failed";

/// Message shown when a failed registration carries no server message
pub const REGISTRATION_FAILED: &str = "Registration failed";

/// What the gate currently allows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Authenticated(UserInfo),
}

impl SessionState {
    pub fn user(&self) -> Option<&UserInfo> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            SessionState::Unauthenticated => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }
}

/// Owns the session lifecycle
pub struct SessionGate<S> {
    store: SessionStore<S>,
    session: SharedSession,
    api: AuthApi,
}

impl<S: KeyValueStore> SessionGate<S> {
    /// Create a gate over `store`
    ///
    /// `session` must be the same value the HTTP client behind `api` reads its
    /// token from.
    pub fn new(store: S, session: SharedSession, api: AuthApi) -> Self {
        Self {
            store: SessionStore::new(store),
            session,
            api,
        }
    }

    /// Shared read-only view of the session
    pub fn session(&self) -> &SharedSession {
        &self.session
    }

    /// Auth endpoints, sharing the gate's HTTP client
    pub fn api(&self) -> &AuthApi {
        &self.api
    }

    /// Current state of the gate
    pub fn state(&self) -> SessionState {
        match self.session.user() {
            Some(user) => SessionState::Authenticated(user),
            None => SessionState::Unauthenticated,
        }
    }

    /// Read the persisted session at startup
    ///
    /// Never fails: a malformed or unreadable session is discarded and the
    /// gate falls back to unauthenticated.
    pub fn restore(&mut self) -> SessionState {
        match self.store.load() {
            Ok(Some(session)) => {
                info!(
                    "Restored session for {} ({})",
                    session.user.username, session.user.role
                );
                self.session.replace(Some(session));
            }
            Ok(None) => {
                info!("No stored session");
                self.session.replace(None);
            }
            Err(e) => {
                warn!("Discarding stored session: {}", e);
                if let Err(e) = self.store.clear() {
                    warn!("Failed to clear stored session: {}", e);
                }
                self.session.replace(None);
            }
        }

        self.state()
    }

    /// Sign in with username and password
    ///
    /// On failure the previous session, if any, is left untouched.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<Session, AuthError> {
        validation::validate_credentials(username, password)?;

        let response = self
            .api
            .login(&LoginRequest::new(username, password))
            .await
            .map_err(|e| AuthError::from_api(e, LOGIN_FAILED))?;

        self.establish(response, LOGIN_FAILED)
    }

    /// Create an account and sign in with it
    pub async fn register(&mut self, username: &str, password: &str) -> Result<Session, AuthError> {
        validation::validate_registration(username, password)?;

        let response = self
            .api
            .register(&RegisterRequest::new(username, password))
            .await
            .map_err(|e| AuthError::from_api(e, REGISTRATION_FAILED))?;

        self.establish(response, REGISTRATION_FAILED)
    }

    /// Sign out locally; the server is not contacted
    ///
    /// The in-memory session is dropped even when clearing storage fails.
    pub fn logout(&mut self) -> Result<(), StorageError> {
        if let Some(user) = self.session.user() {
            info!("Signing out {}", user.username);
        }
        self.session.replace(None);
        self.store.clear()
    }

    fn establish(&mut self, response: AuthResponse, failed: &'static str) -> Result<Session, AuthError> {
        let session = Session::from(response);
        if !session.has_token() {
            warn!("Auth response for {} carried no token", session.user.username);
            return Err(AuthError::MissingToken(failed));
        }
        self.store.save(&session)?;
        self.session.replace(Some(session.clone()));

        info!(
            "Signed in as {} ({})",
            session.user.username, session.user.role
        );
        Ok(session)
    }
}
