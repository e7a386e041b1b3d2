//! Session persistence and the shared in-memory session
//!
//! The session is persisted as one JSON record under [`SESSION_KEY`]. Stores
//! written by earlier clients keep the token and user under two separate keys;
//! those are still read, migrated to the combined record on first load, and
//! removed by every clear.

use std::sync::{Arc, PoisonError, RwLock};

use common::{KeyValueStore, StorageError, TokenProvider};
use tracing::{info, warn};

use crate::error::SessionError;
use crate::models::{Session, UserInfo};

/// Key of the combined session record
pub const SESSION_KEY: &str = "session";

/// Legacy key holding the bare token
pub const LEGACY_TOKEN_KEY: &str = "token";

/// Legacy key holding the JSON user descriptor
pub const LEGACY_USER_KEY: &str = "user";

/// Reads and writes the session in a key/value store
#[derive(Debug)]
pub struct SessionStore<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Underlying key/value store
    pub fn inner(&self) -> &S {
        &self.store
    }

    /// Load the persisted session
    ///
    /// Returns `Ok(None)` when nothing is stored. A value that is present but
    /// does not parse, an empty token, or a legacy token without its user (or
    /// the reverse), is a [`SessionError::Parse`].
    pub fn load(&self) -> Result<Option<Session>, SessionError> {
        if let Some(record) = self.store.get(SESSION_KEY)? {
            let session: Session =
                serde_json::from_str(&record).map_err(|e| SessionError::Parse {
                    key: SESSION_KEY,
                    reason: e.to_string(),
                })?;
            if !session.has_token() {
                return Err(SessionError::Parse {
                    key: SESSION_KEY,
                    reason: "token is empty".to_string(),
                });
            }
            return Ok(Some(session));
        }

        let token = self.store.get(LEGACY_TOKEN_KEY)?;
        let user = self.store.get(LEGACY_USER_KEY)?;
        let session = match (token, user) {
            (None, None) => return Ok(None),
            (Some(token), Some(_)) if token.trim().is_empty() => {
                return Err(SessionError::Parse {
                    key: LEGACY_TOKEN_KEY,
                    reason: "token is empty".to_string(),
                });
            }
            (Some(token), Some(user)) => {
                let user: UserInfo =
                    serde_json::from_str(&user).map_err(|e| SessionError::Parse {
                        key: LEGACY_USER_KEY,
                        reason: e.to_string(),
                    })?;
                Session { token, user }
            }
            (None, Some(_)) => {
                return Err(SessionError::Parse {
                    key: LEGACY_TOKEN_KEY,
                    reason: "user is stored without a token".to_string(),
                });
            }
            (Some(_), None) => {
                return Err(SessionError::Parse {
                    key: LEGACY_USER_KEY,
                    reason: "token is stored without a user".to_string(),
                });
            }
        };

        info!("Migrating legacy session for {}", session.user.username);
        if let Err(e) = self.save(&session) {
            warn!("Failed to migrate legacy session: {}", e);
        }

        Ok(Some(session))
    }

    /// Persist the session as one record and drop any legacy keys
    ///
    /// Both happen in a single store write.
    pub fn save(&self, session: &Session) -> Result<(), StorageError> {
        let record = serde_json::to_string(session).map_err(StorageError::Encode)?;
        self.store.replace(
            &[(SESSION_KEY, &record)],
            &[LEGACY_TOKEN_KEY, LEGACY_USER_KEY],
        )
    }

    /// Remove every session key, combined and legacy
    pub fn clear(&self) -> Result<(), StorageError> {
        self.store
            .delete_many(&[SESSION_KEY, LEGACY_TOKEN_KEY, LEGACY_USER_KEY])
    }
}

/// In-memory session shared between the gate and the HTTP client
///
/// Clones share state. Only the session gate replaces the value; everything
/// else reads it, the HTTP client through [`TokenProvider`].
#[derive(Debug, Clone, Default)]
pub struct SharedSession {
    inner: Arc<RwLock<Option<Session>>>,
}

impl SharedSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current session
    pub fn current(&self) -> Option<Session> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Signed-in user, if any
    pub fn user(&self) -> Option<UserInfo> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|session| session.user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    pub(crate) fn replace(&self, session: Option<Session>) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = session;
    }
}

impl TokenProvider for SharedSession {
    fn bearer_token(&self) -> Option<String> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .filter(|session| session.has_token())
            .map(|session| session.token.clone())
    }
}
