//! The routed shell
//!
//! Holds the session gate and the current location. Every navigation runs
//! through the route guard and follows redirects until a screen renders.

use auth::{AuthError, SessionGate, SessionState};
use common::{KeyValueStore, StorageError};
use serde::Serialize;
use tracing::{debug, info};

use crate::navigation::{MenuItem, visible_menu};
use crate::routes::{Resolution, Route, resolve};

const MAX_REDIRECTS: usize = 4;

/// What the shell is showing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", content = "path", rename_all = "snake_case")]
pub enum View {
    Page(Route),
    NotFound(String),
}

pub struct Shell<S> {
    gate: SessionGate<S>,
    location: String,
    view: View,
}

impl<S: KeyValueStore> Shell<S> {
    /// Restore the persisted session and open the root path
    pub fn start(mut gate: SessionGate<S>) -> Self {
        gate.restore();

        let mut shell = Self {
            gate,
            location: Route::Login.path().to_string(),
            view: View::Page(Route::Login),
        };
        shell.navigate("/");
        shell
    }

    /// Go to `path`, following guard redirects
    pub fn navigate(&mut self, path: &str) -> &View {
        let user = self.gate.state().user().cloned();
        let mut target = path.to_string();

        for _ in 0..MAX_REDIRECTS {
            match resolve(&target, user.as_ref()) {
                Resolution::Redirect(route) => {
                    debug!("Redirecting {} to {}", target, route);
                    target = route.path().to_string();
                }
                Resolution::Render(route) => {
                    self.show(route.path(), View::Page(route));
                    return &self.view;
                }
                Resolution::NotFound(path) => {
                    self.show(&path, View::NotFound(path.clone()));
                    return &self.view;
                }
            }
        }

        // The route table cannot loop; treat a runaway chain as signed out
        self.show(Route::Login.path(), View::Page(Route::Login));
        &self.view
    }

    /// Sign in and open the dashboard
    pub async fn login(&mut self, username: &str, password: &str) -> Result<&View, AuthError> {
        self.gate.login(username, password).await?;
        Ok(self.navigate(Route::Dashboard.path()))
    }

    /// Register, sign in and open the dashboard
    pub async fn register(&mut self, username: &str, password: &str) -> Result<&View, AuthError> {
        self.gate.register(username, password).await?;
        Ok(self.navigate(Route::Dashboard.path()))
    }

    /// Sign out and return to the login screen from wherever the shell was
    pub fn logout(&mut self) -> Result<&View, StorageError> {
        let cleared = self.gate.logout();
        self.navigate(Route::Login.path());
        cleared?;
        Ok(&self.view)
    }

    /// Menu for the signed-in role; empty when signed out
    pub fn menu(&self) -> Vec<MenuItem> {
        self.gate
            .state()
            .user()
            .map(|user| visible_menu(user.role))
            .unwrap_or_default()
    }

    pub fn state(&self) -> SessionState {
        self.gate.state()
    }

    pub fn gate(&self) -> &SessionGate<S> {
        &self.gate
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    fn show(&mut self, location: &str, view: View) {
        if self.location != location {
            info!("Navigated to {}", location);
        }
        self.location = location.to_string();
        self.view = view;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use auth::session::SESSION_KEY;
    use auth::{AuthApi, SharedSession};
    use common::{ApiClient, MemoryStore};

    use super::*;

    fn start_shell(stored: Option<&str>) -> (Shell<Arc<MemoryStore>>, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        if let Some(record) = stored {
            store.set(SESSION_KEY, record).unwrap();
        }

        let session = SharedSession::new();
        let client = ApiClient::with_http_client(
            reqwest::Client::new(),
            "http://127.0.0.1:9/api",
            Arc::new(session.clone()),
        );
        let gate = SessionGate::new(store.clone(), session, AuthApi::new(client));
        (Shell::start(gate), store)
    }

    const RECEPTIONIST: &str =
        r#"{"token":"t","user":{"username":"desk","role":"ROLE_RECEPTIONIST"}}"#;

    #[test]
    fn test_start_signed_out_lands_on_login() {
        let (mut shell, _) = start_shell(None);
        assert_eq!(shell.location(), "/login");
        assert_eq!(shell.navigate("/rooms"), &View::Page(Route::Login));
        assert!(shell.menu().is_empty());
    }

    #[test]
    fn test_start_signed_in_lands_on_dashboard() {
        let (mut shell, _) = start_shell(Some(RECEPTIONIST));
        assert_eq!(shell.location(), "/dashboard");
        assert_eq!(shell.navigate("/login"), &View::Page(Route::Dashboard));
        assert_eq!(shell.navigate("/staff"), &View::Page(Route::Staff));
        assert_eq!(
            shell.navigate("/reports"),
            &View::NotFound("/reports".to_string())
        );
        assert_eq!(shell.menu().len(), 5);
    }

    #[test]
    fn test_malformed_session_starts_signed_out() {
        let (shell, store) = start_shell(Some("{oops"));
        assert_eq!(shell.view(), &View::Page(Route::Login));
        assert!(store.is_empty());
    }

    #[test]
    fn test_view_serialization() {
        assert_eq!(
            serde_json::to_value(View::Page(Route::Rooms)).unwrap(),
            serde_json::json!({"view": "page", "path": "/rooms"})
        );
        assert_eq!(
            serde_json::to_value(View::NotFound("/x".to_string())).unwrap(),
            serde_json::json!({"view": "not_found", "path": "/x"})
        );
    }

    #[test]
    fn test_logout_returns_to_login_from_anywhere() {
        for path in ["/staff", "/reports", "/bookings"] {
            let (mut shell, store) = start_shell(Some(RECEPTIONIST));
            shell.navigate(path);

            assert_eq!(shell.logout().unwrap(), &View::Page(Route::Login));
            assert_eq!(shell.location(), "/login");
            assert!(store.is_empty());
        }
    }
}
