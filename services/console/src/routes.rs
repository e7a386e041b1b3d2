//! Route table and guard
//!
//! The guard only distinguishes signed-in from signed-out users. Every known
//! route renders for every role, including `/staff`.

use std::fmt;

use auth::UserInfo;
use serde::{Serialize, Serializer};

/// Known screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    Rooms,
    Guests,
    Bookings,
    Feedbacks,
    Staff,
}

impl Route {
    pub const ALL: [Route; 7] = [
        Route::Login,
        Route::Dashboard,
        Route::Rooms,
        Route::Guests,
        Route::Bookings,
        Route::Feedbacks,
        Route::Staff,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
            Route::Rooms => "/rooms",
            Route::Guests => "/guests",
            Route::Bookings => "/bookings",
            Route::Feedbacks => "/feedbacks",
            Route::Staff => "/staff",
        }
    }

    /// Route for an exact path, if known
    pub fn from_path(path: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|route| route.path() == path)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.path())
    }
}

/// Outcome of resolving a path against the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Render(Route),
    Redirect(Route),
    /// Unknown path, rendered inside the signed-in shell
    NotFound(String),
}

/// Canonical form of a path: leading slash, no trailing slash, no query
pub fn normalize_path(path: &str) -> String {
    let path = path.trim();
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_matches('/');
    format!("/{trimmed}")
}

/// Decide what `path` shows for the given user
pub fn resolve(path: &str, user: Option<&UserInfo>) -> Resolution {
    let path = normalize_path(path);

    match (Route::from_path(&path), user) {
        (Some(Route::Login), Some(_)) => Resolution::Redirect(Route::Dashboard),
        (Some(Route::Login), None) => Resolution::Render(Route::Login),
        (_, None) => Resolution::Redirect(Route::Login),
        (None, Some(_)) if path == "/" => Resolution::Redirect(Route::Dashboard),
        (Some(route), Some(_)) => Resolution::Render(route),
        (None, Some(_)) => Resolution::NotFound(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::Role;

    fn user(role: Role) -> UserInfo {
        UserInfo {
            username: "someone".to_string(),
            role,
        }
    }

    #[test]
    fn test_signed_out_goes_to_login() {
        for path in ["/", "/dashboard", "/staff", "/nowhere"] {
            assert_eq!(resolve(path, None), Resolution::Redirect(Route::Login));
        }
        assert_eq!(resolve("/login", None), Resolution::Render(Route::Login));
    }

    #[test]
    fn test_signed_in_skips_login_and_root() {
        let user = user(Role::User);
        assert_eq!(
            resolve("/login", Some(&user)),
            Resolution::Redirect(Route::Dashboard)
        );
        assert_eq!(
            resolve("/", Some(&user)),
            Resolution::Redirect(Route::Dashboard)
        );
    }

    #[test]
    fn test_every_role_renders_every_screen() {
        for role in Role::ALL {
            let user = user(role);
            for route in Route::ALL.into_iter().filter(|route| *route != Route::Login) {
                assert_eq!(resolve(route.path(), Some(&user)), Resolution::Render(route));
            }
        }
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let user = user(Role::Manager);
        assert_eq!(
            resolve("/reports/", Some(&user)),
            Resolution::NotFound("/reports".to_string())
        );
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("rooms/"), "/rooms");
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/guests?page=2"), "/guests");
    }
}
