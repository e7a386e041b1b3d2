//! Authentication for the hotel console
//!
//! This crate owns the client side of authentication: the auth and staff
//! endpoints, the persisted session and the [`SessionGate`] that is its only
//! writer.

pub mod client;
pub mod error;
pub mod gate;
pub mod models;
pub mod session;
pub mod validation;

pub use client::AuthApi;
pub use error::{AuthError, SessionError};
pub use gate::{SessionGate, SessionState};
pub use models::{Role, Session, UserInfo};
pub use session::{SessionStore, SharedSession};
