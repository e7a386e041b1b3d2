//! Authentication models

pub mod role;
pub mod session;
pub mod user;

// Re-export for convenience
pub use role::{Role, UnknownRole};
pub use session::{AuthResponse, Session};
pub use user::{LoginRequest, RegisterRequest, StaffRequest, StaffUser, UserInfo};
