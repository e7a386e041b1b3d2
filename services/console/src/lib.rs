//! Hotel management console
//!
//! A terminal front end over the hotel REST API. Screens are routes guarded by
//! the session gate; the navigation menu is filtered by role; each screen's
//! requests run in a scope that is cancelled when the screen goes away.

pub mod app;
pub mod cli;
pub mod commands;
pub mod navigation;
pub mod routes;
pub mod scope;
pub mod shell;

pub use app::Console;
pub use commands::Output;
pub use shell::{Shell, View};
