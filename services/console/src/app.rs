//! Console wiring
//!
//! One [`SharedSession`] feeds the bearer token to the one [`ApiClient`]; the
//! session gate, the staff endpoints and every resource client are built on
//! top of that pair.

use std::sync::Arc;

use anyhow::Result;
use api::HotelApi;
use auth::{AuthApi, SessionGate, SharedSession};
use common::{ApiClient, ClientConfig, FileStore, KeyValueStore};
use tracing::info;

use crate::cli::Command;
use crate::commands::{Output, execute};
use crate::shell::Shell;

pub struct Console<S> {
    shell: Shell<S>,
    api: HotelApi,
}

impl Console<FileStore> {
    /// Build the console from configuration, restoring any saved session
    pub fn open(config: &ClientConfig) -> Result<Self> {
        info!(
            "Using API at {} with session file {}",
            config.base_url,
            config.session_path.display()
        );

        let session = SharedSession::new();
        let client = ApiClient::new(config, Arc::new(session.clone()))?;
        let store = FileStore::new(config.session_path.clone());
        Ok(Self::assemble(store, session, client))
    }
}

impl<S: KeyValueStore> Console<S> {
    /// Build the console over an existing store and client
    ///
    /// `client` must read its token from `session`.
    pub fn assemble(store: S, session: SharedSession, client: ApiClient) -> Self {
        let gate = SessionGate::new(store, session, AuthApi::new(client.clone()));
        Self {
            shell: Shell::start(gate),
            api: HotelApi::new(client),
        }
    }

    /// Run one command
    pub async fn run(&mut self, command: Command) -> Result<Output> {
        execute(command, &mut self.shell, &self.api).await
    }

    pub fn shell(&self) -> &Shell<S> {
        &self.shell
    }
}
