//! Test app state builder for HTTP-level integration testing.
//!
//! This module provides `TestAppStateBuilder` which creates a minimal `AppState`
//! backed by an in-memory repository.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use secrecy::SecretString;

use crate::{
    adapters::http::app_state::AppState,
    application::use_cases::waitlist::{WaitlistRepoTrait, WaitlistUseCases},
    infra::config::AppConfig,
    test_utils::InMemoryWaitlistRepo,
};

pub struct TestAppStateBuilder {
    repo: Option<Arc<dyn WaitlistRepoTrait>>,
    allowed_origins: Vec<HeaderValue>,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            repo: None,
            allowed_origins: vec![HeaderValue::from_static("http://localhost:3000")],
        }
    }

    pub fn with_repo(mut self, repo: Arc<dyn WaitlistRepoTrait>) -> Self {
        self.repo = Some(repo);
        self
    }

    pub fn with_allowed_origins(mut self, origins: Vec<HeaderValue>) -> Self {
        self.allowed_origins = origins;
        self
    }

    pub fn build(self) -> AppState {
        let repo = self
            .repo
            .unwrap_or_else(|| Arc::new(InMemoryWaitlistRepo::new()));

        // Create minimal config for testing
        let config = Arc::new(AppConfig {
            bind_addr: "127.0.0.1:3001".parse::<SocketAddr>().unwrap(),
            database_url: SecretString::new("postgres://unused".into()),
            database_max_connections: 1,
            cors_allowed_origins: self.allowed_origins,
            log_file: None,
        });

        AppState {
            config,
            waitlist_use_cases: Arc::new(WaitlistUseCases::new(repo)),
        }
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
