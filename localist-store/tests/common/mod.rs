//! Common test utilities for integration tests
//!
//! Provides a `TestContext` over a fresh in-memory store plus helpers for
//! creating accounts, mirroring how an embedding application would drive the
//! data layer.

use localist_store::auth::{self, Session, SignUp};
use localist_store::Store;

/// Test context containing a fresh store
pub struct TestContext {
    pub store: Store,
}

impl TestContext {
    /// Creates a context over an empty in-memory store
    pub fn new() -> Self {
        init_tracing();
        Self {
            store: Store::in_memory(),
        }
    }

    /// Signs up an account, panicking on failure
    pub fn sign_up(&self, email: &str, password: &str) -> Session {
        auth::sign_up(
            &self.store,
            SignUp {
                email: email.to_string(),
                password: password.to_string(),
            },
        )
        .expect("sign up should succeed")
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
