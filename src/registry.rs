use std::sync::{Arc, Mutex};

use dashmap::DashMap;
use tracing::debug;

use crate::backend::AthenaBackend;

/// Account id used by test harnesses when none is configured.
pub const DEFAULT_ACCOUNT_ID: &str = "123456789012";

/// An (account, region) pair identifying one backend instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scope {
    pub account_id: String,
    pub region: String,
}

impl Scope {
    pub fn new(account_id: &str, region: &str) -> Self {
        Self {
            account_id: account_id.to_string(),
            region: region.to_string(),
        }
    }
}

/// Explicit registry of per-scope backends, owned by the service host or
/// test harness.
///
/// Backends are created lazily on first touch. Each is wrapped in its own
/// mutex so mutations within a scope are serialized while distinct scopes
/// proceed independently; the registry map itself is lock-free for readers.
#[derive(Default)]
pub struct BackendRegistry {
    backends: DashMap<Scope, Arc<Mutex<AthenaBackend>>>,
}

impl BackendRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the backend for a scope, creating it on first access.
    pub fn scope(&self, account_id: &str, region: &str) -> Arc<Mutex<AthenaBackend>> {
        let key = Scope::new(account_id, region);
        self.backends
            .entry(key)
            .or_insert_with(|| {
                debug!(account_id, region, "creating backend for scope");
                Arc::new(Mutex::new(AthenaBackend::new(account_id, region)))
            })
            .clone()
    }

    /// Drop all backends, e.g. between test cases. Outstanding handles keep
    /// their (now detached) backend alive; the next `scope` call starts
    /// fresh.
    pub fn reset(&self) {
        self.backends.clear();
    }
}
