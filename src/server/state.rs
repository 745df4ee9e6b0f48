//! Shared application state for the HTTP server.

use crate::store::cache::PresenceCache;
use crate::users::UserDirectory;

/// Application state shared across all handlers.
///
/// Handlers reach the cache through this state instead of a process
/// global, so tests can build isolated instances.
#[derive(Debug)]
pub struct AppState {
    /// TTL cache over the parsed presence source.
    pub cache: PresenceCache,

    /// Optional user metadata backing the v2 endpoints.
    pub users: UserDirectory,
}

impl AppState {
    /// Creates new app state from its two collaborators.
    pub fn new(cache: PresenceCache, users: UserDirectory) -> Self {
        Self { cache, users }
    }
}
