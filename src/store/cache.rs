//! Time-bounded memoization of the parsed presence source.
//!
//! A single-slot cache wrapping [`parser::parse_file`]. The slot lock is
//! held across both the hit check and the miss-path re-parse, so
//! concurrent misses serialize instead of racing the file read.

use super::parser;
use super::types::PresenceStore;
use crate::error::Result;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Default time-to-live for the cached store.
pub const DEFAULT_TTL: Duration = Duration::from_secs(600);

/// One cached parse result with its stamp.
#[derive(Debug)]
struct CacheSlot {
    computed_at: Instant,
    store: Arc<PresenceStore>,
}

/// Single-slot TTL cache around the presence parser.
///
/// Owns the only mutable state in the process; handlers hold it through
/// the shared application state rather than a global.
#[derive(Debug)]
pub struct PresenceCache {
    source: PathBuf,
    ttl: Duration,
    slot: Mutex<Option<CacheSlot>>,
}

impl PresenceCache {
    /// Creates a cache over the presence source at `source`.
    pub fn new(source: PathBuf, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            slot: Mutex::new(None),
        }
    }

    /// Path of the presence source this cache reads.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Returns the parsed store, re-reading the source when the slot is
    /// empty or older than the TTL.
    ///
    /// A failed re-parse leaves the previous slot in place, so the next
    /// call retries. There is no invalidation beyond TTL expiry.
    pub fn get(&self) -> Result<Arc<PresenceStore>> {
        let mut slot = self.slot.lock().unwrap();

        if let Some(cached) = slot.as_ref() {
            if cached.computed_at.elapsed() < self.ttl {
                return Ok(Arc::clone(&cached.store));
            }
        }

        let store = Arc::new(parser::parse_file(&self.source)?);
        *slot = Some(CacheSlot {
            computed_at: Instant::now(),
            store: Arc::clone(&store),
        });

        tracing::info!(
            source = %self.source.display(),
            users = store.user_count(),
            records = store.record_count(),
            "presence source parsed"
        );

        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FIRST: &str = "10,2013-09-10,09:39:05,17:59:52\n";
    const SECOND: &str = "11,2013-09-09,09:12:14,15:54:17\n";

    fn write_source(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_hit_within_ttl_skips_reread() {
        let file = write_source(FIRST);
        let cache = PresenceCache::new(file.path().to_path_buf(), Duration::from_secs(3600));

        let first = cache.get().unwrap();

        // Rewrite the source; a fresh read would now see user 11.
        std::fs::write(file.path(), SECOND).unwrap();

        let second = cache.get().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(second.records_for(10).is_some());
        assert!(second.records_for(11).is_none());
    }

    #[test]
    fn test_expired_slot_rereads() {
        let file = write_source(FIRST);
        let cache = PresenceCache::new(file.path().to_path_buf(), Duration::ZERO);

        let first = cache.get().unwrap();
        assert!(first.records_for(10).is_some());

        std::fs::write(file.path(), SECOND).unwrap();

        let second = cache.get().unwrap();
        assert!(second.records_for(11).is_some());
        assert!(second.records_for(10).is_none());
    }

    #[test]
    fn test_missing_source_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let cache = PresenceCache::new(dir.path().join("absent.csv"), DEFAULT_TTL);
        assert!(cache.get().is_err());
    }

    #[test]
    fn test_failed_reread_then_recovers() {
        let file = write_source(FIRST);
        let path = file.path().to_path_buf();
        let cache = PresenceCache::new(path.clone(), Duration::ZERO);

        let first = cache.get().unwrap();
        assert_eq!(first.user_count(), 1);

        // Source disappears: the expired slot stays, calls keep failing
        // until the file comes back.
        drop(file);
        assert!(cache.get().is_err());

        std::fs::write(&path, SECOND).unwrap();
        let recovered = cache.get().unwrap();
        assert!(recovered.records_for(11).is_some());
        std::fs::remove_file(&path).ok();
    }
}
