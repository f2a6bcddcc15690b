//! Persisted "intro seen" flag.
//!
//! A single JSON record, `{"seen": true, "timestamp": <ms>}`, stored under
//! [`SEEN_STORAGE_KEY`]. It is read once when the intro mounts and written
//! once when it completes. Storage problems never reach the reader: a
//! failed read counts as "not seen" and a failed write is dropped.

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;

/// Key the record is stored under.
pub const SEEN_STORAGE_KEY: &str = "zenon-intro-seen";

/// Skip affordance text for first-time readers.
pub const SKIP_HINT_FIRST_VISIT: &str = "skip";

/// Skip affordance text for returning readers.
pub const SKIP_HINT_RETURNING: &str = "press any key to skip";

/// Skip affordance text for the given seen state.
pub fn skip_hint(seen_before: bool) -> &'static str {
    if seen_before {
        SKIP_HINT_RETURNING
    } else {
        SKIP_HINT_FIRST_VISIT
    }
}

/// The persisted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeenRecord {
    pub seen: bool,
    /// Milliseconds since the Unix epoch; absent in records written by
    /// older clients.
    #[serde(default)]
    pub timestamp: u64,
}

impl SeenRecord {
    /// A "seen" record stamped with the current time.
    pub fn now() -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or(0);
        Self {
            seen: true,
            timestamp,
        }
    }
}

/// Key-value storage for the seen record.
pub trait SeenStore: Send + Sync {
    /// Read the record, `None` if it was never written.
    fn load(&self) -> Result<Option<SeenRecord>>;

    /// Write the record.
    fn save(&self, record: &SeenRecord) -> Result<()>;
}

/// Read the flag; any storage problem reads as "not seen".
pub fn has_seen(store: &dyn SeenStore) -> bool {
    match store.load() {
        Ok(record) => record.is_some_and(|r| r.seen),
        Err(e) => {
            debug!(error = %e, "seen flag unavailable");
            false
        }
    }
}

/// Record that the intro completed; failures are logged and dropped.
pub fn mark_seen(store: &dyn SeenStore) {
    if let Err(e) = store.save(&SeenRecord::now()) {
        warn!(error = %e, "failed to persist seen flag");
    }
}

/// In-memory store holding the raw JSON text, like browser local storage.
#[derive(Debug, Default)]
pub struct MemorySeenStore {
    raw: Mutex<Option<String>>,
}

impl MemorySeenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with raw stored text (which need not be valid JSON).
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Mutex::new(Some(raw.into())),
        }
    }

    /// Raw stored text.
    pub fn raw(&self) -> Option<String> {
        self.raw
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl SeenStore for MemorySeenStore {
    fn load(&self) -> Result<Option<SeenRecord>> {
        match self.raw() {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn save(&self, record: &SeenRecord) -> Result<()> {
        let raw = serde_json::to_string(record)?;
        *self.raw.lock().unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(raw);
        Ok(())
    }
}

/// Store keeping the record as `<dir>/zenon-intro-seen.json`.
#[derive(Debug, Clone)]
pub struct FileSeenStore {
    path: PathBuf,
}

impl FileSeenStore {
    /// Store inside the given data directory (created on first write).
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            path: dir.as_ref().join(format!("{SEEN_STORAGE_KEY}.json")),
        }
    }

    /// Location of the record file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SeenStore for FileSeenStore {
    fn load(&self) -> Result<Option<SeenRecord>> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, record: &SeenRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_vec(record)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    struct Unavailable;

    impl SeenStore for Unavailable {
        fn load(&self) -> Result<Option<SeenRecord>> {
            Err(Error::Unavailable)
        }

        fn save(&self, _: &SeenRecord) -> Result<()> {
            Err(Error::Unavailable)
        }
    }

    #[test]
    fn memory_round_trip() {
        let store = MemorySeenStore::new();
        assert!(!has_seen(&store));

        mark_seen(&store);
        assert!(has_seen(&store));

        let raw = store.raw().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["seen"], true);
        assert!(json["timestamp"].as_u64().unwrap() > 0);
    }

    #[test]
    fn malformed_record_reads_as_unseen() {
        let store = MemorySeenStore::with_raw("not json");
        assert!(matches!(store.load(), Err(Error::Serialization(_))));
        assert!(!has_seen(&store));
    }

    #[test]
    fn record_without_timestamp_reads_as_seen() {
        let store = MemorySeenStore::with_raw(r#"{"seen":true}"#);
        assert_eq!(
            store.load().unwrap(),
            Some(SeenRecord {
                seen: true,
                timestamp: 0
            })
        );
        assert!(has_seen(&store));
    }

    #[test]
    fn explicit_false_reads_as_unseen() {
        let store = MemorySeenStore::with_raw(r#"{"seen":false,"timestamp":1}"#);
        assert!(!has_seen(&store));
    }

    #[test]
    fn unavailable_storage_is_silent() {
        assert!(!has_seen(&Unavailable));
        mark_seen(&Unavailable);
    }

    #[test]
    fn file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSeenStore::in_dir(dir.path().join("nested"));

        assert_eq!(store.load().unwrap(), None);
        mark_seen(&store);
        assert!(has_seen(&store));
        assert!(store.path().ends_with("zenon-intro-seen.json"));

        let reopened = FileSeenStore::in_dir(dir.path().join("nested"));
        assert!(has_seen(&reopened));
    }

    #[test]
    fn hints() {
        assert_eq!(skip_hint(false), "skip");
        assert_eq!(skip_hint(true), "press any key to skip");
    }
}
