//! Test data factories for creating valid test fixtures.
//!
//! Each factory function creates a complete, valid object with sensible defaults.
//! Use the closure parameter to override specific fields as needed.

use std::sync::Arc;

use crate::{
    adapters::persistence::{InMemoryStorage, WaitlistStore},
    domain::entities::waitlist_entry::WaitlistEntry,
};

pub const TEST_TIMESTAMP: &str = "2024-01-15T12:00:00.000Z";

/// Create a test waitlist entry with sensible defaults.
pub fn create_test_entry(overrides: impl FnOnce(&mut WaitlistEntry)) -> WaitlistEntry {
    let mut entry = WaitlistEntry {
        email: "user@example.com".to_string(),
        timestamp: TEST_TIMESTAMP.to_string(),
        ip: None,
    };
    overrides(&mut entry);
    entry
}

/// In-memory storage holding `entries` exactly as the file store would write them.
pub fn seeded_storage(entries: &[WaitlistEntry]) -> InMemoryStorage {
    let raw = serde_json::to_string_pretty(entries).expect("entries serialize");
    InMemoryStorage::with_content(raw)
}

pub fn seeded_store(entries: Vec<WaitlistEntry>) -> WaitlistStore {
    WaitlistStore::new(Arc::new(seeded_storage(&entries)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_store_lists_entries_in_order() {
        let store = seeded_store(vec![
            create_test_entry(|e| e.email = "a@example.com".to_string()),
            create_test_entry(|e| e.email = "b@example.com".to_string()),
        ]);

        let entries = store.list().await;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].email, "a@example.com");
        assert_eq!(entries[1].timestamp, TEST_TIMESTAMP);
    }
}
