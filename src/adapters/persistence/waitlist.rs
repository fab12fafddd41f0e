use std::{io, path::PathBuf, sync::Arc};

use async_trait::async_trait;
use thiserror::Error;

use crate::{
    adapters::persistence::storage::{FileStorage, InMemoryStorage, WaitlistStorage},
    app_error::{AppError, AppResult},
    domain::entities::waitlist_entry::WaitlistEntry,
    use_cases::waitlist::WaitlistRepo,
};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Email already exists in waitlist")]
    DuplicateEmail,

    #[error("Waitlist storage failure")]
    Storage(#[source] io::Error),
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicateEmail => AppError::DuplicateEmail,
            StoreError::Storage(source) => AppError::Storage(source.to_string()),
        }
    }
}

/// Duplicate-free, append-only list of signups persisted as one JSON array.
///
/// Every `add` reloads the medium and rewrites it completely. There is no
/// lock: two concurrent writers can each read the same snapshot and the
/// later write drops the earlier one's entry. Run a single writer.
#[derive(Clone)]
pub struct WaitlistStore {
    storage: Arc<dyn WaitlistStorage>,
}

impl WaitlistStore {
    pub fn new(storage: Arc<dyn WaitlistStorage>) -> Self {
        Self { storage }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(FileStorage::new(path)))
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryStorage::new()))
    }

    pub async fn add(&self, email: &str, ip: Option<&str>) -> Result<(), StoreError> {
        self.storage
            .ensure_location()
            .await
            .map_err(StoreError::Storage)?;

        let mut entries = self.load().await;
        if entries.iter().any(|entry| entry.matches_email(email)) {
            return Err(StoreError::DuplicateEmail);
        }

        entries.push(WaitlistEntry::new(email, ip.map(str::to_owned)));

        let content = serde_json::to_string_pretty(&entries)
            .map_err(|e| StoreError::Storage(e.into()))?;
        self.storage
            .write_all(&content)
            .await
            .map_err(StoreError::Storage)
    }

    pub async fn count(&self) -> usize {
        self.load().await.len()
    }

    pub async fn list(&self) -> Vec<WaitlistEntry> {
        self.load().await
    }

    // Absent, unreadable, or wrongly shaped content all read as an empty list.
    async fn load(&self) -> Vec<WaitlistEntry> {
        self.storage
            .read_all()
            .await
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }
}

#[async_trait]
impl WaitlistRepo for WaitlistStore {
    async fn add(&self, email: &str, ip: Option<&str>) -> AppResult<()> {
        Ok(WaitlistStore::add(self, email, ip).await?)
    }

    async fn count(&self) -> AppResult<usize> {
        Ok(WaitlistStore::count(self).await)
    }

    async fn list(&self) -> AppResult<Vec<WaitlistEntry>> {
        Ok(WaitlistStore::list(self).await)
    }
}
