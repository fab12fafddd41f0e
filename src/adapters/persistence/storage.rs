//! Backing media for the waitlist store.
//!
//! A medium only knows how to hold one blob of text: make sure its location
//! exists, hand back the whole content, and overwrite the whole content.
//! Parsing and duplicate detection live in [`super::waitlist::WaitlistStore`].

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;

#[async_trait]
pub trait WaitlistStorage: Send + Sync {
    /// Idempotently create the container (parent directory for files).
    async fn ensure_location(&self) -> io::Result<()>;

    /// Full content, or `None` when the medium is absent or unreadable.
    async fn read_all(&self) -> Option<String>;

    /// Replace the full content.
    async fn write_all(&self, content: &str) -> io::Result<()>;
}

/// A single JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl WaitlistStorage for FileStorage {
    async fn ensure_location(&self) -> io::Result<()> {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => tokio::fs::create_dir_all(dir).await,
            _ => Ok(()),
        }
    }

    async fn read_all(&self) -> Option<String> {
        // Stray non-UTF-8 bytes must not make the whole list unreadable.
        let bytes = tokio::fs::read(&self.path).await.ok()?;
        Some(String::from_utf8_lossy(&bytes).into_owned())
    }

    async fn write_all(&self, content: &str) -> io::Result<()> {
        tokio::fs::write(&self.path, content).await
    }
}

/// Process-local medium. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    content: Mutex<Option<String>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: Mutex::new(Some(content.into())),
        }
    }

    /// Raw content as last written, for inspection.
    pub fn snapshot(&self) -> Option<String> {
        self.content.lock().ok().and_then(|guard| guard.clone())
    }
}

#[async_trait]
impl WaitlistStorage for InMemoryStorage {
    async fn ensure_location(&self) -> io::Result<()> {
        Ok(())
    }

    async fn read_all(&self) -> Option<String> {
        self.snapshot()
    }

    async fn write_all(&self, content: &str) -> io::Result<()> {
        let mut guard = self
            .content
            .lock()
            .map_err(|_| io::Error::other("in-memory storage lock poisoned"))?;
        *guard = Some(content.to_string());
        Ok(())
    }
}
