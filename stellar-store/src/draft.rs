//! Draft persistence bridge
//!
//! Carries an in-progress cart across an authentication redirect: the
//! storefront stashes the cart as a JSON blob before sending the user to
//! the login page and restores it once, after authentication succeeds.
//! `take` consumes the blob; a second `take` returns `None`.

use parking_lot::Mutex;
use shared::Cart;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Draft storage error
#[derive(Debug, Error)]
pub enum DraftError {
    #[error("draft I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("draft serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Write-once/read-once storage for the in-progress cart
pub trait DraftStore: Send + Sync {
    /// Persist the cart, replacing any previous draft
    fn stash(&self, cart: &Cart) -> Result<(), DraftError>;

    /// Read and clear the stored draft
    fn take(&self) -> Result<Option<Cart>, DraftError>;
}

/// In-memory draft store
///
/// Keeps the serialized JSON form rather than the cart value, matching
/// the browser-storage contract it stands in for.
#[derive(Debug, Default)]
pub struct MemoryDraftStore {
    blob: Mutex<Option<String>>,
}

impl MemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DraftStore for MemoryDraftStore {
    fn stash(&self, cart: &Cart) -> Result<(), DraftError> {
        let json = serde_json::to_string(cart)?;
        *self.blob.lock() = Some(json);
        Ok(())
    }

    fn take(&self) -> Result<Option<Cart>, DraftError> {
        match self.blob.lock().take() {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }
}

/// File-backed draft store
#[derive(Debug)]
pub struct FileDraftStore {
    path: PathBuf,
}

impl FileDraftStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl DraftStore for FileDraftStore {
    fn stash(&self, cart: &Cart) -> Result<(), DraftError> {
        let json = serde_json::to_string(cart)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    fn take(&self) -> Result<Option<Cart>, DraftError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json = std::fs::read_to_string(&self.path)?;
        std::fs::remove_file(&self.path)?;
        Ok(Some(serde_json::from_str(&json)?))
    }
}
