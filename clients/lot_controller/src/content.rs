use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// Metadata document stored for every lot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataDocument {
    pub location: String,
    pub description: String,
    /// Locator of the lot's image
    pub image: String,
    /// Account that minted the lot, as shown to other users
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

impl MetadataDocument {
    pub fn to_bytes(&self) -> Result<Vec<u8>, ContentError> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ContentError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// Content-addressed blob storage for metadata documents and media.
///
/// `put` is not idempotent: storing the same bytes twice may yield two
/// locators.
#[async_trait::async_trait(?Send)]
pub trait ContentStore {
    async fn put(&self, bytes: Vec<u8>) -> Result<String, ContentError>;

    async fn get(&self, locator: &str) -> Result<Vec<u8>, ContentError>;

    /// Fetch and decode the metadata document at `locator`.
    async fn document(&self, locator: &str) -> Result<MetadataDocument, ContentError> {
        let bytes = self.get(locator).await?;
        MetadataDocument::from_bytes(&bytes)
    }
}

/// In-process content store handing out `mem://{n}` locators.
#[derive(Debug)]
pub struct MemoryContentStore {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
    next: AtomicU64,
    available: AtomicBool,
}

impl Default for MemoryContentStore {
    fn default() -> Self {
        Self {
            blobs: Mutex::new(HashMap::new()),
            next: AtomicU64::new(0),
            available: AtomicBool::new(true),
        }
    }
}

impl MemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with `Unavailable` until re-enabled.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.blobs.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.lock().is_empty()
    }

    fn ensure_available(&self) -> Result<(), ContentError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(ContentError::Unavailable("memory store offline".into()))
        }
    }
}

#[async_trait::async_trait(?Send)]
impl ContentStore for MemoryContentStore {
    async fn put(&self, bytes: Vec<u8>) -> Result<String, ContentError> {
        self.ensure_available()?;
        let locator = format!("mem://{}", self.next.fetch_add(1, Ordering::SeqCst));
        self.blobs.lock().insert(locator.clone(), bytes);
        Ok(locator)
    }

    async fn get(&self, locator: &str) -> Result<Vec<u8>, ContentError> {
        self.ensure_available()?;
        self.blobs
            .lock()
            .get(locator)
            .cloned()
            .ok_or_else(|| ContentError::NotFound(locator.to_string()))
    }
}
