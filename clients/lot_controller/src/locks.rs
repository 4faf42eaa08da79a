use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// One async mutex per lot index, created on first use.
///
/// Holding the guard serialises every transition on that lot; other lots
/// are unaffected.
#[derive(Debug, Default)]
pub struct LotLocks {
    table: Mutex<HashMap<u32, Arc<AsyncMutex<()>>>>,
}

impl LotLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, index: u32) -> OwnedMutexGuard<()> {
        let lock = {
            let mut table = self.table.lock();
            Arc::clone(table.entry(index).or_default())
        };
        lock.lock_owned().await
    }

    /// Number of lots that have been locked at least once.
    pub fn len(&self) -> usize {
        self.table.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.lock().is_empty()
    }
}
