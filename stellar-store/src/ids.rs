//! Instance id generation for cart entries
//!
//! Each cart entry gets a locally generated unique instance id so the
//! same catalog ingredient can appear several times in one order. The
//! generator is injected so tests can supply deterministic ids.

use std::sync::atomic::{AtomicU64, Ordering};

/// Instance id source
pub trait InstanceIds: Send + Sync {
    /// Produce the next unique instance id
    fn next_id(&self) -> String;
}

/// Random v4 UUIDs, the production default
#[derive(Debug, Default)]
pub struct UuidInstanceIds;

impl InstanceIds for UuidInstanceIds {
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Deterministic `{prefix}-{n}` ids for tests
#[derive(Debug)]
pub struct SequentialInstanceIds {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialInstanceIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl Default for SequentialInstanceIds {
    fn default() -> Self {
        Self::new("inst")
    }
}

impl InstanceIds for SequentialInstanceIds {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{}", self.prefix, n)
    }
}
