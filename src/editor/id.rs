use crate::block::BlockId;
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of fresh block ids, injected into the editor.
///
/// Implementations should not repeat themselves; the editor still guards
/// against collisions with ids it has already handed out.
pub trait IdGenerator {
    fn next_id(&mut self) -> BlockId;
}

impl<F> IdGenerator for F
where
    F: FnMut() -> BlockId,
{
    fn next_id(&mut self) -> BlockId {
        self()
    }
}

/// Yields `block-1`, `block-2`, ... Deterministic, which keeps tests and
/// replayed scripts reproducible.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("block")
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> BlockId {
        let id = BlockId::new(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

/// Yields `block-<unix millis>`, bumped by one whenever the clock has not
/// advanced past the previous id.
#[derive(Debug, Clone, Default)]
pub struct TimestampIds {
    last: u128,
}

impl IdGenerator for TimestampIds {
    fn next_id(&mut self) -> BlockId {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or_default();
        self.last = now.max(self.last + 1);
        BlockId::new(format!("block-{}", self.last))
    }
}
