use super::config::BlockConfig;
use super::kind::BlockType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, immutable identifier of a block.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for BlockId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One stage of a pipeline.
///
/// The block type is carried by the config variant, so a block's type and its
/// configuration shape cannot disagree. `position` is owned by the containing
/// [`Pipeline`](crate::pipeline::Pipeline), which keeps it equal to the
/// block's index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    id: BlockId,
    title: String,
    #[serde(flatten)]
    config: BlockConfig,
    position: usize,
}

impl Block {
    /// Creates a detached block. Its position is assigned once it joins a pipeline.
    pub fn new(id: BlockId, title: impl Into<String>, config: BlockConfig) -> Self {
        Self {
            id,
            title: title.into(),
            config,
            position: 0,
        }
    }

    /// Creates a detached block carrying the default configuration of `block_type`.
    pub fn with_default_config(id: BlockId, block_type: BlockType, title: impl Into<String>) -> Self {
        Self::new(id, title, BlockConfig::default_for(block_type))
    }

    pub fn id(&self) -> &BlockId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn block_type(&self) -> BlockType {
        self.config.block_type()
    }

    pub fn config(&self) -> &BlockConfig {
        &self.config
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Ids of other blocks this block points at. See [`BlockConfig::referenced_ids`].
    pub fn referenced_ids(&self) -> Vec<&BlockId> {
        self.config.referenced_ids()
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub(crate) fn set_config(&mut self, config: BlockConfig) {
        self.config = config;
    }

    pub(crate) fn set_position(&mut self, position: usize) {
        self.position = position;
    }
}
