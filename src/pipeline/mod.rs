use crate::block::{Block, BlockConfig, BlockId};
use itertools::Itertools;
use serde::Serialize;

mod references;
pub mod reorder;

pub use reorder::{DropHalf, DropPoint, drop_destination};

/// An ordered collection of blocks.
///
/// Every mutation keeps two invariants: block ids are unique, and each
/// block's `position` equals its index. Stale ids and out-of-range indices are
/// ignored; mutators report whether anything changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Pipeline {
    blocks: Vec<Block>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Blocks in execution order (ascending position).
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    pub fn get(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.iter().find(|block| block.id() == id)
    }

    pub fn block_at(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    pub fn index_of(&self, id: &BlockId) -> Option<usize> {
        self.blocks.iter().position(|block| block.id() == id)
    }

    pub fn contains(&self, id: &BlockId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = &BlockId> {
        self.blocks.iter().map(Block::id)
    }

    /// Appends a block at the end. Refused if the id is already present.
    pub fn push(&mut self, mut block: Block) -> bool {
        if self.contains(block.id()) {
            log::warn!("Refusing to add block '{}': id already in use", block.id());
            return false;
        }
        block.set_position(self.blocks.len());
        self.blocks.push(block);
        true
    }

    /// Removes a block and renumbers every block after it.
    pub fn remove(&mut self, id: &BlockId) -> Option<Block> {
        let index = self.index_of(id)?;
        let removed = self.blocks.remove(index);
        self.renumber_from(index);
        Some(removed)
    }

    pub fn set_title(&mut self, id: &BlockId, title: impl Into<String>) -> bool {
        match self.blocks.iter_mut().find(|block| block.id() == id) {
            Some(block) => {
                block.set_title(title.into());
                true
            }
            None => false,
        }
    }

    /// Replaces a block's configuration wholesale.
    ///
    /// A configuration of another variant would change the block's type, which
    /// is not supported; such updates are ignored.
    pub fn set_config(&mut self, id: &BlockId, config: BlockConfig) -> bool {
        let Some(block) = self.blocks.iter_mut().find(|block| block.id() == id) else {
            return false;
        };
        if block.block_type() != config.block_type() {
            log::warn!(
                "Ignoring config update for block '{}': expected {} config, got {}",
                id,
                block.block_type(),
                config.block_type()
            );
            return false;
        }
        block.set_config(config);
        true
    }

    /// Moves the block at `from` to `to`, where `to` indexes the sequence
    /// *after* the block has been taken out (splice semantics).
    ///
    /// Both indices must be below `len()`; anything else, and `from == to`,
    /// leaves the pipeline untouched.
    pub fn move_block(&mut self, from: usize, to: usize) -> bool {
        let len = self.blocks.len();
        if from >= len || to >= len || from == to {
            return false;
        }
        let block = self.blocks.remove(from);
        self.blocks.insert(to, block);
        self.renumber_from(from.min(to));
        true
    }

    /// True when ids are unique and every position equals its index.
    pub fn is_consistent(&self) -> bool {
        let dense = self
            .blocks
            .iter()
            .enumerate()
            .all(|(index, block)| block.position() == index);
        dense && self.ids().all_unique()
    }

    fn renumber_from(&mut self, start: usize) {
        for (index, block) in self.blocks.iter_mut().enumerate().skip(start) {
            block.set_position(index);
        }
    }
}

impl<'a> IntoIterator for &'a Pipeline {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
