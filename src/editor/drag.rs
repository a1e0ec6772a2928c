use crate::block::BlockId;
use crate::pipeline::{DropHalf, DropPoint, Pipeline, drop_destination};

/// Where the dragged block would land if dropped now. Purely advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropIndicator {
    pub index: usize,
    pub half: DropHalf,
}

#[derive(Debug, Clone, PartialEq)]
struct DraggedBlock {
    index: usize,
    id: BlockId,
}

/// State of an in-flight drag gesture.
///
/// Only [`DragSession::drop_on`] yields a move. Hover events replace the
/// single hovered indicator rather than accumulating, and a gesture that ends
/// without a drop produces nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragSession {
    dragged: Option<DraggedBlock>,
    hovered: Option<DropIndicator>,
}

impl DragSession {
    pub fn is_active(&self) -> bool {
        self.dragged.is_some()
    }

    pub fn dragged_id(&self) -> Option<&BlockId> {
        self.dragged.as_ref().map(|dragged| &dragged.id)
    }

    /// Index the dragged block had when the gesture started.
    pub fn origin_index(&self) -> Option<usize> {
        self.dragged.as_ref().map(|dragged| dragged.index)
    }

    pub fn hovered(&self) -> Option<DropIndicator> {
        self.hovered
    }

    /// Begins dragging the block at `index`. Ignored if there is no such block.
    pub fn start(&mut self, pipeline: &Pipeline, index: usize) -> bool {
        let Some(block) = pipeline.block_at(index) else {
            return false;
        };
        self.dragged = Some(DraggedBlock {
            index,
            id: block.id().clone(),
        });
        self.hovered = None;
        true
    }

    /// Records the block currently under the pointer.
    pub fn over(&mut self, pipeline: &Pipeline, index: usize, point: DropPoint) -> Option<DropIndicator> {
        if self.dragged.is_none() || index >= pipeline.len() {
            return None;
        }
        let indicator = DropIndicator {
            index,
            half: point.half(),
        };
        self.hovered = Some(indicator);
        Some(indicator)
    }

    pub fn leave(&mut self) {
        self.hovered = None;
    }

    /// Finishes the gesture on the block at `target` and returns the
    /// `(from, to)` pair to hand to [`Pipeline::move_block`], if any.
    ///
    /// The dragged block is located by id, so blocks removed or moved while
    /// the gesture was in flight cannot cause the wrong block to move.
    pub fn drop_on(&mut self, pipeline: &Pipeline, target: usize, point: DropPoint) -> Option<(usize, usize)> {
        self.hovered = None;
        let dragged = self.dragged.take()?;
        let from = pipeline.index_of(&dragged.id)?;
        if target >= pipeline.len() {
            return None;
        }
        drop_destination(from, target, point.half()).map(|to| (from, to))
    }

    /// Ends the gesture without moving anything.
    pub fn end(&mut self) {
        self.dragged = None;
        self.hovered = None;
    }
}
