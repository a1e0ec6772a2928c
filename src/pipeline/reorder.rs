//! Translation of drag-and-drop gestures into pipeline moves.
//!
//! A drop lands on a target block; which half of it the pointer is in decides
//! whether the dragged block goes before or after the target. The resulting
//! index is then expressed against the sequence with the dragged block already
//! removed, which is what [`Pipeline::move_block`](super::Pipeline::move_block)
//! expects.

use serde::{Deserialize, Serialize};

/// Which vertical half of the target block the pointer is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DropHalf {
    /// Insert before the target.
    Top,
    /// Insert after the target.
    Bottom,
}

/// Pointer location inside the target block's rendered bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropPoint {
    /// Distance from the top edge of the target.
    pub offset_y: f64,
    /// Rendered height of the target.
    pub height: f64,
}

impl DropPoint {
    pub fn new(offset_y: f64, height: f64) -> Self {
        Self { offset_y, height }
    }

    pub fn half(&self) -> DropHalf {
        if self.offset_y < self.height / 2.0 {
            DropHalf::Top
        } else {
            DropHalf::Bottom
        }
    }
}

impl From<DropPoint> for DropHalf {
    fn from(point: DropPoint) -> Self {
        point.half()
    }
}

/// Computes the post-removal destination index for dragging the block at
/// `from` onto the block at `target`.
///
/// Returns `None` when the drop would not move anything.
pub fn drop_destination(from: usize, target: usize, half: DropHalf) -> Option<usize> {
    if from == target {
        return None;
    }
    let mut destination = match half {
        DropHalf::Top => target,
        DropHalf::Bottom => target + 1,
    };
    // Taking the dragged block out shifts everything after it up by one.
    if from < target {
        destination -= 1;
    }
    (destination != from).then_some(destination)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_splits_at_midpoint() {
        assert_eq!(DropPoint::new(9.9, 20.0).half(), DropHalf::Top);
        assert_eq!(DropPoint::new(10.0, 20.0).half(), DropHalf::Bottom);
        assert_eq!(DropPoint::new(0.0, 0.0).half(), DropHalf::Bottom);
    }

    #[test]
    fn dragging_down_compensates_for_removal() {
        assert_eq!(drop_destination(0, 2, DropHalf::Bottom), Some(2));
        assert_eq!(drop_destination(0, 2, DropHalf::Top), Some(1));
        assert_eq!(drop_destination(1, 3, DropHalf::Top), Some(2));
    }

    #[test]
    fn dragging_up_uses_raw_target() {
        assert_eq!(drop_destination(3, 0, DropHalf::Top), Some(0));
        assert_eq!(drop_destination(3, 0, DropHalf::Bottom), Some(1));
    }

    #[test]
    fn drops_next_to_origin_are_noops() {
        assert_eq!(drop_destination(2, 2, DropHalf::Top), None);
        assert_eq!(drop_destination(1, 2, DropHalf::Top), None);
        assert_eq!(drop_destination(2, 1, DropHalf::Bottom), None);
    }
}
