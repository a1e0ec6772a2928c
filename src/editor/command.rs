use crate::block::{BlockConfig, BlockId, BlockType};
use crate::pipeline::DropPoint;
use serde::{Deserialize, Serialize};

/// A single user gesture, as dispatched by a rendering surface.
///
/// Every mutation of a [`PipelineEditor`](super::PipelineEditor) can be
/// expressed as one of these and applied with
/// [`PipelineEditor::dispatch`](super::PipelineEditor::dispatch).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum EditorCommand {
    /// Appends a block. Without a title the block type's palette title is used.
    AddBlock {
        block_type: BlockType,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
    UpdateBlockConfig {
        id: BlockId,
        config: BlockConfig,
    },
    UpdateBlockTitle {
        id: BlockId,
        title: String,
    },
    DeleteBlock {
        id: BlockId,
    },
    MoveBlock {
        from: usize,
        to: usize,
    },
    SelectBlock {
        id: BlockId,
    },
    ClearSelection,
    Rename {
        name: String,
    },
    DragStart {
        index: usize,
    },
    DragOver {
        index: usize,
        point: DropPoint,
    },
    DragLeave,
    Drop {
        index: usize,
        point: DropPoint,
    },
    DragEnd,
    Save,
}

impl EditorCommand {
    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            EditorCommand::AddBlock { .. } => "addBlock",
            EditorCommand::UpdateBlockConfig { .. } => "updateBlockConfig",
            EditorCommand::UpdateBlockTitle { .. } => "updateBlockTitle",
            EditorCommand::DeleteBlock { .. } => "deleteBlock",
            EditorCommand::MoveBlock { .. } => "moveBlock",
            EditorCommand::SelectBlock { .. } => "selectBlock",
            EditorCommand::ClearSelection => "clearSelection",
            EditorCommand::Rename { .. } => "rename",
            EditorCommand::DragStart { .. } => "dragStart",
            EditorCommand::DragOver { .. } => "dragOver",
            EditorCommand::DragLeave => "dragLeave",
            EditorCommand::Drop { .. } => "drop",
            EditorCommand::DragEnd => "dragEnd",
            EditorCommand::Save => "save",
        }
    }
}
