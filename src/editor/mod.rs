use crate::block::{Block, BlockConfig, BlockId, BlockType, PaletteEntry};
use crate::pipeline::{DropPoint, Pipeline};
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

mod command;
mod drag;
mod id;

pub use command::EditorCommand;
pub use drag::{DragSession, DropIndicator};
pub use id::{IdGenerator, SequentialIds, TimestampIds};

/// Name given to a workflow when none is configured.
pub const DEFAULT_WORKFLOW_NAME: &str = "New Workflow";

/// The `{name, blocks}` payload produced when a workflow is saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowSnapshot {
    pub name: String,
    pub blocks: Vec<Block>,
}

impl WorkflowSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Owns a pipeline and the transient editing state around it.
///
/// This is the only place blocks are created, edited, reordered or deleted.
/// Operations never fail: references to blocks that no longer exist are
/// ignored, and each mutator reports whether it changed anything.
pub struct PipelineEditor {
    name: String,
    pipeline: Pipeline,
    selected: Option<BlockId>,
    drag: DragSession,
    ids: Box<dyn IdGenerator>,
    issued: AHashSet<BlockId>,
}

pub struct EditorBuilder {
    name: String,
    ids: Box<dyn IdGenerator>,
    blocks: Vec<Block>,
}

impl EditorBuilder {
    pub fn new() -> Self {
        Self {
            name: DEFAULT_WORKFLOW_NAME.to_string(),
            ids: Box::new(SequentialIds::default()),
            blocks: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Seeds the pipeline. Blocks are appended in order; duplicate ids are dropped.
    pub fn with_blocks(mut self, blocks: impl IntoIterator<Item = Block>) -> Self {
        self.blocks.extend(blocks);
        self
    }

    pub fn build(self) -> PipelineEditor {
        let mut pipeline = Pipeline::new();
        let mut issued = AHashSet::new();
        for block in self.blocks {
            let id = block.id().clone();
            if pipeline.push(block) {
                issued.insert(id);
            }
        }
        PipelineEditor {
            name: self.name,
            pipeline,
            selected: None,
            drag: DragSession::default(),
            ids: self.ids,
            issued,
        }
    }
}

impl Default for EditorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for PipelineEditor {
    fn default() -> Self {
        EditorBuilder::new().build()
    }
}

impl fmt::Debug for PipelineEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineEditor")
            .field("name", &self.name)
            .field("pipeline", &self.pipeline)
            .field("selected", &self.selected)
            .field("drag", &self.drag)
            .finish_non_exhaustive()
    }
}

impl PipelineEditor {
    pub fn builder() -> EditorBuilder {
        EditorBuilder::new()
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    pub fn blocks(&self) -> &[Block] {
        self.pipeline.blocks()
    }

    pub fn selected_id(&self) -> Option<&BlockId> {
        self.selected.as_ref()
    }

    pub fn selected_block(&self) -> Option<&Block> {
        self.selected.as_ref().and_then(|id| self.pipeline.get(id))
    }

    pub fn drag(&self) -> &DragSession {
        &self.drag
    }

    pub fn rename(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if name == self.name {
            return false;
        }
        log::debug!("Renaming workflow '{}' to '{}'", self.name, name);
        self.name = name;
        true
    }

    /// Appends a block of `block_type` with its default config and selects it.
    pub fn add_block(&mut self, block_type: BlockType, title: impl Into<String>) -> BlockId {
        let id = self.fresh_id();
        let block = Block::with_default_config(id.clone(), block_type, title);
        // `fresh_id` never returns an id present in the pipeline, so this cannot be refused.
        self.pipeline.push(block);
        log::debug!(
            "Added {} block '{}' at position {}",
            block_type,
            id,
            self.pipeline.len() - 1
        );
        self.selected = Some(id.clone());
        id
    }

    pub fn add_from_palette(&mut self, entry: &PaletteEntry) -> BlockId {
        self.add_block(entry.block_type, entry.title)
    }

    pub fn update_block_config(&mut self, id: &BlockId, config: BlockConfig) -> bool {
        let changed = self.pipeline.set_config(id, config);
        if !changed {
            log::debug!("Config update for '{}' ignored", id);
        }
        changed
    }

    pub fn update_block_title(&mut self, id: &BlockId, title: impl Into<String>) -> bool {
        let changed = self.pipeline.set_title(id, title);
        if !changed {
            log::debug!("Title update for unknown block '{}' ignored", id);
        }
        changed
    }

    pub fn delete_block(&mut self, id: &BlockId) -> bool {
        if self.pipeline.remove(id).is_none() {
            log::debug!("Delete of unknown block '{}' ignored", id);
            return false;
        }
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
        log::debug!("Deleted block '{}', {} remaining", id, self.pipeline.len());
        true
    }

    /// Splice-moves a block; see [`Pipeline::move_block`].
    pub fn move_block(&mut self, from: usize, to: usize) -> bool {
        let moved = self.pipeline.move_block(from, to);
        if moved {
            log::debug!("Moved block from index {} to {}", from, to);
        } else {
            log::debug!("Move {} -> {} ignored (len {})", from, to, self.pipeline.len());
        }
        moved
    }

    /// Selects an existing block. Unknown ids leave the selection unchanged.
    pub fn select_block(&mut self, id: &BlockId) -> bool {
        if !self.pipeline.contains(id) {
            log::debug!("Selection of unknown block '{}' ignored", id);
            return false;
        }
        if self.selected.as_ref() == Some(id) {
            return false;
        }
        self.selected = Some(id.clone());
        true
    }

    pub fn clear_selection(&mut self) -> bool {
        self.selected.take().is_some()
    }

    pub fn drag_start(&mut self, index: usize) -> bool {
        self.drag.start(&self.pipeline, index)
    }

    pub fn drag_over(&mut self, index: usize, point: DropPoint) -> Option<DropIndicator> {
        self.drag.over(&self.pipeline, index, point)
    }

    pub fn drag_leave(&mut self) {
        self.drag.leave();
    }

    /// Completes a drag gesture on the block at `target`. The pipeline only
    /// changes when a drag was started and the drop translates to a real move.
    pub fn drop_on(&mut self, target: usize, point: DropPoint) -> bool {
        match self.drag.drop_on(&self.pipeline, target, point) {
            Some((from, to)) => self.move_block(from, to),
            None => {
                log::debug!("Drop on index {} produced no move", target);
                false
            }
        }
    }

    pub fn drag_end(&mut self) {
        self.drag.end();
    }

    pub fn snapshot(&self) -> WorkflowSnapshot {
        WorkflowSnapshot {
            name: self.name.clone(),
            blocks: self.pipeline.blocks().to_vec(),
        }
    }

    /// Emits the workflow snapshot to the log and returns it. Storing it is
    /// left to the caller.
    pub fn save(&self) -> WorkflowSnapshot {
        let snapshot = self.snapshot();
        match snapshot.to_json() {
            Ok(json) => log::info!("Saving workflow: {}", json),
            Err(e) => log::error!("Could not serialize workflow '{}': {}", snapshot.name, e),
        }
        snapshot
    }

    /// Applies one command. Returns whether the pipeline, selection or name changed.
    pub fn dispatch(&mut self, command: EditorCommand) -> bool {
        log::trace!("Dispatching {}", command.name());
        match command {
            EditorCommand::AddBlock { block_type, title } => {
                let title = title.unwrap_or_else(|| block_type.default_title().to_string());
                self.add_block(block_type, title);
                true
            }
            EditorCommand::UpdateBlockConfig { id, config } => self.update_block_config(&id, config),
            EditorCommand::UpdateBlockTitle { id, title } => self.update_block_title(&id, title),
            EditorCommand::DeleteBlock { id } => self.delete_block(&id),
            EditorCommand::MoveBlock { from, to } => self.move_block(from, to),
            EditorCommand::SelectBlock { id } => self.select_block(&id),
            EditorCommand::ClearSelection => self.clear_selection(),
            EditorCommand::Rename { name } => self.rename(name),
            EditorCommand::DragStart { index } => {
                self.drag_start(index);
                false
            }
            EditorCommand::DragOver { index, point } => {
                self.drag_over(index, point);
                false
            }
            EditorCommand::DragLeave => {
                self.drag_leave();
                false
            }
            EditorCommand::Drop { index, point } => self.drop_on(index, point),
            EditorCommand::DragEnd => {
                self.drag_end();
                false
            }
            EditorCommand::Save => {
                self.save();
                false
            }
        }
    }

    /// Applies commands in order and returns how many changed state.
    pub fn dispatch_all(&mut self, commands: impl IntoIterator<Item = EditorCommand>) -> usize {
        commands
            .into_iter()
            .map(|command| self.dispatch(command))
            .filter(|changed| *changed)
            .count()
    }

    /// Draws ids until one has never been seen by this editor.
    fn fresh_id(&mut self) -> BlockId {
        let base = self.ids.next_id();
        let mut id = base.clone();
        let mut suffix = 1;
        while self.issued.contains(&id) || self.pipeline.contains(&id) {
            log::warn!("Id generator repeated '{}', disambiguating", id);
            id = BlockId::new(format!("{}-{}", base, suffix));
            suffix += 1;
        }
        self.issued.insert(id.clone());
        id
    }
}
