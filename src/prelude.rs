//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the blockflow crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use blockflow::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let script = EditorScript::from_file("path/to/script.json")?;
//! let mut editor = PipelineEditor::new();
//! script.replay(&mut editor);
//!
//! println!("{}", PipelineFormatter::format_editor(&editor));
//! # Ok(())
//! # }
//! ```

// Block model
pub use crate::block::{
    Block, BlockConfig, BlockId, BlockType, ConditionConfig, FilterConfig, FilterOperator,
    JoinCondition, JoinConfig, JoinType, OutputConfig, OutputType, PaletteEntry, SourceConfig,
    SourceType, TransformConfig, TransformType, palette,
};

// Pipeline and reordering
pub use crate::pipeline::{DropHalf, DropPoint, Pipeline, drop_destination};

// Editor state
pub use crate::editor::{
    DragSession, DropIndicator, EditorBuilder, EditorCommand, IdGenerator, PipelineEditor,
    SequentialIds, TimestampIds, WorkflowSnapshot,
};

// Scripts and formatting
pub use crate::display::PipelineFormatter;
pub use crate::script::EditorScript;

// Error types
pub use crate::error::{ParseError, ReferenceError, ScriptError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
