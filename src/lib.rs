//! # Blockflow - Typed Block Pipeline Model
//!
//! **Blockflow** is the model behind a visual data-workflow builder: users
//! assemble a pipeline from typed blocks (source, transform, filter, join,
//! condition, output) and put them in order by dragging them around. The crate
//! owns the parts with real structure: the block variants and their
//! configuration shapes, the invariants that keep a pipeline consistent, and
//! the reorder algorithm that turns a drag gesture into a new position.
//!
//! Rendering, storage and execution of pipelines are left to the caller.
//!
//! ## Core Workflow
//!
//! 1.  **Build an editor**: `PipelineEditor::builder()` takes a workflow name
//!     and an id generator (sequential by default).
//! 2.  **Dispatch gestures**: call the editor's operations directly, or feed it
//!     `EditorCommand`s (for instance from a recorded `EditorScript`).
//! 3.  **Read the pipeline**: blocks come back in execution order with a dense,
//!     zero-based `position`. `Pipeline::unresolved_references` reports join and
//!     condition references an executor would not be able to resolve.
//! 4.  **Save**: `PipelineEditor::save` produces a `{name, blocks}` snapshot.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use blockflow::prelude::*;
//!
//! let mut editor = PipelineEditor::builder().with_name("Adults export").build();
//!
//! let users = editor.add_block(BlockType::Source, "Users");
//! let adults = editor.add_block(BlockType::Filter, "Adults only");
//! editor.add_block(BlockType::Output, "Warehouse");
//!
//! // Configure the filter.
//! editor.update_block_config(
//!     &adults,
//!     BlockConfig::Filter(FilterConfig {
//!         field: "age".to_string(),
//!         operator: FilterOperator::GreaterThan,
//!         value: serde_json::json!(18),
//!         ..FilterConfig::default()
//!     }),
//! );
//!
//! // Drag the output block (index 2) onto the top half of the source block.
//! editor.drag_start(2);
//! editor.drag_over(0, DropPoint::new(5.0, 40.0));
//! editor.drop_on(0, DropPoint::new(5.0, 40.0));
//!
//! assert_eq!(editor.blocks()[1].id(), &users);
//! println!("{}", PipelineFormatter::format_editor(&editor));
//! ```

pub mod block;
pub mod display;
pub mod editor;
pub mod error;
pub mod pipeline;
pub mod prelude;
pub mod script;
