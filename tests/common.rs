//! Common test utilities for building editors and pipelines.
use blockflow::prelude::*;

/// Creates an editor holding one block per title, all of `block_type`, with
/// the title doubling as the block id.
///
/// `editor_with(&["A", "B", "C"])` yields blocks `A`, `B`, `C` at positions 0, 1, 2.
#[allow(dead_code)]
pub fn editor_with(titles: &[&str]) -> PipelineEditor {
    PipelineEditor::builder()
        .with_blocks(titles.iter().map(|title| {
            Block::with_default_config(BlockId::from(*title), BlockType::Filter, *title)
        }))
        .build()
}

/// Block ids in pipeline order.
#[allow(dead_code)]
pub fn order(editor: &PipelineEditor) -> Vec<String> {
    editor
        .blocks()
        .iter()
        .map(|block| block.id().to_string())
        .collect()
}

/// Asserts that every block's position equals its index and ids are unique.
#[allow(dead_code)]
pub fn assert_consistent(editor: &PipelineEditor) {
    for (index, block) in editor.blocks().iter().enumerate() {
        assert_eq!(
            block.position(),
            index,
            "block '{}' has position {} at index {}",
            block.id(),
            block.position(),
            index
        );
    }
    assert!(editor.pipeline().is_consistent());
}

/// A pointer in the top half of a 40px tall block.
#[allow(dead_code)]
pub const TOP: DropPoint = DropPoint {
    offset_y: 5.0,
    height: 40.0,
};

/// A pointer in the bottom half of a 40px tall block.
#[allow(dead_code)]
pub const BOTTOM: DropPoint = DropPoint {
    offset_y: 35.0,
    height: 40.0,
};

/// A small recorded session: three blocks, a retitle, and one drag.
#[allow(dead_code)]
pub const SIMPLE_SCRIPT_JSON: &str = r#"{
  "name": "Customer export",
  "commands": [
    { "op": "addBlock", "blockType": "source", "title": "Customers" },
    { "op": "addBlock", "blockType": "filter" },
    { "op": "addBlock", "blockType": "output", "title": "Warehouse" },
    { "op": "updateBlockTitle", "id": "block-2", "title": "Active only" },
    { "op": "updateBlockConfig", "id": "block-2", "config": {
        "type": "filter",
        "config": { "field": "status", "operator": "equals", "value": "active" }
    } },
    { "op": "dragStart", "index": 2 },
    { "op": "dragOver", "index": 1, "point": { "offsetY": 30.0, "height": 40.0 } },
    { "op": "dragOver", "index": 1, "point": { "offsetY": 4.0, "height": 40.0 } },
    { "op": "drop", "index": 1, "point": { "offsetY": 4.0, "height": 40.0 } },
    { "op": "dragEnd" },
    { "op": "selectBlock", "id": "block-1" },
    { "op": "save" }
  ]
}"#;
