use super::kind::BlockType;
use serde::Serialize;

/// An entry offered to the user for adding a new block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteEntry {
    pub category: &'static str,
    pub block_type: BlockType,
    pub title: &'static str,
}

/// The default block palette, grouped by category in display order.
pub fn palette() -> Vec<PaletteEntry> {
    BlockType::ALL
        .into_iter()
        .map(|block_type| PaletteEntry {
            category: category_of(block_type),
            block_type,
            title: block_type.default_title(),
        })
        .collect()
}

fn category_of(block_type: BlockType) -> &'static str {
    match block_type {
        BlockType::Source => "Sources",
        BlockType::Transform => "Transformations",
        BlockType::Filter => "Filters",
        BlockType::Join => "Joins",
        BlockType::Condition => "Conditionals",
        BlockType::Output => "Outputs",
    }
}
