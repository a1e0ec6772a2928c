use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of block variants a pipeline can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    Source,
    Transform,
    Filter,
    Join,
    Condition,
    Output,
}

impl BlockType {
    /// Every variant, in palette order.
    pub const ALL: [BlockType; 6] = [
        BlockType::Source,
        BlockType::Transform,
        BlockType::Filter,
        BlockType::Join,
        BlockType::Condition,
        BlockType::Output,
    ];

    /// The lower-case tag used in serialized blocks.
    pub fn as_str(self) -> &'static str {
        match self {
            BlockType::Source => "source",
            BlockType::Transform => "transform",
            BlockType::Filter => "filter",
            BlockType::Join => "join",
            BlockType::Condition => "condition",
            BlockType::Output => "output",
        }
    }

    /// The title a block of this type receives when added from the palette.
    pub fn default_title(self) -> &'static str {
        match self {
            BlockType::Source => "Data Source",
            BlockType::Transform => "Transform Data",
            BlockType::Filter => "Filter Data",
            BlockType::Join => "Join Data",
            BlockType::Condition => "Condition",
            BlockType::Output => "Data Output",
        }
    }

    /// Human-facing label, e.g. `"Filter Block"`.
    pub fn label(self) -> String {
        let tag = self.as_str();
        let mut chars = tag.chars();
        match chars.next() {
            Some(first) => format!("{}{} Block", first.to_ascii_uppercase(), chars.as_str()),
            None => String::new(),
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for BlockType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockType::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownBlockType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tags_case_insensitively() {
        assert_eq!("Filter".parse::<BlockType>(), Ok(BlockType::Filter));
        assert_eq!(" join ".parse::<BlockType>(), Ok(BlockType::Join));
    }

    #[test]
    fn rejects_unknown_tag() {
        let err = "merge".parse::<BlockType>().unwrap_err();
        assert_eq!(err, ParseError::UnknownBlockType("merge".to_string()));
        assert!(err.to_string().contains("merge"));
    }

    #[test]
    fn label_capitalizes_tag() {
        assert_eq!(BlockType::Condition.label(), "Condition Block");
        assert_eq!(BlockType::Source.label(), "Source Block");
    }
}
