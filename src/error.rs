use crate::block::BlockId;
use thiserror::Error;

/// Errors that can occur while turning text into block model values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown block type '{0}', expected one of: source, transform, filter, join, condition, output")]
    UnknownBlockType(String),

    #[error("Unknown {kind} '{value}'")]
    UnknownVariant { kind: &'static str, value: String },
}

/// A block reference that does not resolve inside its pipeline.
///
/// These are reported, never enforced: an executor decides what to do with them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReferenceError {
    #[error("Join block '{join_id}' references right source '{target_id}', which does not exist")]
    MissingJoinSource { join_id: BlockId, target_id: BlockId },

    #[error(
        "Join block '{join_id}' references '{target_id}' as its right source, but that block is a {found} block"
    )]
    JoinSourceNotSource {
        join_id: BlockId,
        target_id: BlockId,
        found: crate::block::BlockType,
    },

    #[error("Condition block '{condition_id}' branches to '{target_id}', which does not exist")]
    MissingBranchTarget {
        condition_id: BlockId,
        target_id: BlockId,
    },
}

/// Errors that can occur while loading or writing editor scripts.
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Could not access script file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse script JSON: {0}")]
    Json(#[from] serde_json::Error),
}
