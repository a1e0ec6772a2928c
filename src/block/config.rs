use super::kind::BlockType;
use super::model::BlockId;
use crate::error::ParseError;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Declares a closed set of configuration options serialized by their camelCase tag.
macro_rules! config_enum {
    ($(#[$meta:meta])* $name:ident, $kind:literal { $($variant:ident => $tag:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        pub enum $name {
            #[default]
            $(#[serde(rename = $tag)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $tag),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| ParseError::UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

config_enum!(
    /// Where a source block reads its data from.
    SourceType, "source type" {
        Api => "api",
        Db => "db",
        File => "file",
        GoogleSheets => "googleSheets",
    }
);

config_enum!(
    TransformType, "transform type" {
        Map => "map",
        Reduce => "reduce",
        Format => "format",
        Custom => "custom",
    }
);

config_enum!(
    FilterOperator, "filter operator" {
        Equals => "equals",
        NotEquals => "notEquals",
        Contains => "contains",
        GreaterThan => "greaterThan",
        LessThan => "lessThan",
    }
);

config_enum!(
    JoinType, "join type" {
        Inner => "inner",
        Left => "left",
        Right => "right",
        Full => "full",
    }
);

config_enum!(
    /// Where an output block delivers its data.
    OutputType, "output type" {
        Api => "api",
        Db => "db",
        File => "file",
        Notification => "notification",
    }
);

/// Configuration of a `Source` block.
///
/// Only the fields belonging to the active `source_type` are meaningful; the
/// others are kept so that switching the source type back and forth in an
/// inspector does not lose what the user typed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SourceConfig {
    pub source_type: SourceType,
    /// Used when `source_type` is `api`.
    pub api_url: String,
    /// Used when `source_type` is `db`.
    pub connection_id: String,
    pub query: String,
    /// Used when `source_type` is `file`.
    pub file_path: String,
    /// Uploaded file metadata, used by file and spreadsheet sources.
    pub file_id: String,
    pub file_name: String,
    pub file_type: String,
    pub sheet_name: String,
    pub sheets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransformConfig {
    pub transform_type: TransformType,
    /// Free-text expression, used when `transform_type` is `custom`.
    pub expression: String,
    pub field_mappings: AHashMap<String, String>,
}

/// Configuration of a `Filter` block.
///
/// `condition` and the structured `field`/`operator`/`value` triple are both
/// carried; neither one takes precedence here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterConfig {
    pub condition: String,
    pub field: String,
    pub operator: FilterOperator,
    pub value: serde_json::Value,
}

/// A single `left.field = right.field` pair of a join.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinCondition {
    pub left_field: String,
    pub right_field: String,
}

impl JoinCondition {
    pub fn new(left_field: impl Into<String>, right_field: impl Into<String>) -> Self {
        Self {
            left_field: left_field.into(),
            right_field: right_field.into(),
        }
    }
}

/// Configuration of a `Join` block.
///
/// `right_source_id` is a weak reference: it should name a `Source` block
/// when the pipeline is executed, but nothing here enforces that.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JoinConfig {
    pub join_type: JoinType,
    pub right_source_id: Option<BlockId>,
    pub join_conditions: Vec<JoinCondition>,
}

/// Configuration of a `Condition` block. Branch targets are weak references.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConditionConfig {
    pub condition: String,
    pub true_block_ids: BTreeSet<BlockId>,
    pub false_block_ids: BTreeSet<BlockId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OutputConfig {
    pub output_type: OutputType,
    pub connection_id: String,
    pub destination: String,
}

/// The variant-specific payload of a block. The variant *is* the block's type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "config", rename_all = "lowercase")]
pub enum BlockConfig {
    Source(SourceConfig),
    Transform(TransformConfig),
    Filter(FilterConfig),
    Join(JoinConfig),
    Condition(ConditionConfig),
    Output(OutputConfig),
}

impl BlockConfig {
    /// Returns the zero-value configuration for a block type.
    pub fn default_for(block_type: BlockType) -> Self {
        match block_type {
            BlockType::Source => BlockConfig::Source(SourceConfig::default()),
            BlockType::Transform => BlockConfig::Transform(TransformConfig::default()),
            BlockType::Filter => BlockConfig::Filter(FilterConfig::default()),
            BlockType::Join => BlockConfig::Join(JoinConfig::default()),
            BlockType::Condition => BlockConfig::Condition(ConditionConfig::default()),
            BlockType::Output => BlockConfig::Output(OutputConfig::default()),
        }
    }

    pub fn block_type(&self) -> BlockType {
        match self {
            BlockConfig::Source(_) => BlockType::Source,
            BlockConfig::Transform(_) => BlockType::Transform,
            BlockConfig::Filter(_) => BlockType::Filter,
            BlockConfig::Join(_) => BlockType::Join,
            BlockConfig::Condition(_) => BlockType::Condition,
            BlockConfig::Output(_) => BlockType::Output,
        }
    }

    /// Ids of other blocks this configuration points at, in declaration order.
    pub fn referenced_ids(&self) -> Vec<&BlockId> {
        match self {
            BlockConfig::Join(join) => join.right_source_id.iter().collect(),
            BlockConfig::Condition(cond) => cond
                .true_block_ids
                .iter()
                .chain(cond.false_block_ids.iter())
                .collect(),
            _ => Vec::new(),
        }
    }
}
