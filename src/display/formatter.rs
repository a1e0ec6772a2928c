use crate::block::{Block, BlockConfig, SourceType, TransformType};
use crate::editor::PipelineEditor;
use itertools::Itertools;

/// Formats pipelines into human-readable listings.
pub struct PipelineFormatter;

impl PipelineFormatter {
    /// Format the editor's pipeline in execution order, marking the selected block.
    pub fn format_editor(editor: &PipelineEditor) -> String {
        let mut output = format!(
            "======== WORKFLOW: {} ({} blocks) ========\n",
            editor.name(),
            editor.pipeline().len()
        );

        if editor.pipeline().is_empty() {
            output.push_str("(empty pipeline)\n");
        }
        for block in editor.pipeline() {
            let selected = editor.selected_id() == Some(block.id());
            output.push_str(&Self::format_block(block, selected));
            output.push('\n');
        }

        let problems = editor.pipeline().unresolved_references();
        if !problems.is_empty() {
            output.push_str("--- UNRESOLVED REFERENCES ---\n");
            for problem in problems {
                output.push_str(&format!("  ! {}\n", problem));
            }
        }
        output
    }

    /// Format a single block as a two-line entry.
    pub fn format_block(block: &Block, selected: bool) -> String {
        format!(
            "{:04}: {:<12} {} ({}){}\n      {}",
            block.position(),
            format!("[{}]", block.block_type()),
            block.title(),
            block.id(),
            if selected { " *" } else { "" },
            Self::summarize(block.config())
        )
    }

    /// One-line description of the meaningful parts of a configuration.
    pub fn summarize(config: &BlockConfig) -> String {
        match config {
            BlockConfig::Source(source) => {
                let detail = match source.source_type {
                    SourceType::Api => source.api_url.clone(),
                    SourceType::Db => [source.connection_id.as_str(), source.query.as_str()]
                        .into_iter()
                        .filter(|part| !part.is_empty())
                        .join(": "),
                    SourceType::File => source.file_path.clone(),
                    SourceType::GoogleSheets => [source.file_name.as_str(), source.sheet_name.as_str()]
                        .into_iter()
                        .filter(|part| !part.is_empty())
                        .join(" / "),
                };
                Self::with_detail(format!("sourceType={}", source.source_type), &detail)
            }
            BlockConfig::Transform(transform) => {
                let detail = if transform.transform_type == TransformType::Custom {
                    transform.expression.clone()
                } else {
                    transform
                        .field_mappings
                        .iter()
                        .sorted()
                        .map(|(from, to)| format!("{} -> {}", from, to))
                        .join(", ")
                };
                Self::with_detail(format!("transformType={}", transform.transform_type), &detail)
            }
            BlockConfig::Filter(filter) => {
                if filter.field.is_empty() {
                    Self::with_detail(format!("operator={}", filter.operator), &filter.condition)
                } else {
                    format!("{} {} {}", filter.field, filter.operator, filter.value)
                }
            }
            BlockConfig::Join(join) => {
                let right = join
                    .right_source_id
                    .as_ref()
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "?".to_string());
                let on = join
                    .join_conditions
                    .iter()
                    .map(|c| format!("{} = {}", c.left_field, c.right_field))
                    .join(" AND ");
                let head = format!("{} join with {}", join.join_type, right);
                if on.is_empty() {
                    head
                } else {
                    format!("{} on {}", head, on)
                }
            }
            BlockConfig::Condition(cond) => format!(
                "if {} then [{}] else [{}]",
                if cond.condition.is_empty() { "?" } else { cond.condition.as_str() },
                cond.true_block_ids.iter().join(", "),
                cond.false_block_ids.iter().join(", ")
            ),
            BlockConfig::Output(output) => {
                let target = [output.connection_id.as_str(), output.destination.as_str()]
                    .into_iter()
                    .filter(|part| !part.is_empty())
                    .join(" / ");
                Self::with_detail(format!("outputType={}", output.output_type), &target)
            }
        }
    }

    fn with_detail(head: String, detail: &str) -> String {
        if detail.is_empty() {
            head
        } else {
            format!("{}: {}", head, detail)
        }
    }
}
