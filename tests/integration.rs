//! Integration tests for blockflow
//!
//! End-to-end tests that replay recorded editor sessions.
//!
mod common;
use blockflow::prelude::*;
use common::*;
use std::fs;

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_simple_script_replay() {
        let script = EditorScript::from_json(SIMPLE_SCRIPT_JSON).expect("Failed to parse script");
        assert_eq!(script.commands.len(), 12);

        let mut editor = PipelineEditor::new();
        let changed = script.replay(&mut editor);

        assert_eq!(editor.name(), "Customer export");
        assert_eq!(order(&editor), vec!["block-1", "block-3", "block-2"]);
        assert_eq!(changed, 7);
        assert_eq!(editor.selected_id(), Some(&BlockId::from("block-1")));
        assert_consistent(&editor);

        let filter = editor.pipeline().get(&BlockId::from("block-2")).unwrap();
        assert_eq!(filter.title(), "Active only");
        let BlockConfig::Filter(config) = filter.config() else {
            panic!("expected a filter config");
        };
        assert_eq!(config.field, "status");
        assert_eq!(config.operator, FilterOperator::Equals);
        assert_eq!(config.value, serde_json::json!("active"));
        assert_eq!(config.condition, "");
        assert!(!editor.drag().is_active());
    }

    #[test]
    fn test_listing_after_replay() {
        let script = EditorScript::from_json(SIMPLE_SCRIPT_JSON).unwrap();
        let mut editor = PipelineEditor::new();
        script.replay(&mut editor);

        let listing = PipelineFormatter::format_editor(&editor);
        println!("{}", listing);
        assert!(listing.contains("WORKFLOW: Customer export (3 blocks)"));
        assert!(listing.contains("Customers (block-1) *"));
        assert!(listing.contains("0001: [output]"));
        assert!(listing.contains("status equals \"active\""));
        assert!(!listing.contains("UNRESOLVED"));
    }

    #[test]
    fn test_stale_commands_are_tolerated() {
        let json = r#"{
          "commands": [
            { "op": "addBlock", "blockType": "source" },
            { "op": "deleteBlock", "id": "block-1" },
            { "op": "updateBlockTitle", "id": "block-1", "title": "late" },
            { "op": "selectBlock", "id": "block-1" },
            { "op": "moveBlock", "from": 0, "to": 0 },
            { "op": "drop", "index": 0, "point": { "offsetY": 1.0, "height": 2.0 } },
            { "op": "addBlock", "blockType": "output", "title": "Sink" }
          ]
        }"#;
        let script = EditorScript::from_json(json).unwrap();
        let mut editor = PipelineEditor::new();
        assert_eq!(script.replay(&mut editor), 3);
        assert_eq!(order(&editor), vec!["block-2"]);
        assert_eq!(editor.name(), "New Workflow");
    }

    #[test]
    fn test_script_file_round_trip() {
        let dir = std::env::temp_dir().join(format!("blockflow-test-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("Failed to create temp dir");
        let path = dir.join("script.json");
        let path = path.to_str().unwrap();

        let script = EditorScript {
            name: Some("Saved".to_string()),
            commands: vec![
                EditorCommand::AddBlock {
                    block_type: BlockType::Transform,
                    title: Some("Rename columns".to_string()),
                },
                EditorCommand::Rename {
                    name: "Renamed".to_string(),
                },
            ],
        };
        script.save(path).expect("Failed to save script");
        let loaded = EditorScript::from_file(path).expect("Failed to load script");
        assert_eq!(loaded, script);

        let mut editor = PipelineEditor::new();
        loaded.replay(&mut editor);
        assert_eq!(editor.name(), "Renamed");
        assert_eq!(editor.blocks()[0].title(), "Rename columns");

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_script_file() {
        let err = EditorScript::from_file("does/not/exist.json").unwrap_err();
        assert!(matches!(err, ScriptError::Io { .. }));
        assert!(err.to_string().contains("does/not/exist.json"));
    }

    #[test]
    fn test_malformed_script() {
        let err = EditorScript::from_json(r#"{"commands": [{"op": "explode"}]}"#).unwrap_err();
        assert!(matches!(err, ScriptError::Json(_)));
    }
}
