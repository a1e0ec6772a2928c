use crate::editor::{EditorCommand, PipelineEditor};
use crate::error::ScriptError;
use serde::{Deserialize, Serialize};
use std::fs;

/// A recorded sequence of editor commands, matching the expected JSON format
/// for replay.
///
/// ```json
/// {
///   "name": "Customer export",
///   "commands": [
///     { "op": "addBlock", "blockType": "source" },
///     { "op": "addBlock", "blockType": "filter", "title": "Adults only" },
///     { "op": "dragStart", "index": 1 },
///     { "op": "drop", "index": 0, "point": { "offsetY": 2.0, "height": 40.0 } }
///   ]
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct EditorScript {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub commands: Vec<EditorCommand>,
}

impl EditorScript {
    /// Load a script from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, ScriptError> {
        let content = fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, ScriptError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &str) -> Result<(), ScriptError> {
        let json = self.to_json_pretty()?;
        fs::write(path, json).map_err(|source| ScriptError::Io {
            path: path.to_string(),
            source,
        })
    }

    /// Replays the script against `editor`, renaming it first when the script
    /// carries a name. Returns the number of commands that changed state.
    pub fn replay(&self, editor: &mut PipelineEditor) -> usize {
        if let Some(name) = &self.name {
            editor.rename(name.clone());
        }
        editor.dispatch_all(self.commands.iter().cloned())
    }
}
