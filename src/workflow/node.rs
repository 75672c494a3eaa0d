use crate::planner::NodeCategory;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// One concrete, typed processing step of a workflow document.
///
/// Every field defaults on deserialization so partially written documents can
/// still be loaded and handed to the repair pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "name", default)]
    pub display_name: String,
    #[serde(rename = "type", default)]
    pub node_type: String,
    #[serde(rename = "typeVersion", default = "default_type_version")]
    pub type_version: u32,
    /// Layout only, never execution semantics.
    #[serde(default)]
    pub position: [i32; 2],
    #[serde(default)]
    pub parameters: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// The planned role this node was synthesized for. Not part of the document.
    #[serde(skip)]
    pub category: Option<NodeCategory>,
}

fn default_type_version() -> u32 {
    1
}

impl Node {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        node_type: impl Into<String>,
        type_version: u32,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            node_type: node_type.into(),
            type_version,
            position: [0, 0],
            parameters: Map::new(),
            notes: None,
            category: None,
        }
    }

    pub fn with_parameters(mut self, parameters: Map<String, Value>) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_category(mut self, category: NodeCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Gives every node a distinct display name by suffixing repeats with a
/// counter ("Send Email", "Send Email 1", ...). Suffixed names never collide
/// with a name already present, so the first holder of a name keeps it.
/// Returns the number of renames.
pub fn ensure_unique_names(nodes: &mut [Node]) -> usize {
    let mut taken: HashSet<String> = nodes.iter().map(|n| n.display_name.clone()).collect();
    let mut seen = HashSet::new();
    let mut renamed = 0;
    for node in nodes.iter_mut() {
        if seen.insert(node.display_name.clone()) {
            continue;
        }
        let mut suffix = 1;
        let mut candidate = format!("{} {}", node.display_name, suffix);
        while taken.contains(&candidate) {
            suffix += 1;
            candidate = format!("{} {}", node.display_name, suffix);
        }
        taken.insert(candidate.clone());
        seen.insert(candidate.clone());
        node.display_name = candidate;
        renamed += 1;
    }
    renamed
}
