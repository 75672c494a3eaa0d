use crate::analysis::Category;
use crate::context::{Complexity, TriggerKind};
use crate::error::WorkflowIssue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashSet};

mod connection;
mod node;
pub mod validation;

pub use connection::{Connection, ConnectionKind, ConnectionMap, ConnectionTarget, NodeConnections};
pub use node::{Node, ensure_unique_names};

/// The generated workflow document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    pub name: String,
    pub nodes: Vec<Node>,
    pub connections: ConnectionMap,
    pub active: bool,
    pub settings: Map<String, Value>,
    pub tags: Vec<String>,
    pub meta: WorkflowMeta,
}

/// Generation provenance attached to every workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowMeta {
    pub source_description: String,
    pub generated_at: DateTime<Utc>,
    pub category: Category,
    pub complexity: Complexity,
    pub trigger: TriggerKind,
    #[serde(default)]
    pub complexity_signal: u32,
    #[serde(default)]
    pub strategy: String,
    #[serde(default)]
    pub generator_version: String,
    /// Node name -> the planned step category it was built for.
    #[serde(default)]
    pub node_categories: BTreeMap<String, String>,
}

impl WorkflowMeta {
    pub fn new(
        source_description: impl Into<String>,
        category: Category,
        complexity: Complexity,
        trigger: TriggerKind,
    ) -> Self {
        Self {
            source_description: source_description.into(),
            generated_at: Utc::now(),
            category,
            complexity,
            trigger,
            complexity_signal: 0,
            strategy: String::new(),
            generator_version: env!("CARGO_PKG_VERSION").to_string(),
            node_categories: BTreeMap::new(),
        }
    }
}

impl Workflow {
    pub fn new(name: impl Into<String>, meta: WorkflowMeta) -> Self {
        Self {
            name: name.into(),
            nodes: Vec::new(),
            connections: ConnectionMap::new(),
            active: false,
            settings: Map::new(),
            tags: Vec::new(),
            meta,
        }
    }

    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.display_name == name)
    }

    pub fn node_names(&self) -> HashSet<&str> {
        self.nodes.iter().map(|n| n.display_name.as_str()).collect()
    }

    pub fn edges(&self) -> Vec<Connection> {
        self.connections.edges()
    }

    pub fn entry_node(&self) -> Option<&Node> {
        self.nodes.first()
    }

    /// Every structural defect found; empty when the document is well formed.
    pub fn structural_issues(&self) -> Vec<WorkflowIssue> {
        validation::structural_issues(self)
    }

    pub fn is_well_formed(&self) -> bool {
        !self.nodes.is_empty() && self.structural_issues().is_empty()
    }

    /// Copies each node's planned category into `meta.node_categories`.
    pub fn record_node_categories(&mut self) {
        self.meta.node_categories = self
            .nodes
            .iter()
            .filter_map(|n| {
                n.category
                    .as_ref()
                    .map(|c| (n.display_name.clone(), c.to_string()))
            })
            .collect();
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
