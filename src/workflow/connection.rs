use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionKind {
    #[default]
    Main,
}

/// One entry of an output slot: which node it feeds, and on which input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionTarget {
    pub node: String,
    #[serde(rename = "type", default)]
    pub kind: ConnectionKind,
    #[serde(default)]
    pub index: u32,
}

/// Outgoing edges of one node, grouped by output slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeConnections {
    #[serde(default)]
    pub main: Vec<Vec<ConnectionTarget>>,
}

/// A flattened directed edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Connection {
    pub source: String,
    pub target: String,
    /// Output slot on the source. Conditional nodes use 0 for true and 1 for false.
    pub output_index: u32,
    /// Input slot on the target.
    pub input_index: u32,
}

impl Connection {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            output_index: 0,
            input_index: 0,
        }
    }

    pub fn on_output(mut self, output_index: u32) -> Self {
        self.output_index = output_index;
        self
    }
}

/// Workflow edges keyed by source node name, serialized in the
/// `{"Source": {"main": [[{"node", "type", "index"}]]}}` layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionMap(BTreeMap<String, NodeConnections>);

impl ConnectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an edge. Self loops and duplicates are ignored; returns whether the
    /// edge was added.
    pub fn add(&mut self, connection: Connection) -> bool {
        if connection.source == connection.target {
            return false;
        }
        let outputs = &mut self.0.entry(connection.source.clone()).or_default().main;
        let slot = connection.output_index as usize;
        if outputs.len() <= slot {
            outputs.resize_with(slot + 1, Vec::new);
        }
        let targets = &mut outputs[slot];
        if targets
            .iter()
            .any(|t| t.node == connection.target && t.index == connection.input_index)
        {
            return false;
        }
        targets.push(ConnectionTarget {
            node: connection.target,
            kind: ConnectionKind::Main,
            index: connection.input_index,
        });
        true
    }

    /// Removes every edge leaving `source`.
    pub fn remove_source(&mut self, source: &str) -> Option<NodeConnections> {
        self.0.remove(source)
    }

    pub fn get(&self, source: &str) -> Option<&NodeConnections> {
        self.0.get(source)
    }

    pub fn sources(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// True when no edge exists at all.
    pub fn is_empty(&self) -> bool {
        self.edge_count() == 0
    }

    pub fn edge_count(&self) -> usize {
        self.0
            .values()
            .flat_map(|c| c.main.iter())
            .map(Vec::len)
            .sum()
    }

    pub fn edges(&self) -> Vec<Connection> {
        let mut edges = Vec::new();
        for (source, outputs) in &self.0 {
            for (slot, targets) in outputs.main.iter().enumerate() {
                for target in targets {
                    edges.push(Connection {
                        source: source.clone(),
                        target: target.node.clone(),
                        output_index: slot as u32,
                        input_index: target.index,
                    });
                }
            }
        }
        edges
    }

    /// Direct successors of a node, across all output slots.
    pub fn targets_of(&self, source: &str) -> Vec<&str> {
        self.0
            .get(source)
            .map(|c| {
                c.main
                    .iter()
                    .flatten()
                    .map(|t| t.node.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Keeps only edges whose endpoints are both in `names` and differ.
    /// Returns the number of edges dropped.
    pub fn retain_known(&mut self, names: &HashSet<&str>) -> usize {
        let before = self.edge_count();
        self.0.retain(|source, _| names.contains(source.as_str()));
        for (source, outputs) in self.0.iter_mut() {
            for targets in outputs.main.iter_mut() {
                targets.retain(|t| names.contains(t.node.as_str()) && t.node != *source);
            }
            while outputs.main.last().is_some_and(Vec::is_empty) {
                outputs.main.pop();
            }
        }
        self.0.retain(|_, outputs| !outputs.main.is_empty());
        before - self.edge_count()
    }

    /// Renames a node in every position it appears.
    pub fn rename_node(&mut self, old: &str, new: &str) {
        if let Some(outputs) = self.0.remove(old) {
            self.0.insert(new.to_string(), outputs);
        }
        for outputs in self.0.values_mut() {
            for target in outputs.main.iter_mut().flatten() {
                if target.node == old {
                    target.node = new.to_string();
                }
            }
        }
    }
}

impl FromIterator<Connection> for ConnectionMap {
    fn from_iter<I: IntoIterator<Item = Connection>>(iter: I) -> Self {
        let mut map = ConnectionMap::new();
        for connection in iter {
            map.add(connection);
        }
        map
    }
}
