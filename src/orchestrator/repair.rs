use crate::connection::linear_chain;
use crate::synthesis::NodeKind;
use crate::workflow::{Workflow, ensure_unique_names};
use std::collections::HashSet;
use tracing::debug;
use uuid::Uuid;

/// Counts of what the repair pass changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepairReport {
    pub filled_fields: usize,
    pub renamed_nodes: usize,
    pub dropped_connections: usize,
    pub rebuilt_chain: bool,
}

impl RepairReport {
    pub fn is_clean(&self) -> bool {
        *self == Self::default()
    }
}

/// Brings a strategy's output back to a structurally valid document.
///
/// Fills blank ids and names, replaces unregistered node types with a code
/// node, makes display names unique, drops edges that point at missing nodes
/// or back at their source, and links the nodes in order when more than one
/// node is left without any edge.
pub fn repair(workflow: &mut Workflow) -> RepairReport {
    let mut report = RepairReport::default();

    for (index, node) in workflow.nodes.iter_mut().enumerate() {
        if node.id.trim().is_empty() {
            node.id = Uuid::new_v4().to_string();
            report.filled_fields += 1;
        }
        if NodeKind::from_type_name(&node.node_type).is_none() {
            debug!(index, type_name = %node.node_type, "Replacing unregistered node type");
            node.node_type = NodeKind::Code.type_name().to_string();
            node.type_version = NodeKind::Code.type_version();
            report.filled_fields += 1;
        }
        if node.display_name.trim().is_empty() {
            let kind = NodeKind::from_type_name(&node.node_type).unwrap_or(NodeKind::Code);
            node.display_name = format!("{} {}", kind.default_name(), index + 1);
            report.filled_fields += 1;
        }
    }

    // Edges keyed by a repeated name stay with its first holder.
    report.renamed_nodes = ensure_unique_names(&mut workflow.nodes);

    let names: HashSet<&str> = workflow
        .nodes
        .iter()
        .map(|n| n.display_name.as_str())
        .collect();
    report.dropped_connections = workflow.connections.retain_known(&names);

    if workflow.nodes.len() > 1 && workflow.connections.is_empty() {
        workflow.connections = linear_chain(&workflow.nodes);
        report.rebuilt_chain = true;
    }

    if !report.is_clean() {
        debug!(?report, "Repaired workflow structure");
    }
    report
}
