use crate::analysis::{AnalysisResult, Category};
use crate::config::EngineConfig;
use crate::context::GenerationContext;
use crate::planner::NodeCategory;
use crate::synthesis::{NodeKind, NodeSynthesizer};
use crate::workflow::{Connection, ConnectionMap, Node};
use tracing::debug;

pub mod layout;

/// Wires an ordered node list into a connected graph.
#[derive(Debug, Clone)]
pub struct ConnectionBuilder {
    branching_categories: Vec<Category>,
    synthesizer: NodeSynthesizer,
}

impl Default for ConnectionBuilder {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl ConnectionBuilder {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            branching_categories: config.branching_categories.clone(),
            synthesizer: NodeSynthesizer::new(config),
        }
    }

    /// Completes the node list (adding a webhook response when needed), links
    /// it into a chain, applies conditional fan-out and lays the nodes out.
    pub fn build(
        &self,
        mut nodes: Vec<Node>,
        analysis: &AnalysisResult,
        context: &mut GenerationContext,
    ) -> (Vec<Node>, ConnectionMap) {
        if needs_response(&nodes) {
            nodes.push(self.synthesizer.synthesize_response(context));
        }

        let mut connections = linear_chain(&nodes);

        if self.branching_categories.contains(&analysis.primary_category) {
            apply_branching(&nodes, &mut connections);
        }

        layout::assign_positions(&mut nodes, &connections);
        (nodes, connections)
    }
}

/// A webhook entry without any response node needs one appended.
fn needs_response(nodes: &[Node]) -> bool {
    let Some(first) = nodes.first() else {
        return false;
    };
    let opens_request = NodeKind::from_type_name(&first.node_type)
        .is_some_and(|kind| kind.requires_response());
    let has_response = nodes
        .iter()
        .any(|n| n.node_type == NodeKind::RespondToWebhook.type_name());
    opens_request && !has_response
}

/// Connects each node to the next one. Pairs with a blank or identical name are skipped.
pub fn linear_chain(nodes: &[Node]) -> ConnectionMap {
    let mut connections = ConnectionMap::new();
    for pair in nodes.windows(2) {
        let (source, target) = (&pair[0].display_name, &pair[1].display_name);
        if source.is_empty() || target.is_empty() || source == target {
            debug!(source = %source, target = %target, "Skipping unlinkable node pair");
            continue;
        }
        connections.add(Connection::new(source.clone(), target.clone()));
    }
    connections
}

/// Replaces the single outgoing edge of the first conditional node with a
/// true branch to its successor and a false branch to the node after that.
fn apply_branching(nodes: &[Node], connections: &mut ConnectionMap) {
    let Some(index) = nodes.iter().position(is_conditional) else {
        return;
    };
    let (Some(on_true), Some(on_false)) = (nodes.get(index + 1), nodes.get(index + 2)) else {
        debug!("Conditional node has fewer than two successors, keeping linear edge");
        return;
    };
    let source = &nodes[index].display_name;
    if on_true.display_name == on_false.display_name
        || on_true.display_name.is_empty()
        || on_false.display_name.is_empty()
    {
        return;
    }

    connections.remove_source(source);
    connections.add(Connection::new(source.clone(), on_true.display_name.clone()));
    connections.add(Connection::new(source.clone(), on_false.display_name.clone()).on_output(1));
    debug!(node = %source, "Split conditional node into true/false branches");
}

fn is_conditional(node: &Node) -> bool {
    node.category == Some(NodeCategory::ConditionalRouting)
        || node.node_type == NodeKind::If.type_name()
}
