use crate::analysis::ParameterHints;
use crate::config::{EngineConfig, Placeholders};
use crate::context::{GenerationContext, TriggerKind};
use crate::planner::{NodeCategory, NodeRequirement};
use crate::workflow::Node;
use tracing::debug;
use uuid::Uuid;

mod mapping;
pub mod parameters;
pub mod scripts;

pub use mapping::{NodeKind, display_name_for};

/// Turns planned requirements into concrete nodes using the fixed type-mapping table.
#[derive(Debug, Clone)]
pub struct NodeSynthesizer {
    placeholders: Placeholders,
}

impl Default for NodeSynthesizer {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl NodeSynthesizer {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            placeholders: config.placeholders.clone(),
        }
    }

    pub fn synthesize(&self, requirement: &NodeRequirement, context: &mut GenerationContext) -> Node {
        let kind = NodeKind::for_requirement(requirement);
        if let NodeCategory::Custom(name) = &requirement.category {
            debug!(category = %name, "No mapping for step category, using processing");
        }
        let display_name = display_name_for(requirement, kind);
        let parameters =
            parameters::for_requirement(kind, requirement, &display_name, &self.placeholders);

        Node::new(
            next_node_id(context),
            display_name,
            kind.type_name(),
            kind.type_version(),
        )
        .with_parameters(parameters)
        .with_category(requirement.category.clone())
        .with_notes(requirement.purpose.clone())
    }

    /// Builds the entry node for the requested trigger kind.
    pub fn synthesize_trigger(&self, hints: &ParameterHints, context: &mut GenerationContext) -> Node {
        let kind = NodeKind::for_trigger(context.trigger);
        let parameters = match context.trigger {
            TriggerKind::Webhook => {
                parameters::webhook_trigger(&format!("workflow-{:08x}", context.seed as u32))
            }
            TriggerKind::Schedule => match &hints.interval {
                Some(interval) => parameters::schedule_trigger(interval.amount, &interval.unit),
                None => parameters::schedule_trigger(1, "hours"),
            },
            TriggerKind::Manual => serde_json::Map::new(),
        };
        Node::new(
            next_node_id(context),
            kind.default_name(),
            kind.type_name(),
            kind.type_version(),
        )
        .with_parameters(parameters)
    }

    /// Builds the node that answers a webhook caller.
    pub fn synthesize_response(&self, context: &mut GenerationContext) -> Node {
        let kind = NodeKind::RespondToWebhook;
        Node::new(
            next_node_id(context),
            kind.default_name(),
            kind.type_name(),
            kind.type_version(),
        )
        .with_parameters(parameters::respond_to_webhook())
    }
}

/// A per-request serial in the high half and a random component in the low
/// half, so ids never collide inside one workflow.
pub fn next_node_id(context: &mut GenerationContext) -> String {
    Uuid::from_u64_pair(context.next_serial(), rand::random::<u64>()).to_string()
}
