use crate::analysis::{Action, AnalysisResult, Integration};
use crate::config::EngineConfig;
use crate::context::Complexity;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;

mod bounds;
pub mod groups;
mod requirement;

pub use bounds::{PlanBounds, RESERVED_SLOTS};
pub use requirement::{NodeCategory, NodeRequirement};

use groups::{DIVERSITY_TIERS, KEYWORD_GROUPS, requirement_for};

/// Turns an analysis into an ordered list of node requirements.
#[derive(Debug, Clone)]
pub struct NodePlanner {
    error_handling_threshold: u32,
}

impl Default for NodePlanner {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl NodePlanner {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            error_handling_threshold: config.error_handling_threshold,
        }
    }

    /// Plans from the description's keyword groups.
    pub fn plan(
        &self,
        analysis: &AnalysisResult,
        complexity: Complexity,
        seed: u64,
    ) -> Vec<NodeRequirement> {
        let matched: Vec<NodeCategory> = KEYWORD_GROUPS
            .iter()
            .filter(|(_, keywords)| analysis.mentions_any(keywords))
            .map(|(category, _)| category.clone())
            .collect();
        self.plan_with(analysis, complexity, seed, matched)
    }

    /// Plans from an explicit list of step categories instead of keyword groups.
    /// Bounds, error handling, diversity and budget rules still apply.
    pub fn plan_from_categories(
        &self,
        analysis: &AnalysisResult,
        complexity: Complexity,
        seed: u64,
        categories: &[NodeCategory],
    ) -> Vec<NodeRequirement> {
        self.plan_with(analysis, complexity, seed, categories.to_vec())
    }

    fn plan_with(
        &self,
        analysis: &AnalysisResult,
        complexity: Complexity,
        seed: u64,
        matched: Vec<NodeCategory>,
    ) -> Vec<NodeRequirement> {
        let bounds = PlanBounds::for_request(complexity, analysis.complexity_signal);

        if complexity == Complexity::Simple {
            return vec![plan_simple(analysis)];
        }

        let mut requirements = vec![requirement_for(NodeCategory::Processing, analysis)];
        for category in matched {
            push_unique(&mut requirements, category, analysis);
        }

        if complexity == Complexity::Complex
            || analysis.complexity_signal >= self.error_handling_threshold
        {
            push_unique(&mut requirements, NodeCategory::ErrorHandling, analysis);
        }

        let target = bounds.min_requirements();
        if requirements.len() < target {
            fill_from_diversity_pool(&mut requirements, target, seed, analysis);
        }
        let mut filler = 1;
        while requirements.len() < target {
            requirements.push(
                requirement_for(NodeCategory::Processing, analysis)
                    .with_label(format!("Additional Processing {}", filler)),
            );
            filler += 1;
        }

        let budget = bounds.max_requirements();
        if requirements.len() > budget {
            debug!(
                planned = requirements.len(),
                budget, "Clipping plan to the node budget"
            );
            requirements.truncate(budget);
        }

        debug!(
            complexity = %complexity,
            min_nodes = bounds.min_nodes,
            max_nodes = bounds.max_nodes,
            requirements = requirements.len(),
            "Planned workflow steps"
        );
        requirements
    }
}

/// Simple plans hold exactly one step: messaging or storage when a single
/// keyword calls for it, otherwise the baseline processing step.
fn plan_simple(analysis: &AnalysisResult) -> NodeRequirement {
    let wants_messaging = analysis.detected_integrations.keys().any(Integration::is_messaging)
        || analysis.has_action(Action::Send)
        || analysis.has_action(Action::Notify);
    let wants_storage = analysis.detected_integrations.keys().any(Integration::is_storage)
        || analysis.has_action(Action::Store);

    let category = if wants_messaging {
        NodeCategory::MessagingIntegration
    } else if wants_storage {
        NodeCategory::StorageIntegration
    } else {
        NodeCategory::Processing
    };
    requirement_for(category, analysis)
}

fn push_unique(
    requirements: &mut Vec<NodeRequirement>,
    category: NodeCategory,
    analysis: &AnalysisResult,
) {
    if !requirements.iter().any(|r| r.category == category) {
        requirements.push(requirement_for(category, analysis));
    }
}

fn fill_from_diversity_pool(
    requirements: &mut Vec<NodeRequirement>,
    target: usize,
    seed: u64,
    analysis: &AnalysisResult,
) {
    let mut rng = StdRng::seed_from_u64(seed);
    for tier in DIVERSITY_TIERS {
        let mut tier = tier.to_vec();
        tier.shuffle(&mut rng);
        for category in tier {
            if requirements.len() >= target {
                return;
            }
            push_unique(requirements, category, analysis);
        }
    }
}
