use crate::analysis::{AnalysisResult, Category, TextAnalyzer};
use crate::config::{EngineConfig, WorkflowDefaults};
use crate::connection::ConnectionBuilder;
use crate::context::GenerationContext;
use crate::error::StrategyError;
use crate::planner::{NodeCategory, NodePlanner, NodeRequirement, groups};
use crate::synthesis::NodeSynthesizer;
use crate::workflow::{Workflow, WorkflowMeta, ensure_unique_names};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// One independent way of producing a workflow from a description.
pub trait GenerationStrategy: Send + Sync {
    fn name(&self) -> &str;

    fn generate(
        &self,
        description: &str,
        context: &mut GenerationContext,
    ) -> Result<Workflow, StrategyError>;
}

/// The built-in strategies, nameable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    RichPattern,
    StatisticsInformed,
    Baseline,
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::RichPattern => "rich-pattern",
            StrategyKind::StatisticsInformed => "statistics-informed",
            StrategyKind::Baseline => "baseline",
        }
    }

    pub fn create(&self, config: &EngineConfig) -> Box<dyn GenerationStrategy> {
        match self {
            StrategyKind::RichPattern => Box::new(RichPatternStrategy::new(config)),
            StrategyKind::StatisticsInformed => Box::new(StatisticsInformedStrategy::new(config)),
            StrategyKind::Baseline => Box::new(BaselineStrategy::new(config)),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The analyze, synthesize and connect stages shared by every built-in strategy.
/// Strategies differ only in how they produce the requirement list.
#[derive(Debug, Clone)]
pub struct WorkflowAssembler {
    analyzer: TextAnalyzer,
    planner: NodePlanner,
    synthesizer: NodeSynthesizer,
    connector: ConnectionBuilder,
    defaults: WorkflowDefaults,
}

impl WorkflowAssembler {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            analyzer: TextAnalyzer::new(),
            planner: NodePlanner::new(config),
            synthesizer: NodeSynthesizer::new(config),
            connector: ConnectionBuilder::new(config),
            defaults: config.workflow.clone(),
        }
    }

    pub fn analyze(&self, description: &str) -> AnalysisResult {
        self.analyzer.analyze(description)
    }

    pub fn planner(&self) -> &NodePlanner {
        &self.planner
    }

    /// Builds trigger plus one node per requirement, wires and lays them out.
    pub fn assemble(
        &self,
        description: &str,
        analysis: &AnalysisResult,
        requirements: &[NodeRequirement],
        context: &mut GenerationContext,
    ) -> Result<Workflow, StrategyError> {
        if requirements.is_empty() {
            return Err(StrategyError::EmptyPlan {
                category: analysis.primary_category.to_string(),
            });
        }

        let mut nodes = Vec::with_capacity(requirements.len() + 2);
        nodes.push(self.synthesizer.synthesize_trigger(&analysis.hints, context));
        nodes.extend(
            requirements
                .iter()
                .map(|r| self.synthesizer.synthesize(r, context)),
        );
        let renamed = ensure_unique_names(&mut nodes);
        if renamed > 0 {
            debug!(renamed, "Disambiguated repeated node names");
        }

        let (nodes, connections) = self.connector.build(nodes, analysis, context);

        let mut meta = WorkflowMeta::new(
            description,
            analysis.primary_category,
            context.complexity,
            context.trigger,
        );
        meta.complexity_signal = analysis.complexity_signal;

        let mut workflow = Workflow::new(workflow_name(description, analysis.primary_category), meta);
        workflow.nodes = nodes;
        workflow.connections = connections;
        workflow.active = self.defaults.active;
        workflow.settings = self.defaults.settings();
        workflow.tags = analysis.tags.clone();
        Ok(workflow)
    }
}

/// Title-cases the leading words of the description, falling back to the
/// category title when nothing usable remains.
pub fn workflow_name(description: &str, category: Category) -> String {
    const MAX_WORDS: usize = 6;

    let words: Vec<String> = description
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .take(MAX_WORDS)
        .map(capitalize)
        .collect();

    if words.is_empty() {
        return format!("{} Workflow", category.title());
    }
    let title = words.join(" ");
    if title.to_lowercase().ends_with("workflow") {
        title
    } else {
        format!("{title} Workflow")
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Keyword-group planning over the full analysis.
#[derive(Debug, Clone)]
pub struct RichPatternStrategy {
    assembler: WorkflowAssembler,
}

impl RichPatternStrategy {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            assembler: WorkflowAssembler::new(config),
        }
    }
}

impl GenerationStrategy for RichPatternStrategy {
    fn name(&self) -> &str {
        StrategyKind::RichPattern.as_str()
    }

    fn generate(
        &self,
        description: &str,
        context: &mut GenerationContext,
    ) -> Result<Workflow, StrategyError> {
        let analysis = self.assembler.analyze(description);
        let requirements =
            self.assembler
                .planner()
                .plan(&analysis, context.complexity, context.seed);
        self.assembler
            .assemble(description, &analysis, &requirements, context)
    }
}

/// Plans from the step categories typical for the detected domain rather
/// than from keyword groups.
#[derive(Debug, Clone)]
pub struct StatisticsInformedStrategy {
    assembler: WorkflowAssembler,
}

impl StatisticsInformedStrategy {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            assembler: WorkflowAssembler::new(config),
        }
    }
}

impl GenerationStrategy for StatisticsInformedStrategy {
    fn name(&self) -> &str {
        StrategyKind::StatisticsInformed.as_str()
    }

    fn generate(
        &self,
        description: &str,
        context: &mut GenerationContext,
    ) -> Result<Workflow, StrategyError> {
        let analysis = self.assembler.analyze(description);
        if analysis.primary_category == Category::General
            && analysis.detected_integrations.is_empty()
            && analysis.detected_actions.is_empty()
        {
            return Err(StrategyError::InsufficientSignal {
                strategy: self.name().to_string(),
                reason: "no category, integration or action detected".to_string(),
            });
        }

        let categories: Vec<NodeCategory> = groups::usage_profile(analysis.primary_category)
            .iter()
            .cloned()
            .chain(groups::implied_categories(&analysis))
            .unique()
            .collect();

        let requirements = self.assembler.planner().plan_from_categories(
            &analysis,
            context.complexity,
            context.seed,
            &categories,
        );
        self.assembler
            .assemble(description, &analysis, &requirements, context)
    }
}

/// Trigger and a single processing step. Only fails if synthesis itself does.
#[derive(Debug, Clone)]
pub struct BaselineStrategy {
    assembler: WorkflowAssembler,
}

impl BaselineStrategy {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            assembler: WorkflowAssembler::new(config),
        }
    }
}

impl GenerationStrategy for BaselineStrategy {
    fn name(&self) -> &str {
        StrategyKind::Baseline.as_str()
    }

    fn generate(
        &self,
        description: &str,
        context: &mut GenerationContext,
    ) -> Result<Workflow, StrategyError> {
        let analysis = self.assembler.analyze(description);
        let requirement = groups::requirement_for(NodeCategory::Processing, &analysis);
        self.assembler
            .assemble(description, &analysis, &[requirement], context)
    }
}
