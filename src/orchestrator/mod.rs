use crate::config::EngineConfig;
use crate::context::{GenerationContext, GenerationRequest};
use crate::error::{GenerationError, StrategyError};
use crate::workflow::Workflow;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, error, info, warn};

mod repair;
mod strategy;

pub use repair::{RepairReport, repair};
pub use strategy::{
    BaselineStrategy, GenerationStrategy, RichPatternStrategy, StatisticsInformedStrategy,
    StrategyKind, WorkflowAssembler, workflow_name,
};

/// Steps of a single `generate` call.
#[derive(Debug)]
enum OrchestratorState {
    TryNextStrategy,
    StrategyRunning(usize),
    StrategySucceeded(usize, Workflow),
    StrategyFailed(usize, StrategyError),
    Repair(usize, Workflow),
    Done(Workflow),
    AllFailed,
}

/// Runs generation strategies in priority order and returns the first
/// workflow that comes out with at least one node.
///
/// An orchestrator holds no per-request state and can be shared across threads.
pub struct GenerationOrchestrator {
    config: EngineConfig,
    strategies: Vec<Box<dyn GenerationStrategy>>,
}

pub struct OrchestratorBuilder {
    config: EngineConfig,
    strategies: Vec<Box<dyn GenerationStrategy>>,
}

impl OrchestratorBuilder {
    pub fn new(config: EngineConfig) -> Self {
        let strategies = config
            .strategies
            .iter()
            .map(|kind| kind.create(&config))
            .collect();
        Self { config, strategies }
    }

    /// Appends a strategy after the configured ones.
    pub fn with_strategy(mut self, strategy: Box<dyn GenerationStrategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    /// Drops every strategy collected so far.
    pub fn clear_strategies(mut self) -> Self {
        self.strategies.clear();
        self
    }

    pub fn build(mut self) -> GenerationOrchestrator {
        let baseline = StrategyKind::Baseline.as_str();
        let ends_with_baseline = self
            .strategies
            .last()
            .is_some_and(|s| s.name() == baseline);
        if self.config.ensure_baseline && !ends_with_baseline {
            self.strategies
                .push(StrategyKind::Baseline.create(&self.config));
        }
        GenerationOrchestrator {
            config: self.config,
            strategies: self.strategies,
        }
    }
}

impl Default for GenerationOrchestrator {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl GenerationOrchestrator {
    pub fn builder(config: EngineConfig) -> OrchestratorBuilder {
        OrchestratorBuilder::new(config)
    }

    pub fn new(config: EngineConfig) -> Self {
        Self::builder(config).build()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn strategy_names(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Generates a workflow for the request.
    ///
    /// Each strategy gets a fresh context. A strategy that errors, panics or
    /// returns no nodes hands over to the next one; the first success is
    /// repaired and returned. `Err` only when every strategy failed.
    pub fn generate(&self, request: &GenerationRequest) -> Result<Workflow, GenerationError> {
        let description = request.normalized_description(&self.config);
        let mut attempts: Vec<(String, StrategyError)> = Vec::new();
        let mut next = 0;
        let mut state = OrchestratorState::TryNextStrategy;

        loop {
            state = match state {
                OrchestratorState::TryNextStrategy => {
                    if next < self.strategies.len() {
                        next += 1;
                        OrchestratorState::StrategyRunning(next - 1)
                    } else {
                        OrchestratorState::AllFailed
                    }
                }
                OrchestratorState::StrategyRunning(index) => {
                    let strategy = &self.strategies[index];
                    let mut context = GenerationContext::from_request(&description, request);
                    debug!(strategy = strategy.name(), seed = context.seed, "Running strategy");
                    match run_contained(strategy.as_ref(), &description, &mut context) {
                        Ok(workflow) => OrchestratorState::StrategySucceeded(index, workflow),
                        Err(e) => OrchestratorState::StrategyFailed(index, e),
                    }
                }
                OrchestratorState::StrategySucceeded(index, workflow) => {
                    if workflow.nodes.is_empty() {
                        OrchestratorState::StrategyFailed(
                            index,
                            StrategyError::EmptyWorkflow {
                                strategy: self.strategies[index].name().to_string(),
                            },
                        )
                    } else {
                        OrchestratorState::Repair(index, workflow)
                    }
                }
                OrchestratorState::StrategyFailed(index, e) => {
                    let name = self.strategies[index].name().to_string();
                    warn!(strategy = %name, error = %e, "Generation strategy failed, trying next");
                    attempts.push((name, e));
                    OrchestratorState::TryNextStrategy
                }
                OrchestratorState::Repair(index, mut workflow) => {
                    repair(&mut workflow);
                    let issues = workflow.structural_issues();
                    if !issues.is_empty() {
                        warn!(
                            strategy = self.strategies[index].name(),
                            issues = ?issues,
                            "Workflow still has structural issues after repair"
                        );
                    }
                    workflow.meta.strategy = self.strategies[index].name().to_string();
                    workflow.record_node_categories();
                    OrchestratorState::Done(workflow)
                }
                OrchestratorState::Done(workflow) => {
                    info!(
                        strategy = %workflow.meta.strategy,
                        category = %workflow.meta.category,
                        nodes = workflow.nodes.len(),
                        connections = workflow.connections.edge_count(),
                        "Generated workflow '{}'",
                        workflow.name
                    );
                    return Ok(workflow);
                }
                OrchestratorState::AllFailed => {
                    error!(attempts = attempts.len(), "Every generation strategy failed");
                    return Err(GenerationError::AllStrategiesFailed { attempts });
                }
            };
        }
    }
}

/// Runs a strategy, turning a panic into a `StrategyError`.
fn run_contained(
    strategy: &dyn GenerationStrategy,
    description: &str,
    context: &mut GenerationContext,
) -> Result<Workflow, StrategyError> {
    panic::catch_unwind(AssertUnwindSafe(|| strategy.generate(description, context)))
        .unwrap_or_else(|payload| {
            Err(StrategyError::Panicked {
                strategy: strategy.name().to_string(),
                message: panic_message(payload.as_ref()),
            })
        })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
