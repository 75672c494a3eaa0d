use thiserror::Error;

/// Errors raised by a single generation strategy.
///
/// These never reach the caller directly: the orchestrator logs them and moves
/// on to the next strategy in its chain.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StrategyError {
    #[error("Planner produced no node requirements for category '{category}'")]
    EmptyPlan { category: String },

    #[error("Strategy '{strategy}' produced a workflow without any nodes")]
    EmptyWorkflow { strategy: String },

    #[error("Not enough signal in the description to use strategy '{strategy}': {reason}")]
    InsufficientSignal { strategy: String, reason: String },

    #[error("Strategy '{strategy}' panicked: {message}")]
    Panicked { strategy: String, message: String },
}

/// Errors that can be surfaced by the orchestrator to its caller.
#[derive(Error, Debug, Clone)]
pub enum GenerationError {
    #[error("All {} generation strategies failed: {}", attempts.len(), format_attempts(attempts))]
    AllStrategiesFailed {
        attempts: Vec<(String, StrategyError)>,
    },
}

fn format_attempts(attempts: &[(String, StrategyError)]) -> String {
    if attempts.is_empty() {
        return "no strategies were configured".to_string();
    }
    attempts
        .iter()
        .map(|(name, err)| format!("[{}] {}", name, err))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors that can occur while loading an `EngineConfig`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),
}

/// Structural defects detected in a workflow document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkflowIssue {
    #[error("Node at index {index} is missing its '{field}' field")]
    MissingField { index: usize, field: &'static str },

    #[error("Node '{node}' has an unregistered node type: '{type_name}'")]
    UnknownNodeType { node: String, type_name: String },

    #[error("Display name '{0}' is used by more than one node")]
    DuplicateName(String),

    #[error("Connection from '{source_node}' targets node '{target_node}', which does not exist")]
    DanglingConnection {
        source_node: String,
        target_node: String,
    },

    #[error("Node '{0}' is connected to itself")]
    SelfLoop(String),

    #[error("Workflow has {0} nodes but no connections")]
    Disconnected(usize),

    #[error("Node '{0}' is not reachable from the trigger")]
    Unreachable(String),
}
