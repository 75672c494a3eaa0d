//! Prelude module for convenient imports
//!
//! Re-exports the types needed to configure the engine, issue a request and
//! inspect the resulting workflow.
//!
//! # Example
//!
//! ```rust,no_run
//! use flowsmith::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let config = EngineConfig::from_file("path/to/flowsmith.json")?;
//! let orchestrator = GenerationOrchestrator::new(config);
//!
//! let request = GenerationRequest::new("Send email notification", TriggerKind::Manual, Complexity::Simple);
//! let workflow = orchestrator.generate(&request)?;
//! assert!(workflow.is_well_formed());
//! # Ok(())
//! # }
//! ```

// Engine entry points
pub use crate::orchestrator::{GenerationOrchestrator, GenerationStrategy, StrategyKind};

// Pipeline stages
pub use crate::analysis::{AnalysisResult, Category, TextAnalyzer};
pub use crate::connection::ConnectionBuilder;
pub use crate::planner::{NodeCategory, NodePlanner, NodeRequirement, PlanBounds};
pub use crate::synthesis::{NodeKind, NodeSynthesizer};

// Request and configuration
pub use crate::config::EngineConfig;
pub use crate::context::{Complexity, GenerationContext, GenerationRequest, TriggerKind};

// Output document
pub use crate::workflow::{Connection, ConnectionMap, Node, Workflow, WorkflowMeta};

// Error types
pub use crate::error::{ConfigError, GenerationError, StrategyError, WorkflowIssue};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
