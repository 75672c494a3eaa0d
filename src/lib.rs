//! # Flowsmith - Description-to-Workflow Synthesis Engine
//!
//! **Flowsmith** turns a short free-text description of an automation task into an
//! importable workflow document: typed nodes plus the directed connections between
//! them, serialized in the n8n JSON layout.
//!
//! ## Core Workflow
//!
//! Every request runs through the same staged pipeline:
//!
//! 1.  **Analyze**: `TextAnalyzer` classifies the description into a domain category,
//!     detects actions and integrations, scores complexity and pulls literal
//!     parameter hints (email addresses, channels, URLs, intervals).
//! 2.  **Plan**: `NodePlanner` turns the analysis into an ordered list of abstract
//!     `NodeRequirement`s, bounded by the requested complexity.
//! 3.  **Synthesize**: `NodeSynthesizer` maps each requirement to a concrete node type
//!     with its parameters.
//! 4.  **Connect**: `ConnectionBuilder` wires the nodes into a chain, adds conditional
//!     fan-out where the domain calls for it and lays the nodes out.
//!
//! The `GenerationOrchestrator` runs these stages inside a chain of strategies. A
//! failing or panicking strategy hands over to the next one, and the first result is
//! repaired into a structurally valid `Workflow`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flowsmith::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let orchestrator = GenerationOrchestrator::builder(EngineConfig::default()).build();
//!
//!     let request = GenerationRequest::new(
//!         "Validate new leads from the web form, store them in the CRM table and notify #sales",
//!         TriggerKind::Webhook,
//!         Complexity::Medium,
//!     );
//!
//!     let workflow = orchestrator.generate(&request)?;
//!     println!("{} ({} nodes)", workflow.name, workflow.nodes.len());
//!     println!("{}", workflow.to_json_pretty()?);
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod config;
pub mod connection;
pub mod context;
pub mod error;
pub mod orchestrator;
pub mod planner;
pub mod prelude;
pub mod synthesis;
pub mod workflow;
