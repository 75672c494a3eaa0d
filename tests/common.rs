//! Common test utilities for building requests, workflows and stub strategies.
use flowsmith::prelude::*;
use flowsmith::synthesis::NodeKind;

#[allow(dead_code)]
pub const HEALTHCARE_DESCRIPTION: &str = "Comprehensive patient management workflow: validate \
    patient intake forms, schedule appointments with doctors, store medical records in the clinic \
    database, send appointment reminders by email to the care team, and keep an audit log with \
    error handling for HIPAA compliance.";

#[allow(dead_code)]
pub const LEAD_DESCRIPTION: &str =
    "Qualify incoming sales leads, check required fields and notify the team on Slack";

/// Descriptions spanning every category and a few hostile inputs.
#[allow(dead_code)]
pub const SAMPLE_DESCRIPTIONS: &[&str] = &[
    "Send email notification",
    "patient appointment scheduling with medical records",
    "banking transaction fraud detection and compliance",
    "Enroll new students into courses and email the teacher a weekly summary",
    "When an order is placed, check inventory, update the shop database and send shipping updates",
    LEAD_DESCRIPTION,
    "Sync contacts from the CRM API into a Google sheet every 30 minutes",
    "Monitor uptime of https://status.example.com and alert #ops when the endpoint is down",
    "Remind the team about the weekly digest",
    "Automate the recurring batch task that exports reports to report.csv",
    "",
    "   ",
    "日本語のテキスト ñandú 🚀 <b>markup</b> \u{0007}\u{0000}",
    HEALTHCARE_DESCRIPTION,
];

#[allow(dead_code)]
pub fn analyze(description: &str) -> AnalysisResult {
    TextAnalyzer::new().analyze(description)
}

#[allow(dead_code)]
pub fn generate(description: &str, trigger: TriggerKind, complexity: Complexity) -> Workflow {
    GenerationOrchestrator::default()
        .generate(&GenerationRequest::new(description, trigger, complexity))
        .expect("generation should always succeed with the default chain")
}

/// Asserts the structural guarantees every returned workflow must meet.
#[allow(dead_code)]
pub fn assert_well_formed(workflow: &Workflow) {
    assert!(!workflow.nodes.is_empty(), "workflow has no nodes");
    if workflow.nodes.len() > 1 {
        assert!(
            !workflow.connections.is_empty(),
            "multi-node workflow '{}' has no connections",
            workflow.name
        );
    }
    let issues = workflow.structural_issues();
    assert!(issues.is_empty(), "structural issues: {:?}", issues);
}

#[allow(dead_code)]
pub fn node_types(workflow: &Workflow) -> Vec<&str> {
    workflow.nodes.iter().map(|n| n.node_type.as_str()).collect()
}

#[allow(dead_code)]
pub fn count_kind(workflow: &Workflow, kind: NodeKind) -> usize {
    workflow
        .nodes
        .iter()
        .filter(|n| n.node_type == kind.type_name())
        .count()
}

/// A strategy that always reports insufficient signal.
#[allow(dead_code)]
pub struct RefusingStrategy;

impl GenerationStrategy for RefusingStrategy {
    fn name(&self) -> &str {
        "refusing"
    }

    fn generate(
        &self,
        _description: &str,
        _context: &mut GenerationContext,
    ) -> std::result::Result<Workflow, StrategyError> {
        Err(StrategyError::InsufficientSignal {
            strategy: "refusing".to_string(),
            reason: "never has enough".to_string(),
        })
    }
}

/// A strategy that panics mid-generation.
#[allow(dead_code)]
pub struct PanickingStrategy;

impl GenerationStrategy for PanickingStrategy {
    fn name(&self) -> &str {
        "panicking"
    }

    fn generate(
        &self,
        _description: &str,
        _context: &mut GenerationContext,
    ) -> std::result::Result<Workflow, StrategyError> {
        panic!("planner blew up");
    }
}

/// A strategy that "succeeds" with an empty document.
#[allow(dead_code)]
pub struct EmptyStrategy;

impl GenerationStrategy for EmptyStrategy {
    fn name(&self) -> &str {
        "empty"
    }

    fn generate(
        &self,
        description: &str,
        context: &mut GenerationContext,
    ) -> std::result::Result<Workflow, StrategyError> {
        let meta = WorkflowMeta::new(
            description,
            Category::General,
            context.complexity,
            context.trigger,
        );
        Ok(Workflow::new("Empty", meta))
    }
}

/// A strategy returning a document with blank ids, unknown types, repeated
/// names and a dangling edge.
#[allow(dead_code)]
pub struct BrokenStrategy;

impl GenerationStrategy for BrokenStrategy {
    fn name(&self) -> &str {
        "broken"
    }

    fn generate(
        &self,
        description: &str,
        context: &mut GenerationContext,
    ) -> std::result::Result<Workflow, StrategyError> {
        Ok(broken_workflow(description, context))
    }
}

#[allow(dead_code)]
pub fn broken_workflow(description: &str, context: &GenerationContext) -> Workflow {
    let meta = WorkflowMeta::new(
        description,
        Category::General,
        context.complexity,
        context.trigger,
    );
    let mut workflow = Workflow::new("Broken", meta);
    workflow.nodes = vec![
        Node::new("", "Start", NodeKind::ManualTrigger.type_name(), 1),
        Node::new("b", "Step", "custom.unknownNode", 1),
        Node::new("c", "Step", NodeKind::Code.type_name(), 2),
        Node::new("d", "", NodeKind::Wait.type_name(), 1),
    ];
    workflow.connections.add(Connection::new("Start", "Ghost"));
    workflow
}

/// A strategy whose document keeps an orphaned middle node that repair cannot
/// reconnect.
#[allow(dead_code)]
pub struct OrphanStrategy;

impl GenerationStrategy for OrphanStrategy {
    fn name(&self) -> &str {
        "orphan"
    }

    fn generate(
        &self,
        description: &str,
        context: &mut GenerationContext,
    ) -> std::result::Result<Workflow, StrategyError> {
        let meta = WorkflowMeta::new(
            description,
            Category::General,
            context.complexity,
            context.trigger,
        );
        let mut workflow = Workflow::new("Orphan", meta);
        workflow.nodes = vec![
            Node::new("a", "Start", NodeKind::ManualTrigger.type_name(), 1),
            Node::new("b", "Lost", NodeKind::Code.type_name(), 2),
            Node::new("c", "End", NodeKind::Code.type_name(), 2),
        ];
        workflow.connections.add(Connection::new("Start", "End"));
        Ok(workflow)
    }
}
