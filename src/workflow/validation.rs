use super::Workflow;
use crate::error::WorkflowIssue;
use crate::synthesis::NodeKind;
use std::collections::{HashSet, VecDeque};

/// Collects every structural defect of a workflow document.
///
/// Only well-formedness is checked: required fields, known node types, unique
/// names, edge endpoints, and reachability from the trigger (the last node is
/// allowed to dangle).
pub fn structural_issues(workflow: &Workflow) -> Vec<WorkflowIssue> {
    let mut issues = Vec::new();

    let mut names = HashSet::new();
    for (index, node) in workflow.nodes.iter().enumerate() {
        if node.id.trim().is_empty() {
            issues.push(WorkflowIssue::MissingField { index, field: "id" });
        }
        if node.display_name.trim().is_empty() {
            issues.push(WorkflowIssue::MissingField {
                index,
                field: "name",
            });
        }
        if node.node_type.trim().is_empty() {
            issues.push(WorkflowIssue::MissingField {
                index,
                field: "type",
            });
        } else if NodeKind::from_type_name(&node.node_type).is_none() {
            issues.push(WorkflowIssue::UnknownNodeType {
                node: node.display_name.clone(),
                type_name: node.node_type.clone(),
            });
        }
        if !node.display_name.is_empty() && !names.insert(node.display_name.as_str()) {
            issues.push(WorkflowIssue::DuplicateName(node.display_name.clone()));
        }
    }

    for edge in workflow.connections.edges() {
        if edge.source == edge.target {
            issues.push(WorkflowIssue::SelfLoop(edge.source.clone()));
            continue;
        }
        for endpoint in [&edge.source, &edge.target] {
            if !names.contains(endpoint.as_str()) {
                issues.push(WorkflowIssue::DanglingConnection {
                    source_node: edge.source.clone(),
                    target_node: endpoint.clone(),
                });
            }
        }
    }

    if workflow.nodes.len() > 1 && workflow.connections.is_empty() {
        issues.push(WorkflowIssue::Disconnected(workflow.nodes.len()));
    } else {
        issues.extend(
            unreachable_nodes(workflow)
                .into_iter()
                .map(WorkflowIssue::Unreachable),
        );
    }

    issues
}

/// Names of nodes, other than the last one, that the entry node cannot reach.
pub fn unreachable_nodes(workflow: &Workflow) -> Vec<String> {
    let Some(entry) = workflow.nodes.first() else {
        return Vec::new();
    };

    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue = VecDeque::from([entry.display_name.as_str()]);
    while let Some(current) = queue.pop_front() {
        if !visited.insert(current) {
            continue;
        }
        for target in workflow.connections.targets_of(current) {
            if !visited.contains(target) {
                queue.push_back(target);
            }
        }
    }

    let last = workflow.nodes.len() - 1;
    workflow
        .nodes
        .iter()
        .enumerate()
        .filter(|(i, n)| *i != last && !visited.contains(n.display_name.as_str()))
        .map(|(_, n)| n.display_name.clone())
        .collect()
}
