//! Tests for plan bounds, keyword-group planning and diversity filling.
mod common;
use common::*;
use flowsmith::planner::groups::{DIVERSITY_TIERS, usage_profile};
use flowsmith::prelude::*;

fn categories(plan: &[NodeRequirement]) -> Vec<NodeCategory> {
    plan.iter().map(|r| r.category.clone()).collect()
}

#[test]
fn test_bound_table_values() {
    let cases = [
        (Complexity::Simple, 0, (2, 3)),
        (Complexity::Simple, 9, (2, 3)),
        (Complexity::Medium, 2, (4, 7)),
        (Complexity::Medium, 3, (5, 8)),
        (Complexity::Medium, 6, (6, 10)),
        (Complexity::Complex, 0, (6, 12)),
        (Complexity::Complex, 5, (7, 13)),
        (Complexity::Complex, 40, (8, 15)),
    ];
    for (complexity, signal, (min, max)) in cases {
        let bounds = PlanBounds::for_request(complexity, signal);
        assert_eq!(
            (bounds.min_nodes, bounds.max_nodes),
            (min, max),
            "{} at signal {}",
            complexity,
            signal
        );
    }
}

#[test]
fn test_bounds_are_monotonic() {
    let tiers = [Complexity::Simple, Complexity::Medium, Complexity::Complex];
    for signal in 0..12 {
        for pair in tiers.windows(2) {
            let lower = PlanBounds::for_request(pair[0], signal);
            let upper = PlanBounds::for_request(pair[1], signal);
            assert!(lower.min_nodes <= upper.min_nodes);
            assert!(lower.max_nodes <= upper.max_nodes);
        }
        for tier in tiers {
            let now = PlanBounds::for_request(tier, signal);
            let next = PlanBounds::for_request(tier, signal + 1);
            assert!(now.min_nodes <= next.min_nodes && now.max_nodes <= next.max_nodes);
            assert!(now.min_requirements() <= now.max_requirements());
        }
    }
}

#[test]
fn test_simple_plan_holds_one_keyword_step() {
    let planner = NodePlanner::default();

    let messaging = planner.plan(&analyze("Send email notification"), Complexity::Simple, 1);
    assert_eq!(categories(&messaging), vec![NodeCategory::MessagingIntegration]);

    let storage = planner.plan(&analyze("Save rows to the database"), Complexity::Simple, 1);
    assert_eq!(categories(&storage), vec![NodeCategory::StorageIntegration]);

    let plain = planner.plan(&analyze("Tidy things up"), Complexity::Simple, 1);
    assert_eq!(categories(&plain), vec![NodeCategory::Processing]);
}

#[test]
fn test_simple_plan_ignores_richness() {
    let planner = NodePlanner::default();
    let plan = planner.plan(&analyze(HEALTHCARE_DESCRIPTION), Complexity::Simple, 7);
    assert_eq!(plan.len(), 1);
}

#[test]
fn test_medium_plan_starts_with_processing_and_follows_group_order() {
    let planner = NodePlanner::default();
    let analysis = analyze(LEAD_DESCRIPTION);
    let plan = planner.plan(&analysis, Complexity::Medium, 3);

    assert_eq!(
        categories(&plan),
        vec![
            NodeCategory::Processing,
            NodeCategory::Validation,
            NodeCategory::ConditionalRouting,
            NodeCategory::MessagingIntegration,
        ]
    );
}

#[test]
fn test_error_handling_for_complex_or_high_signal() {
    let planner = NodePlanner::default();
    let quiet = analyze(LEAD_DESCRIPTION);
    assert!(quiet.complexity_signal < 5);

    let medium = planner.plan(&quiet, Complexity::Medium, 3);
    assert!(!categories(&medium).contains(&NodeCategory::ErrorHandling));

    let complex = planner.plan(&quiet, Complexity::Complex, 3);
    assert!(categories(&complex).contains(&NodeCategory::ErrorHandling));

    let loud = analyze(HEALTHCARE_DESCRIPTION);
    assert!(loud.complexity_signal >= 5);
    let medium_loud = planner.plan(&loud, Complexity::Medium, 3);
    assert!(categories(&medium_loud).contains(&NodeCategory::ErrorHandling));
}

#[test]
fn test_plans_respect_requirement_bounds() {
    let planner = NodePlanner::default();
    for description in SAMPLE_DESCRIPTIONS {
        let analysis = analyze(description);
        for complexity in [Complexity::Medium, Complexity::Complex] {
            let bounds = PlanBounds::for_request(complexity, analysis.complexity_signal);
            let plan = planner.plan(&analysis, complexity, 42);
            assert!(
                plan.len() >= bounds.min_requirements() && plan.len() <= bounds.max_requirements(),
                "'{}' at {}: {} requirements outside {:?}",
                description,
                complexity,
                plan.len(),
                bounds
            );
        }
    }
}

#[test]
fn test_diversity_fill_never_repeats_a_category() {
    let planner = NodePlanner::default();
    let analysis = analyze("lorem ipsum");
    for seed in 0..20 {
        let plan = planner.plan(&analysis, Complexity::Complex, seed);
        let mut seen = categories(&plan);
        let total = seen.len();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), total, "seed {} repeated a category", seed);
    }
}

#[test]
fn test_diversity_fill_takes_broadest_tier_first() {
    let planner = NodePlanner::default();
    // Nothing matches: processing and error handling, then three picks reach 5.
    let analysis = analyze("lorem ipsum");
    let plan = planner.plan(&analysis, Complexity::Complex, 11);
    let planned = categories(&plan);
    let picked = &planned[1..];
    for category in DIVERSITY_TIERS[0] {
        assert!(picked.contains(category), "missing first-tier {:?}", category);
    }
}

#[test]
fn test_planning_is_deterministic_per_seed() {
    let planner = NodePlanner::default();
    let analysis = analyze("Tidy things up");
    let first = planner.plan(&analysis, Complexity::Complex, 99);
    let second = planner.plan(&analysis, Complexity::Complex, 99);
    assert_eq!(first, second);
}

#[test]
fn test_plan_from_categories_is_clipped_to_budget() {
    let planner = NodePlanner::default();
    let analysis = analyze("lorem ipsum");
    let all: Vec<NodeCategory> = DIVERSITY_TIERS.iter().flat_map(|t| t.iter().cloned()).collect();

    let plan = planner.plan_from_categories(&analysis, Complexity::Medium, 5, &all);
    let bounds = PlanBounds::for_request(Complexity::Medium, analysis.complexity_signal);
    assert_eq!(plan.len(), bounds.max_requirements());
    assert_eq!(plan[0].category, NodeCategory::Processing);
    // Latest appended are dropped first.
    assert_eq!(categories(&plan)[1..], all[..plan.len() - 1]);
}

#[test]
fn test_usage_profiles_cover_every_domain() {
    for category in [
        Category::Healthcare,
        Category::Finance,
        Category::Education,
        Category::Ecommerce,
        Category::LeadProcessing,
    ] {
        assert!(!usage_profile(category).is_empty(), "{} has no profile", category);
    }
    assert!(usage_profile(Category::General).is_empty());
}

#[test]
fn test_requirements_carry_hints() {
    let planner = NodePlanner::default();
    let analysis = analyze("Email ops@example.com and save each order into the orders table");
    let plan = planner.plan(&analysis, Complexity::Medium, 1);

    let messaging = plan
        .iter()
        .find(|r| r.category == NodeCategory::MessagingIntegration)
        .expect("messaging step planned");
    assert_eq!(messaging.hint("email"), Some("ops@example.com"));

    let storage = plan
        .iter()
        .find(|r| r.category == NodeCategory::StorageIntegration)
        .expect("storage step planned");
    assert_eq!(storage.hint("table"), Some("orders"));
    assert_eq!(storage.hint("service"), Some("database"));
}
