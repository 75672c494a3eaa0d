//! Tests for description classification, complexity scoring and hint extraction.
mod common;
use common::*;
use flowsmith::analysis::{
    Action, Integration, NormalizedText, ParameterHints, complexity_signal, length_bonus,
};
use flowsmith::context::normalize_description;
use flowsmith::prelude::*;

#[test]
fn test_category_stability() {
    assert_eq!(
        analyze("patient appointment scheduling with medical records").primary_category,
        Category::Healthcare
    );
    assert_eq!(
        analyze("banking transaction fraud detection and compliance").primary_category,
        Category::Finance
    );

    let placeholder = normalize_description("", "General purpose workflow", 2000);
    assert_eq!(analyze(&placeholder).primary_category, Category::General);
}

#[test]
fn test_industry_keywords_outweigh_generic_ones() {
    // One healthcare hit (x3) beats two notification hits (x1 each).
    let result = analyze("notify the doctor");
    assert_eq!(result.primary_category, Category::Healthcare);
}

#[test]
fn test_ties_go_to_earlier_table() {
    let result = analyze("patient bank");
    assert_eq!(result.primary_category, Category::Healthcare);
    let finance = result
        .category_scores
        .iter()
        .find(|(c, _)| *c == Category::Finance)
        .map(|(_, s)| *s);
    assert_eq!(finance, Some(3));
}

#[test]
fn test_each_keyword_counts_once() {
    let once = analyze("patient");
    let repeated = analyze("patient patient patient patients");
    let score = |r: &AnalysisResult| {
        r.category_scores
            .iter()
            .find(|(c, _)| *c == Category::Healthcare)
            .map(|(_, s)| *s)
    };
    assert_eq!(score(&once), score(&repeated));
}

#[test]
fn test_unmatched_text_is_general() {
    let result = analyze("lorem ipsum dolor sit amet");
    assert_eq!(result.primary_category, Category::General);
    assert!(result.category_scores.iter().all(|(_, s)| *s == 0));
}

#[test]
fn test_actions_and_integrations_are_detected_independently() {
    let result = analyze("Validate the order and email the customer, then save it to the database");
    assert_eq!(result.primary_category, Category::Ecommerce);
    assert!(result.has_action(Action::Validate));
    assert!(result.has_action(Action::Store));
    assert!(result.has_integration(Integration::Email));
    assert!(result.has_integration(Integration::Database));
}

#[test]
fn test_integration_confidence_counts_hits() {
    let result = analyze("email the report and email the summary");
    assert_eq!(result.detected_integrations.get(&Integration::Email), Some(&2));
}

#[test]
fn test_short_keywords_need_whole_tokens() {
    // "db" must not match "dbase" and "if" must not match "verify".
    let result = analyze("verify dbase");
    assert!(!result.has_integration(Integration::Database));
    assert!(!result.has_action(Action::Route));
    assert!(result.has_action(Action::Validate));
}

#[test]
fn test_length_bonus_bands() {
    assert_eq!(length_bonus(0), 0);
    assert_eq!(length_bonus(9), 0);
    assert_eq!(length_bonus(10), 1);
    assert_eq!(length_bonus(20), 1);
    assert_eq!(length_bonus(21), 2);
    assert_eq!(length_bonus(50), 2);
    assert_eq!(length_bonus(75), 3);
    assert_eq!(length_bonus(100), 4);
    assert_eq!(length_bonus(1000), 4);
}

#[test]
fn test_complexity_signal_counts_indicators_and_phrases() {
    // Indicators: multiple, conditional, error. The phrase "error handling"
    // adds 2. Six words earn no length bonus.
    let text = NormalizedText::new("multiple conditional steps with error handling");
    assert_eq!(complexity_signal(&text), 3 + 2);
}

#[test]
fn test_complexity_signal_is_monotonic_in_richness() {
    let base = "Collect form submissions";
    let richer = format!("{} with data validation, audit logging and error handling", base);
    let richest = format!(
        "{} across multiple enterprise systems with conditional approval workflow and retry",
        richer
    );
    let a = analyze(base).complexity_signal;
    let b = analyze(&richer).complexity_signal;
    let c = analyze(&richest).complexity_signal;
    assert!(a <= b && b <= c, "signals not monotonic: {} {} {}", a, b, c);
    assert!(c > a);
}

#[test]
fn test_hostile_input_never_panics() {
    let inputs = [
        "",
        "\u{0000}\u{0007}\u{001b}[31m",
        "日本語のテキスト",
        "<script>alert('patient')</script>",
        "🚀🚀🚀 #️⃣ @@@ ...",
        "ÄÖÜ straße façade naïve",
    ];
    for input in inputs {
        let result = analyze(input);
        assert!(result.tags.first().is_some());
    }
    assert_eq!(analyze(inputs[3]).primary_category, Category::Healthcare);
}

#[test]
fn test_tags_start_with_category_and_are_unique() {
    let result = analyze("Send slack alerts and email digests about uptime metrics");
    assert_eq!(result.tags[0], result.primary_category.as_str());
    let mut deduped = result.tags.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), result.tags.len());
    assert!(result.tags.len() <= 8);
}

#[test]
fn test_hint_extraction() {
    let hints = ParameterHints::extract(
        "Send alerts to ops@example.com and #ops-alerts every 15 minutes via \
         https://hooks.example.com/x with POST into the customers table",
    );
    assert_eq!(hints.email.as_deref(), Some("ops@example.com"));
    assert_eq!(hints.channel.as_deref(), Some("#ops-alerts"));
    assert_eq!(hints.url.as_deref(), Some("https://hooks.example.com/x"));
    assert_eq!(hints.http_method.as_deref(), Some("POST"));
    assert_eq!(hints.table.as_deref(), Some("customers"));
    let interval = hints.interval.expect("interval should be parsed");
    assert_eq!(interval.amount, 15);
    assert_eq!(interval.unit, "minutes");
    assert!(hints.file_name.is_none());
}

#[test]
fn test_hint_extraction_shorthand_intervals_and_files() {
    let hints = ParameterHints::extract("Build a daily summary into report.csv on sheet Leads");
    assert_eq!(hints.file_name.as_deref(), Some("report.csv"));
    assert_eq!(hints.sheet.as_deref(), Some("Leads"));
    let interval = hints.interval.expect("daily should become an interval");
    assert_eq!((interval.amount, interval.unit.as_str()), (1, "days"));
}

#[test]
fn test_no_hints_from_plain_text() {
    let hints = ParameterHints::extract("Send email notification");
    assert!(hints.is_empty());
    assert!(hints.to_map().is_empty());
}

#[test]
fn test_addresses_joined_to_punctuation_are_extracted() {
    let cases = [
        ("Send email to:ops@acme.io when done", "ops@acme.io"),
        ("Forward to ops@acme.io's inbox", "ops@acme.io"),
        ("Notify (ops@acme.io/alerts@acme.io) by email", "ops@acme.io"),
        ("mail to mailto:bob@ex.com now", "bob@ex.com"),
        ("Write to ops@acme.io.", "ops@acme.io"),
    ];
    for (description, expected) in cases {
        let hints = ParameterHints::extract(description);
        assert_eq!(hints.email.as_deref(), Some(expected), "'{}'", description);
    }
}

#[test]
fn test_urls_and_channels_inside_punctuation() {
    let hints = ParameterHints::extract(
        "Post to (#deploys) after calling <https://api.acme.io/v1/hooks>, then stop.",
    );
    assert_eq!(hints.channel.as_deref(), Some("#deploys"));
    assert_eq!(hints.url.as_deref(), Some("https://api.acme.io/v1/hooks"));

    let hints = ParameterHints::extract("See https://acme.io/report.csv, ticket #42 and a&#39;b");
    assert_eq!(hints.url.as_deref(), Some("https://acme.io/report.csv"));
    assert!(hints.channel.is_none());
    assert!(hints.file_name.is_none());
}

#[test]
fn test_interval_wording_variants() {
    let hints = ParameterHints::extract("Run it Every 2 Hours.");
    let interval = hints.interval.expect("interval");
    assert_eq!((interval.amount, interval.unit.as_str()), (2, "hours"));

    let hints = ParameterHints::extract("check every day");
    let interval = hints.interval.expect("interval");
    assert_eq!((interval.amount, interval.unit.as_str()), (1, "days"));

    assert!(ParameterHints::extract("every now and then").interval.is_none());
}
