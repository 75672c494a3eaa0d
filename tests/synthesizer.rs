//! Tests for the type-mapping table, parameter routines and script templates.
mod common;
use flowsmith::analysis::ParameterHints;
use flowsmith::prelude::*;
use serde_json::json;
use std::collections::HashSet;

fn context() -> GenerationContext {
    GenerationContext::new("test", TriggerKind::Manual, Complexity::Medium)
}

fn synthesize(requirement: NodeRequirement) -> Node {
    NodeSynthesizer::default().synthesize(&requirement, &mut context())
}

#[test]
fn test_type_mapping_table_round_trips() {
    for kind in NodeKind::ALL {
        assert_eq!(NodeKind::from_type_name(kind.type_name()), Some(*kind));
        assert!(kind.type_name().starts_with("n8n-nodes-base."));
        assert!(kind.type_version() >= 1);
    }
    assert_eq!(NodeKind::from_type_name("n8n-nodes-base.unknown"), None);

    let triggers: Vec<_> = NodeKind::ALL.iter().filter(|k| k.is_trigger()).collect();
    assert_eq!(triggers.len(), 3);
    assert!(NodeKind::WebhookTrigger.requires_response());
    assert!(!NodeKind::ScheduleTrigger.requires_response());
}

#[test]
fn test_email_step_uses_hinted_recipient() {
    let node = synthesize(
        NodeRequirement::new(NodeCategory::MessagingIntegration, "Send alert")
            .with_hint("service", "email")
            .with_hint("email", "ops@example.com"),
    );
    assert_eq!(node.node_type, "n8n-nodes-base.emailSend");
    assert_eq!(node.type_version, 2);
    assert_eq!(node.display_name, "Send Email");
    assert_eq!(node.parameters["toEmail"], json!("ops@example.com"));
    assert_eq!(node.parameters["fromEmail"], json!("noreply@example.com"));
    assert!(node.parameters.contains_key("subject"));
    assert!(node.parameters.contains_key("text"));
}

#[test]
fn test_chat_step_falls_back_to_placeholder_channel() {
    let node = synthesize(
        NodeRequirement::new(NodeCategory::MessagingIntegration, "Post update")
            .with_hint("service", "chat"),
    );
    assert_eq!(node.node_type, "n8n-nodes-base.slack");
    assert_eq!(node.parameters["channel"], json!("#general"));
    assert_eq!(node.parameters["resource"], json!("message"));
    assert_eq!(node.parameters["operation"], json!("post"));
}

#[test]
fn test_storage_steps() {
    let database = synthesize(NodeRequirement::new(NodeCategory::StorageIntegration, "Persist"));
    assert_eq!(database.node_type, "n8n-nodes-base.postgres");
    assert_eq!(database.parameters["table"], json!("workflow_data"));
    assert_eq!(database.parameters["schema"], json!("public"));
    assert_eq!(database.parameters["operation"], json!("insert"));

    let sheet = synthesize(
        NodeRequirement::new(NodeCategory::StorageIntegration, "Persist")
            .with_hint("service", "spreadsheet")
            .with_hint("sheet", "Leads"),
    );
    assert_eq!(sheet.node_type, "n8n-nodes-base.googleSheets");
    assert_eq!(sheet.type_version, 4);
    assert_eq!(sheet.parameters["sheetName"], json!("Leads"));
    assert_eq!(sheet.parameters["documentId"], json!("YOUR_SPREADSHEET_ID"));
}

#[test]
fn test_http_file_and_delay_steps() {
    let http = synthesize(NodeRequirement::new(NodeCategory::HttpIntegration, "Call API"));
    assert_eq!(http.node_type, "n8n-nodes-base.httpRequest");
    assert_eq!(http.parameters["url"], json!("https://api.example.com/endpoint"));
    assert_eq!(http.parameters["method"], json!("POST"));

    let file = synthesize(NodeRequirement::new(NodeCategory::FileHandling, "Write"));
    assert_eq!(file.node_type, "n8n-nodes-base.readWriteFile");
    assert_eq!(file.parameters["fileName"], json!("data.json"));

    let wait = synthesize(
        NodeRequirement::new(NodeCategory::Delay, "Pause")
            .with_hint("interval_amount", "2")
            .with_hint("interval_unit", "hours"),
    );
    assert_eq!(wait.node_type, "n8n-nodes-base.wait");
    assert_eq!(wait.parameters["amount"], json!(2));
    assert_eq!(wait.parameters["unit"], json!("hours"));
}

#[test]
fn test_conditional_step_checks_subject_field() {
    let node = synthesize(
        NodeRequirement::new(NodeCategory::ConditionalRouting, "Route").with_hint("subject", "email"),
    );
    assert_eq!(node.node_type, "n8n-nodes-base.if");
    let condition = &node.parameters["conditions"]["conditions"][0];
    assert_eq!(condition["leftValue"], json!("={{ $json.email }}"));
}

#[test]
fn test_script_steps_are_self_contained() {
    let categories = [
        NodeCategory::Processing,
        NodeCategory::Validation,
        NodeCategory::Transformation,
        NodeCategory::Monitoring,
        NodeCategory::ErrorHandling,
    ];
    for category in categories {
        let node = synthesize(
            NodeRequirement::new(category.clone(), "Work").with_hint("subject", "orderId,total"),
        );
        assert_eq!(node.node_type, "n8n-nodes-base.code", "{}", category);
        assert_eq!(node.parameters["mode"], json!("runOnceForAllItems"));
        let code = node.parameters["jsCode"].as_str().expect("jsCode is a string");
        assert!(code.contains("$input.all()"), "{} script does not read $input", category);
        assert!(!code.contains("$node"), "{} script references other nodes", category);
    }
}

#[test]
fn test_validation_script_embeds_fields_as_json() {
    let node = synthesize(
        NodeRequirement::new(NodeCategory::Validation, "Check").with_hint("subject", "patientId,email"),
    );
    let code = node.parameters["jsCode"].as_str().unwrap_or_default();
    assert!(code.contains(r#"const requiredFields = ["patientId","email"];"#));
}

#[test]
fn test_script_literals_are_escaped() {
    let node = synthesize(
        NodeRequirement::new(NodeCategory::Processing, "Greet").with_label(r#"Say "hi" \ bye"#),
    );
    assert_eq!(node.display_name, r#"Say "hi" \ bye"#);
    let code = node.parameters["jsCode"].as_str().unwrap_or_default();
    assert!(code.contains(r#"const stage = "Say \"hi\" \\ bye";"#));
}

#[test]
fn test_unknown_category_falls_back_to_processing() {
    let node = synthesize(NodeRequirement::new(
        NodeCategory::Custom("enrich-contacts".to_string()),
        "Enrich",
    ));
    assert_eq!(node.node_type, NodeKind::Code.type_name());
    assert_eq!(node.display_name, "Enrich Contacts");
}

#[test]
fn test_node_ids_are_unique_uuids() {
    let synthesizer = NodeSynthesizer::default();
    let mut ctx = context();
    let requirement = NodeRequirement::new(NodeCategory::Processing, "Work");
    let ids: HashSet<String> = (0..64)
        .map(|_| synthesizer.synthesize(&requirement, &mut ctx).id)
        .collect();
    assert_eq!(ids.len(), 64);
    for id in &ids {
        assert!(uuid::Uuid::parse_str(id).is_ok(), "'{}' is not a uuid", id);
    }
}

#[test]
fn test_trigger_nodes() {
    let synthesizer = NodeSynthesizer::default();
    let no_hints = ParameterHints::default();

    let mut webhook_ctx = GenerationContext::new("a", TriggerKind::Webhook, Complexity::Simple);
    let webhook = synthesizer.synthesize_trigger(&no_hints, &mut webhook_ctx);
    assert_eq!(webhook.node_type, "n8n-nodes-base.webhook");
    assert_eq!(webhook.type_version, 2);
    assert_eq!(webhook.parameters["httpMethod"], json!("POST"));
    assert_eq!(webhook.parameters["responseMode"], json!("responseNode"));
    let path = webhook.parameters["path"].as_str().unwrap_or_default();
    assert!(path.starts_with("workflow-"));

    let hints = ParameterHints::extract("run every 15 minutes");
    let mut schedule_ctx = GenerationContext::new("b", TriggerKind::Schedule, Complexity::Simple);
    let schedule = synthesizer.synthesize_trigger(&hints, &mut schedule_ctx);
    assert_eq!(schedule.node_type, "n8n-nodes-base.scheduleTrigger");
    assert_eq!(
        schedule.parameters["rule"]["interval"][0],
        json!({ "field": "minutes", "minutesInterval": 15 })
    );

    let mut manual_ctx = GenerationContext::new("c", TriggerKind::Manual, Complexity::Simple);
    let manual = synthesizer.synthesize_trigger(&no_hints, &mut manual_ctx);
    assert_eq!(manual.node_type, "n8n-nodes-base.manualTrigger");
    assert!(manual.parameters.is_empty());
}

#[test]
fn test_response_node() {
    let node = NodeSynthesizer::default().synthesize_response(&mut context());
    assert_eq!(node.node_type, "n8n-nodes-base.respondToWebhook");
    assert_eq!(node.display_name, "Respond to Webhook");
    assert_eq!(node.parameters["respondWith"], json!("json"));
}

#[test]
fn test_configured_placeholders_are_used() {
    let mut config = EngineConfig::default();
    config.placeholders.email = "team@acme.test".to_string();
    config.placeholders.table = "events".to_string();
    let synthesizer = NodeSynthesizer::new(&config);
    let mut ctx = context();

    let email = synthesizer.synthesize(
        &NodeRequirement::new(NodeCategory::MessagingIntegration, "Mail"),
        &mut ctx,
    );
    assert_eq!(email.parameters["toEmail"], json!("team@acme.test"));

    let db = synthesizer.synthesize(
        &NodeRequirement::new(NodeCategory::StorageIntegration, "Save"),
        &mut ctx,
    );
    assert_eq!(db.parameters["table"], json!("events"));
}
