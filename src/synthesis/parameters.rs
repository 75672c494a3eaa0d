use super::mapping::NodeKind;
use super::scripts;
use crate::analysis::hints::keys;
use crate::config::Placeholders;
use crate::planner::NodeRequirement;
use serde_json::{Map, Value, json};

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Builds the parameter object for a planned step. Each kind always produces
/// the same parameter shape; hints only change values.
pub fn for_requirement(
    kind: NodeKind,
    requirement: &NodeRequirement,
    display_name: &str,
    placeholders: &Placeholders,
) -> Map<String, Value> {
    let hint = |key: &str| requirement.hint(key);

    let value = match kind {
        NodeKind::Code => {
            let subject: Vec<&str> = hint(keys::SUBJECT)
                .map(|s| s.split(',').filter(|f| !f.is_empty()).collect())
                .unwrap_or_default();
            json!({
                "mode": "runOnceForAllItems",
                "jsCode": scripts::render(&requirement.category, &subject, display_name),
            })
        }
        NodeKind::If => {
            let field = hint(keys::SUBJECT).unwrap_or("valid");
            json!({
                "conditions": {
                    "options": { "caseSensitive": true, "typeValidation": "loose" },
                    "combinator": "and",
                    "conditions": [{
                        "leftValue": format!("={{{{ $json.{} }}}}", field),
                        "rightValue": "",
                        "operator": { "type": "string", "operation": "notEmpty", "singleValue": true },
                    }],
                },
            })
        }
        NodeKind::Wait => {
            let amount = hint(keys::INTERVAL_AMOUNT)
                .and_then(|a| a.parse::<u32>().ok())
                .unwrap_or(5);
            json!({
                "amount": amount,
                "unit": hint(keys::INTERVAL_UNIT).unwrap_or("minutes"),
            })
        }
        NodeKind::EmailSend => json!({
            "fromEmail": placeholders.sender_email,
            "toEmail": hint(keys::EMAIL).unwrap_or(placeholders.email.as_str()),
            "subject": format!("Workflow update: {}", requirement.purpose),
            "text": "={{ JSON.stringify($json, null, 2) }}",
        }),
        NodeKind::Slack => json!({
            "resource": "message",
            "operation": "post",
            "channel": hint(keys::CHANNEL).unwrap_or(placeholders.channel.as_str()),
            "text": format!("{}: {{{{ $json.status || 'processed' }}}}", requirement.purpose),
        }),
        NodeKind::Postgres => json!({
            "operation": "insert",
            "schema": "public",
            "table": hint(keys::TABLE).unwrap_or(placeholders.table.as_str()),
            "columns": "",
        }),
        NodeKind::GoogleSheets => json!({
            "operation": "append",
            "documentId": placeholders.document_id,
            "sheetName": hint(keys::SHEET).unwrap_or(placeholders.sheet.as_str()),
        }),
        NodeKind::HttpRequest => json!({
            "method": hint(keys::HTTP_METHOD).unwrap_or("POST"),
            "url": hint(keys::URL).unwrap_or(placeholders.url.as_str()),
            "options": {},
        }),
        NodeKind::ReadWriteFile => json!({
            "operation": "write",
            "fileName": hint(keys::FILE_NAME).unwrap_or(placeholders.file_name.as_str()),
        }),
        NodeKind::WebhookTrigger
        | NodeKind::ScheduleTrigger
        | NodeKind::ManualTrigger
        | NodeKind::RespondToWebhook => Value::Object(Map::new()),
    };
    object(value)
}

pub fn webhook_trigger(path: &str) -> Map<String, Value> {
    object(json!({
        "httpMethod": "POST",
        "path": path,
        "responseMode": "responseNode",
    }))
}

pub fn schedule_trigger(amount: u32, unit: &str) -> Map<String, Value> {
    let field = match unit {
        "minutes" => "minutes",
        "days" => "days",
        "weeks" => "weeks",
        _ => "hours",
    };
    let interval_key = match field {
        "minutes" => "minutesInterval",
        "days" => "daysInterval",
        "weeks" => "weeksInterval",
        _ => "hoursInterval",
    };
    object(json!({
        "rule": {
            "interval": [{ "field": field, interval_key: amount }],
        },
    }))
}

pub fn respond_to_webhook() -> Map<String, Value> {
    object(json!({
        "respondWith": "json",
        "responseBody": "={{ JSON.stringify({ success: true, data: $json }) }}",
    }))
}
