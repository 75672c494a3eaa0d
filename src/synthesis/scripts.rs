//! Script templates for code nodes.
//!
//! Every template reads its records from `$input`, which the downstream runtime
//! always provides, and embeds any other value as a JSON literal. The generated
//! bodies never reference variables defined outside themselves.

use crate::planner::NodeCategory;
use serde_json::json;

/// Selects and renders the template for a script-executing step.
pub fn render(category: &NodeCategory, subject: &[&str], label: &str) -> String {
    match category {
        NodeCategory::Validation if !subject.is_empty() => validate_fields(subject),
        NodeCategory::Validation => validate_non_empty(),
        NodeCategory::Transformation => transform_records(subject),
        NodeCategory::Monitoring => record_metrics(label),
        NodeCategory::ErrorHandling => capture_errors(label),
        _ => process_records(label),
    }
}

fn literal<T: serde::Serialize + ?Sized>(value: &T) -> String {
    json!(value).to_string()
}

fn process_records(label: &str) -> String {
    format!(
        r#"// Baseline processing step
const stage = {stage};
const items = $input.all();

return items.map((item) => ({{
  json: {{
    ...item.json,
    processedAt: new Date().toISOString(),
    stage,
  }},
}}));"#,
        stage = literal(label)
    )
}

fn validate_fields(fields: &[&str]) -> String {
    format!(
        r#"// Check that every record carries the required fields
const requiredFields = {fields};
const items = $input.all();

return items.map((item) => {{
  const data = item.json || {{}};
  const missing = requiredFields.filter(
    (field) => data[field] === undefined || data[field] === null || data[field] === ''
  );
  const errors = missing.map((field) => `Missing required field: ${{field}}`);
  if (typeof data.email === 'string' && data.email !== '' && !/^[^@\s]+@[^@\s]+\.[^@\s]+$/.test(data.email)) {{
    errors.push('Invalid email address');
  }}
  return {{
    json: {{
      ...data,
      valid: errors.length === 0,
      validationErrors: errors,
    }},
  }};
}});"#,
        fields = literal(fields)
    )
}

fn validate_non_empty() -> String {
    r#"// Drop empty records
const items = $input.all();

return items
  .filter((item) => item.json && Object.keys(item.json).length > 0)
  .map((item) => ({ json: { ...item.json, valid: true } }));"#
        .to_string()
}

fn transform_records(subject: &[&str]) -> String {
    format!(
        r#"// Normalize keys and trim string values
const keepFields = {fields};
const items = $input.all();

return items.map((item) => {{
  const source = item.json || {{}};
  const result = {{}};
  for (const [key, value] of Object.entries(source)) {{
    const normalizedKey = key.trim().replace(/\s+(\w)/g, (_, c) => c.toUpperCase());
    result[normalizedKey] = typeof value === 'string' ? value.trim() : value;
  }}
  for (const field of keepFields) {{
    if (!(field in result)) {{
      result[field] = null;
    }}
  }}
  result.transformedAt = new Date().toISOString();
  return {{ json: result }};
}});"#,
        fields = literal(subject)
    )
}

fn record_metrics(label: &str) -> String {
    format!(
        r#"// Summarize the batch for monitoring
const source = {source};
const items = $input.all();
const failed = items.filter((item) => item.json && item.json.valid === false).length;

return [
  {{
    json: {{
      source,
      total: items.length,
      failed,
      succeeded: items.length - failed,
      recordedAt: new Date().toISOString(),
    }},
  }},
];"#,
        source = literal(label)
    )
}

fn capture_errors(label: &str) -> String {
    format!(
        r#"// Separate failed records and attach an error report
const handler = {handler};
const items = $input.all();

return items.map((item) => {{
  const data = item.json || {{}};
  const hasError = Boolean(data.error) || data.valid === false;
  return {{
    json: {{
      ...data,
      status: hasError ? 'error' : 'ok',
      errorReport: hasError
        ? {{ handler, message: String(data.error || 'Validation failed'), at: new Date().toISOString() }}
        : null,
    }},
  }};
}});"#,
        handler = literal(label)
    )
}
