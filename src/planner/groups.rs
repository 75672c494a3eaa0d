use super::requirement::{NodeCategory, NodeRequirement};
use crate::analysis::hints::keys;
use crate::analysis::{Action, AnalysisResult, Category, Integration};
use itertools::Itertools;

/// Keyword groups that pull a step into medium and complex plans, in the
/// priority order they are appended.
pub static KEYWORD_GROUPS: &[(NodeCategory, &[&str])] = &[
    (
        NodeCategory::Validation,
        &["valid", "verif", "check", "ensure", "sanitiz", "required field"],
    ),
    (
        NodeCategory::Transformation,
        &["transform", "convert", "format", "pars", "normaliz", "clean", "enrich", "map"],
    ),
    (
        NodeCategory::ConditionalRouting,
        &[
            "if", "condition", "route", "routing", "branch", "approv", "escalat", "filter",
            "qualif", "decid", "priorit",
        ],
    ),
    (
        NodeCategory::MessagingIntegration,
        &[
            "email", "mail", "slack", "notif", "notify", "alert", "sms", "send", "message",
            "remind", "chat", "telegram", "discord",
        ],
    ),
    (
        NodeCategory::StorageIntegration,
        &[
            "database", "db", "store", "save", "sql", "postgres", "mysql", "sheet", "spreadsheet",
            "airtable", "insert", "persist", "archiv", "record", "crm",
        ],
    ),
    (
        NodeCategory::HttpIntegration,
        &["api", "apis", "http", "endpoint", "fetch", "request", "url", "rest api"],
    ),
    (
        NodeCategory::FileHandling,
        &["file", "upload", "download", "pdf", "csv", "attachment", "document", "s3", "ftp"],
    ),
    (
        NodeCategory::Monitoring,
        &["monitor", "track", "audit", "log", "logging", "metric", "uptime", "observ", "watch"],
    ),
];

/// Categories used to widen thin plans, broadest first. Order inside a tier is
/// permuted by the request seed.
pub static DIVERSITY_TIERS: &[&[NodeCategory]] = &[
    &[
        NodeCategory::Transformation,
        NodeCategory::Validation,
        NodeCategory::ConditionalRouting,
    ],
    &[
        NodeCategory::StorageIntegration,
        NodeCategory::MessagingIntegration,
        NodeCategory::HttpIntegration,
    ],
    &[
        NodeCategory::Monitoring,
        NodeCategory::FileHandling,
        NodeCategory::ErrorHandling,
        NodeCategory::Delay,
    ],
];

/// Steps most often seen in workflows of each domain, most common first.
pub static USAGE_PROFILES: &[(Category, &[NodeCategory])] = &[
    (
        Category::Healthcare,
        &[
            NodeCategory::Validation,
            NodeCategory::Transformation,
            NodeCategory::StorageIntegration,
            NodeCategory::MessagingIntegration,
            NodeCategory::Monitoring,
        ],
    ),
    (
        Category::Finance,
        &[
            NodeCategory::Validation,
            NodeCategory::ConditionalRouting,
            NodeCategory::StorageIntegration,
            NodeCategory::Monitoring,
            NodeCategory::MessagingIntegration,
        ],
    ),
    (
        Category::Education,
        &[
            NodeCategory::Transformation,
            NodeCategory::StorageIntegration,
            NodeCategory::MessagingIntegration,
        ],
    ),
    (
        Category::Ecommerce,
        &[
            NodeCategory::Validation,
            NodeCategory::ConditionalRouting,
            NodeCategory::StorageIntegration,
            NodeCategory::MessagingIntegration,
            NodeCategory::HttpIntegration,
        ],
    ),
    (
        Category::LeadProcessing,
        &[
            NodeCategory::Validation,
            NodeCategory::ConditionalRouting,
            NodeCategory::StorageIntegration,
            NodeCategory::MessagingIntegration,
        ],
    ),
    (
        Category::DataSync,
        &[
            NodeCategory::HttpIntegration,
            NodeCategory::Transformation,
            NodeCategory::StorageIntegration,
        ],
    ),
    (
        Category::Monitoring,
        &[
            NodeCategory::HttpIntegration,
            NodeCategory::ConditionalRouting,
            NodeCategory::MessagingIntegration,
        ],
    ),
    (
        Category::Notification,
        &[
            NodeCategory::Transformation,
            NodeCategory::MessagingIntegration,
        ],
    ),
    (
        Category::Automation,
        &[
            NodeCategory::Transformation,
            NodeCategory::HttpIntegration,
            NodeCategory::StorageIntegration,
        ],
    ),
];

pub fn usage_profile(category: Category) -> &'static [NodeCategory] {
    USAGE_PROFILES
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, profile)| *profile)
        .unwrap_or(&[])
}

/// Step categories implied directly by detected integrations and actions.
pub fn implied_categories(analysis: &AnalysisResult) -> Vec<NodeCategory> {
    let mut implied = Vec::new();
    if analysis.has_action(Action::Validate) {
        implied.push(NodeCategory::Validation);
    }
    if analysis.has_action(Action::Transform) {
        implied.push(NodeCategory::Transformation);
    }
    if analysis.has_action(Action::Route) {
        implied.push(NodeCategory::ConditionalRouting);
    }
    if analysis.detected_integrations.keys().any(Integration::is_messaging)
        || analysis.has_action(Action::Notify)
    {
        implied.push(NodeCategory::MessagingIntegration);
    }
    if analysis.detected_integrations.keys().any(Integration::is_storage)
        || analysis.has_action(Action::Store)
    {
        implied.push(NodeCategory::StorageIntegration);
    }
    if analysis.has_integration(Integration::HttpApi) {
        implied.push(NodeCategory::HttpIntegration);
    }
    if analysis.has_integration(Integration::FileStorage) {
        implied.push(NodeCategory::FileHandling);
    }
    if analysis.has_action(Action::Monitor) {
        implied.push(NodeCategory::Monitoring);
    }
    implied
}

/// Record fields a validation or processing script checks for, per domain.
fn subject_fields(analysis: &AnalysisResult) -> Vec<&'static str> {
    let mut fields: Vec<&'static str> = match analysis.primary_category {
        Category::Healthcare => vec!["patientId", "appointmentDate"],
        Category::Finance => vec!["transactionId", "amount"],
        Category::Education => vec!["studentId", "courseId"],
        Category::Ecommerce => vec!["orderId", "total"],
        Category::LeadProcessing => vec!["email", "company"],
        Category::DataSync => vec!["id", "updatedAt"],
        Category::Monitoring => vec!["status", "timestamp"],
        _ => vec!["id"],
    };
    if analysis.hints.email.is_some() || analysis.has_integration(Integration::Email) {
        fields.push("email");
    }
    fields.into_iter().unique().collect()
}

fn messaging_service(analysis: &AnalysisResult) -> &'static str {
    match analysis.strongest_integration(&[Integration::Chat, Integration::Email]) {
        Some(Integration::Chat) => "chat",
        Some(_) => "email",
        None if analysis.hints.channel.is_some() && analysis.hints.email.is_none() => "chat",
        None => "email",
    }
}

fn storage_service(analysis: &AnalysisResult) -> &'static str {
    match analysis.strongest_integration(&[Integration::Database, Integration::Spreadsheet]) {
        Some(Integration::Spreadsheet) => "spreadsheet",
        _ if analysis.hints.sheet.is_some() && analysis.hints.table.is_none() => "spreadsheet",
        _ => "database",
    }
}

/// Builds the requirement for one step category, pulling in the hints that
/// matter for it.
pub fn requirement_for(category: NodeCategory, analysis: &AnalysisResult) -> NodeRequirement {
    let domain = analysis.primary_category.as_str();
    let hints = &analysis.hints;
    let subject = subject_fields(analysis).join(",");

    match category {
        NodeCategory::Processing => {
            NodeRequirement::new(category, format!("Prepare incoming {} data", domain))
                .with_hint(keys::SUBJECT, domain)
        }
        NodeCategory::Validation => {
            NodeRequirement::new(category, format!("Validate required {} fields", domain))
                .with_hint(keys::SUBJECT, subject)
        }
        NodeCategory::Transformation => {
            NodeRequirement::new(category, "Normalize and reshape records")
                .with_hint(keys::SUBJECT, subject)
        }
        NodeCategory::ConditionalRouting => {
            NodeRequirement::new(category, "Route records by outcome")
                .with_hint(keys::SUBJECT, subject_fields(analysis)[0])
        }
        NodeCategory::MessagingIntegration => {
            let service = messaging_service(analysis);
            let mut req = NodeRequirement::new(category, format!("Send {} notification", domain))
                .with_hint(keys::SERVICE, service);
            if let Some(email) = &hints.email {
                req = req.with_hint(keys::EMAIL, email.clone());
            }
            if let Some(channel) = &hints.channel {
                req = req.with_hint(keys::CHANNEL, channel.clone());
            }
            req
        }
        NodeCategory::StorageIntegration => {
            let service = storage_service(analysis);
            let mut req = NodeRequirement::new(category, format!("Persist {} records", domain))
                .with_hint(keys::SERVICE, service);
            if let Some(table) = &hints.table {
                req = req.with_hint(keys::TABLE, table.clone());
            }
            if let Some(sheet) = &hints.sheet {
                req = req.with_hint(keys::SHEET, sheet.clone());
            }
            req
        }
        NodeCategory::HttpIntegration => {
            let mut req = NodeRequirement::new(category, "Call external API");
            if let Some(url) = &hints.url {
                req = req.with_hint(keys::URL, url.clone());
            }
            if let Some(method) = &hints.http_method {
                req = req.with_hint(keys::HTTP_METHOD, method.clone());
            }
            req
        }
        NodeCategory::FileHandling => {
            let mut req = NodeRequirement::new(category, "Read or write a data file");
            if let Some(file_name) = &hints.file_name {
                req = req.with_hint(keys::FILE_NAME, file_name.clone());
            }
            req
        }
        NodeCategory::Monitoring => {
            NodeRequirement::new(category, format!("Record {} activity metrics", domain))
                .with_hint(keys::SUBJECT, domain)
        }
        NodeCategory::ErrorHandling => {
            NodeRequirement::new(category, "Capture and report processing errors")
        }
        NodeCategory::Delay => {
            let mut req = NodeRequirement::new(category, "Pause before continuing");
            if let Some(interval) = &hints.interval {
                req = req
                    .with_hint(keys::INTERVAL_AMOUNT, interval.amount.to_string())
                    .with_hint(keys::INTERVAL_UNIT, interval.unit.clone());
            }
            req
        }
        NodeCategory::Custom(name) => {
            let purpose = format!("Custom step: {}", name);
            NodeRequirement::new(NodeCategory::Custom(name), purpose)
        }
    }
}
