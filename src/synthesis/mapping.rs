use crate::analysis::hints::keys;
use crate::context::TriggerKind;
use crate::planner::{NodeCategory, NodeRequirement};

/// Master macro defining every concrete node kind together with its type
/// identifier, type version and default display name.
macro_rules! define_node_kinds {
    ( $( ($variant:ident, $type_name:literal, $version:literal, $display:literal) ),* $(,)? ) => {
        /// A concrete node kind of the downstream product.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum NodeKind {
            $( $variant, )*
        }

        impl NodeKind {
            pub const ALL: &'static [NodeKind] = &[ $( NodeKind::$variant, )* ];

            pub fn type_name(&self) -> &'static str {
                match self {
                    $( NodeKind::$variant => $type_name, )*
                }
            }

            pub fn type_version(&self) -> u32 {
                match self {
                    $( NodeKind::$variant => $version, )*
                }
            }

            pub fn default_name(&self) -> &'static str {
                match self {
                    $( NodeKind::$variant => $display, )*
                }
            }

            pub fn from_type_name(name: &str) -> Option<NodeKind> {
                match name {
                    $( $type_name => Some(NodeKind::$variant), )*
                    _ => None,
                }
            }
        }
    };
}

define_node_kinds! {
    // Triggers
    (WebhookTrigger, "n8n-nodes-base.webhook", 2, "Webhook Trigger"),
    (ScheduleTrigger, "n8n-nodes-base.scheduleTrigger", 1, "Schedule Trigger"),
    (ManualTrigger, "n8n-nodes-base.manualTrigger", 1, "Manual Trigger"),

    // Script and control flow
    (Code, "n8n-nodes-base.code", 2, "Process Data"),
    (If, "n8n-nodes-base.if", 2, "Check Conditions"),
    (Wait, "n8n-nodes-base.wait", 1, "Wait"),

    // Integrations
    (EmailSend, "n8n-nodes-base.emailSend", 2, "Send Email"),
    (Slack, "n8n-nodes-base.slack", 2, "Send Slack Message"),
    (Postgres, "n8n-nodes-base.postgres", 2, "Save to Database"),
    (GoogleSheets, "n8n-nodes-base.googleSheets", 4, "Append to Sheet"),
    (HttpRequest, "n8n-nodes-base.httpRequest", 4, "HTTP Request"),
    (ReadWriteFile, "n8n-nodes-base.readWriteFile", 1, "Write File"),

    // Protocol response
    (RespondToWebhook, "n8n-nodes-base.respondToWebhook", 1, "Respond to Webhook"),
}

impl NodeKind {
    pub fn for_trigger(trigger: TriggerKind) -> Self {
        match trigger {
            TriggerKind::Webhook => NodeKind::WebhookTrigger,
            TriggerKind::Schedule => NodeKind::ScheduleTrigger,
            TriggerKind::Manual => NodeKind::ManualTrigger,
        }
    }

    pub fn is_trigger(&self) -> bool {
        matches!(
            self,
            NodeKind::WebhookTrigger | NodeKind::ScheduleTrigger | NodeKind::ManualTrigger
        )
    }

    /// Triggers that hold the caller's connection open until a response node answers.
    pub fn requires_response(&self) -> bool {
        matches!(self, NodeKind::WebhookTrigger)
    }

    /// Resolves the concrete kind for a planned step. Unknown roles fall back
    /// to the code node used for generic processing.
    pub fn for_requirement(requirement: &NodeRequirement) -> Self {
        match &requirement.category {
            NodeCategory::Processing
            | NodeCategory::Validation
            | NodeCategory::Transformation
            | NodeCategory::Monitoring
            | NodeCategory::ErrorHandling
            | NodeCategory::Custom(_) => NodeKind::Code,
            NodeCategory::ConditionalRouting => NodeKind::If,
            NodeCategory::Delay => NodeKind::Wait,
            NodeCategory::MessagingIntegration => match requirement.hint(keys::SERVICE) {
                Some("chat") => NodeKind::Slack,
                _ => NodeKind::EmailSend,
            },
            NodeCategory::StorageIntegration => match requirement.hint(keys::SERVICE) {
                Some("spreadsheet") => NodeKind::GoogleSheets,
                _ => NodeKind::Postgres,
            },
            NodeCategory::HttpIntegration => NodeKind::HttpRequest,
            NodeCategory::FileHandling => NodeKind::ReadWriteFile,
        }
    }
}

/// Display name for a planned step.
pub fn display_name_for(requirement: &NodeRequirement, kind: NodeKind) -> String {
    if let Some(label) = &requirement.label {
        return label.clone();
    }
    match &requirement.category {
        NodeCategory::Validation => "Validate Data".to_string(),
        NodeCategory::Transformation => "Transform Data".to_string(),
        NodeCategory::Monitoring => "Log Activity".to_string(),
        NodeCategory::ErrorHandling => "Handle Errors".to_string(),
        NodeCategory::Custom(name) => title_case(name),
        _ => kind.default_name().to_string(),
    }
}

fn title_case(raw: &str) -> String {
    let words: Vec<String> = raw
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect();
    if words.is_empty() {
        NodeKind::Code.default_name().to_string()
    } else {
        words.join(" ")
    }
}
